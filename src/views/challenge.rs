use maud::{html, Markup};

use crate::{game::GameSession, names, views::components};

fn challenger(session: &GameSession) -> &str {
    session.original_player.as_deref().unwrap_or("Someone")
}

pub fn name_form(session: &GameSession, token: &str) -> Markup {
    html! {
        article style="max-width: 28rem; margin: 2rem auto;" {
            h1 style="text-align: center;" { (challenger(session)) " challenged you!" }
            @if let Some(score) = session.original_score {
                p style="text-align: center;" {
                    "They scored " strong { (score) "/" (session.text_ids.len()) } ". Can you beat them?"
                }
            }
            form hx-post=(names::challenge_url(token))
                 hx-target="main"
                 hx-swap="innerHTML" {
                label {
                    "Enter your name:"
                    input name="name"
                          type="text"
                          autocomplete="off"
                          maxlength=(names::MAX_PLAYER_NAME_LEN)
                          required;
                }
                input type="submit" value="Start Challenge";
            }
        }
    }
}

pub enum Verdict {
    Won,
    Tie,
    Lost,
}

impl Verdict {
    pub fn compare(yours: u32, theirs: u32) -> Self {
        match yours.cmp(&theirs) {
            std::cmp::Ordering::Greater => Verdict::Won,
            std::cmp::Ordering::Equal => Verdict::Tie,
            std::cmp::Ordering::Less => Verdict::Lost,
        }
    }
}

pub fn result(session: &GameSession, token: &str, score: u32, total: usize) -> Markup {
    let theirs = session.original_score.unwrap_or(0);

    html! {
        h1 style="text-align: center;" { "Challenge Complete!" }
        article {
            div.versus {
                div style="text-align: center;" {
                    div style="font-size: 1rem; color: #666;" { "You" }
                    div { (score) "/" (total) }
                }
                div style="font-size: 2rem;" { "vs" }
                div style="text-align: center;" {
                    div style="font-size: 1rem; color: #666;" { (challenger(session)) }
                    div { (theirs) "/" (total) }
                }
            }
            p style="text-align: center; font-size: 1.25rem; margin-top: 1.5rem;" {
                @match Verdict::compare(score, theirs) {
                    Verdict::Tie => {
                        span style="color: #ca8a04;" { "It's a tie! \u{1F91D}" }
                    }
                    Verdict::Won => {
                        span style="color: #16a34a;" { "You won! \u{1F3C6}" }
                    }
                    Verdict::Lost => {
                        span style="color: #2563eb;" { "Better luck next time! \u{1F3AF}" }
                    }
                }
            }
            p style="display: flex; gap: 1rem; justify-content: center;" {
                (components::nav_button(names::HOME_URL, "Back to Home", ""))
                (components::nav_button(&names::challenge_url(token), "Try Again", "secondary"))
            }
        }
    }
}
