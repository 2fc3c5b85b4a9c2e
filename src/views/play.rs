use maud::{html, Markup};

use crate::{
    game::{RoundSummary, TierQueue},
    models::{Difficulty, QuizItem},
    names,
    views::components,
};

pub struct QuestionData<'a> {
    pub heading: String,
    pub item: &'a QuizItem,
    pub question_idx: usize,
    pub questions_count: usize,
    pub score: u32,
    pub total: usize,
    pub tier: Option<TierData>,
}

pub struct TierData {
    pub label: String,
    pub number: usize,
    pub count: usize,
}

impl TierData {
    /// Tier line for multi-tier games, `None` for a single round.
    pub fn from_queue(tiers: &TierQueue) -> Option<Self> {
        (tiers.tier_count() > 1).then(|| TierData {
            label: tiers.current_label().to_string(),
            number: tiers.tier_number(),
            count: tiers.tier_count(),
        })
    }
}

pub struct FeedbackData<'a> {
    pub item: &'a QuizItem,
    pub correct: bool,
    pub next_tier: Option<String>,
}

fn scoreline(heading: &str, score: u32, total: usize) -> Markup {
    html! {
        div.scoreline {
            strong { (heading) }
            strong { "Score: " (score) "/" (total) }
        }
    }
}

pub fn question(data: QuestionData) -> Markup {
    html! {
        (scoreline(&data.heading, data.score, data.total))
        article {
            p style="color: #666; font-size: 0.9rem;" {
                @if let Some(tier) = &data.tier {
                    "Tier " (tier.number) " of " (tier.count) ": " (tier.label) " \u{00B7} "
                }
                "Question " strong { (data.question_idx + 1) } " of " (data.questions_count)
            }

            div.passage {
                p { (data.item.content) }
            }

            div.guess-buttons {
                button hx-post=(names::GUESS_URL)
                       hx-vals="{\"guess\": \"ai\"}"
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "AI Generated"
                }
                button.human
                       hx-post=(names::GUESS_URL)
                       hx-vals="{\"guess\": \"human\"}"
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "Human Written"
                }
            }
        }
    }
}

/// Shown between a guess and the next question. The page itself asks for
/// the next view after the delay; leaving the page cancels that request.
pub fn feedback(data: FeedbackData) -> Markup {
    let (class, text) = if data.correct {
        ("feedback correct", "Correct! \u{1F389}")
    } else {
        ("feedback wrong", "Oops, wrong answer! \u{1F605}")
    };

    html! {
        article style="opacity: 0.85;" {
            div.passage {
                p { (data.item.content) }
            }
            p class=(class) { (text) }
            @if let Some(label) = &data.next_tier {
                p style="text-align: center;" { "Up next: " strong { (label) } }
            }
        }
        div hx-get=(names::PLAY_URL)
            hx-trigger=(format!("load delay:{}ms", names::FEEDBACK_DELAY_MS))
            hx-target="main"
            hx-swap="innerHTML" {}
    }
}

fn results_table(summary: &RoundSummary) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "#" }
                    th { "Passage" }
                    th { "Your guess" }
                    th { "Answer" }
                }
            }
            tbody {
                @for (idx, result) in summary.results.iter().enumerate() {
                    tr {
                        td { (idx + 1) }
                        td { (result.item.content) }
                        td { (if result.guess_is_ai { "AI" } else { "Human" }) }
                        td class=(if result.correct { "result-correct" } else { "result-wrong" }) {
                            (if result.item.is_ai { "AI" } else { "Human" })
                        }
                    }
                }
            }
        }
    }
}

fn difficulty_table(summary: &RoundSummary) -> Markup {
    html! {
        @if !summary.per_difficulty.is_empty() {
            table {
                tbody {
                    @for difficulty in Difficulty::ALL {
                        @if let Some(acc) = summary.per_difficulty.get(&difficulty) {
                            tr {
                                td { (difficulty.label()) }
                                td {
                                    strong { (format!("{:.1}%", acc.percent())) }
                                    " (" (acc.correct) " / " (acc.attempted) ")"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn share_form() -> Markup {
    html! {
        form hx-post=(names::SHARE_URL)
             hx-target="#share"
             hx-swap="innerHTML" {
            label {
                "Challenge a friend with these passages. Your name:"
                input name="name"
                      type="text"
                      autocomplete="off"
                      maxlength=(names::MAX_PLAYER_NAME_LEN)
                      required;
            }
            input type="submit" value="Create Challenge Link";
        }
    }
}

pub fn summary(summary: &RoundSummary) -> Markup {
    html! {
        h1 style="text-align: center;" { "Game Over!" }
        article {
            p style="text-align: center; font-size: 1.5rem; font-weight: 700;" {
                "Score: " (summary.score) "/" (summary.total)
            }
            p { "Accuracy: " (format!("{:.1}%", summary.accuracy().percent())) }
            (difficulty_table(summary))
            div id="share" { (share_form()) }
            p style="display: flex; gap: 1rem;" {
                (components::nav_button(&names::game_url(None), "Play Again", ""))
                (components::nav_button(names::HOME_URL, "Back to Home", "secondary"))
            }
        }
        details {
            summary { "Your answers" }
            (results_table(summary))
        }
    }
}

pub fn share_link(url: &str, intent_url: &str) -> Markup {
    html! {
        p { "Send this link to a friend:" }
        input type="text" readonly value=(url);
        div style="display: flex; gap: 1rem;" {
            button type="button" data-copy=(url) { "Copy Link" }
            a role="button" class="secondary" href=(intent_url) target="_blank" rel="noopener" {
                "Share on X"
            }
        }
    }
}
