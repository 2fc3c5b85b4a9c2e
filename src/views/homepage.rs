use maud::{html, Markup};

use crate::{
    game::DailyStats,
    models::Difficulty,
    names,
    views::components,
};

pub fn homepage(stats: Option<&DailyStats>) -> Markup {
    let daily_done = stats.is_some_and(|s| s.today_completed);

    html! {
        section.hero {
            h1 { "AI or Human?" }
            p { "Can you tell the difference between AI-generated and human-written text?" }

            @if let Some(stats) = stats {
                (components::streak_counters(stats.current_streak, stats.max_streak))
            }
        }

        article {
            div style="display: flex; flex-direction: column; gap: 1rem;" {
                @if daily_done {
                    (components::nav_button(names::DAILY_URL, "Daily Challenge (Completed)", "secondary"))
                } @else {
                    (components::nav_button(names::DAILY_URL, "Daily Challenge", ""))
                }
                (components::nav_button(&names::game_url(None), "Practice Mode", "contrast"))
            }
        }

        article {
            h4 { "Practice one difficulty" }
            p { "Easy, medium or hard passages only, avoiding the ones you saw recently." }
            div style="display: flex; gap: 1rem;" {
                @for difficulty in Difficulty::ALL {
                    (components::nav_button(&names::game_url(Some(difficulty)), difficulty.label(), "outline"))
                }
            }
        }
    }
}
