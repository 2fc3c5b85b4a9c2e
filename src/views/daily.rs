use maud::{html, Markup};

use crate::{game::DailyStats, names, views::components};

pub fn come_back_tomorrow(stats: &DailyStats) -> Markup {
    html! {
        article style="text-align: center;" {
            h1 { "Come Back Tomorrow!" }
            p { "You've already completed today's challenge." }
            (components::streak_counters(stats.current_streak, stats.max_streak))
            p style="margin-top: 1.5rem;" {
                (components::nav_button(names::HOME_URL, "Back to Home", ""))
            }
        }
    }
}

pub fn daily_complete(score: u32, total: usize, stats: &DailyStats) -> Markup {
    let accuracy = if total > 0 {
        f64::from(score) * 100.0 / total as f64
    } else {
        0.0
    };

    html! {
        article {
            h1 style="text-align: center;" { "Daily Challenge Complete!" }
            p style="text-align: center; font-size: 1.5rem; font-weight: 700;" {
                "Score: " (score) "/" (total)
            }
            p { "Accuracy: " (format!("{accuracy:.1}%")) }
            (components::streak_counters(stats.current_streak, stats.max_streak))
            p style="text-align: center; margin-top: 1.5rem;" {
                (components::nav_button(names::HOME_URL, "Back to Home", ""))
            }
        }
    }
}
