use maud::{html, Markup};

pub fn nav_button(href: &str, label: &str, class: &str) -> Markup {
    html! {
        a role="button"
          class=(class)
          href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (label)
        }
    }
}

pub fn streak_counters(current: u32, best: u32) -> Markup {
    html! {
        div.stats {
            div { "Current Streak: " strong { (current) } " days" }
            div { "Best Streak: " strong { (best) } " days" }
        }
    }
}
