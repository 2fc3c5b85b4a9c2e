use axum::{routing::get, Router};

use crate::{
    extractors::{IsHtmx, PlayerStore},
    game::StreakBook,
    utils, views,
    views::homepage as homepage_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage(IsHtmx(is_htmx): IsHtmx, PlayerStore(store): PlayerStore) -> maud::Markup {
    let book = StreakBook::new(store);
    let stats = book.has_stats().then(|| book.load(utils::today()));

    views::render(
        is_htmx,
        "Home",
        homepage_views::homepage(stats.as_ref()),
    )
}
