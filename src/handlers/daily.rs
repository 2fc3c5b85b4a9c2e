use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::play::begin_play;
use crate::{
    extractors::{IsHtmx, PlayerStore},
    game::{daily_pool, StreakBook, TierQueue},
    names,
    plays::{Play, PlayMode},
    rejections::AppError,
    utils, views,
    views::daily as daily_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::DAILY_URL, get(daily_page))
}

async fn daily_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    PlayerStore(store): PlayerStore,
) -> Result<Response, AppError> {
    let today = utils::today();
    let stats = StreakBook::new(store).load(today);

    if stats.completed_on(today) {
        let page = daily_views::come_back_tomorrow(&stats);
        return Ok(views::render(is_htmx, "Daily Challenge", page).into_response());
    }

    let pool = daily_pool(&state.catalog, today, state.settings.daily_size);
    tracing::info!("starting daily challenge for {today} with {} items", pool.len());

    let play = Play::new(PlayMode::Daily, TierQueue::single(pool));
    begin_play(&state, play, is_htmx, Vec::new())
}
