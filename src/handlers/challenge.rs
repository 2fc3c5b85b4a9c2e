use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use super::{go_home, play::begin_play};
use crate::{
    extractors::IsHtmx,
    game::{GameSession, TierQueue},
    names,
    plays::{Play, PlayMode},
    rejections::AppError,
    utils, views,
    views::challenge as challenge_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/challenge/{token}",
        get(challenge_page).post(start_challenge),
    )
}

#[derive(Deserialize)]
struct ChallengeBody {
    name: String,
}

async fn challenge_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(token): Path<String>,
) -> Response {
    let Ok(session) = GameSession::decode(&token, &state.catalog) else {
        return go_home(is_htmx);
    };

    views::render(
        is_htmx,
        "Challenge",
        challenge_views::name_form(&session, &token),
    )
    .into_response()
}

async fn start_challenge(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(token): Path<String>,
    Form(body): Form<ChallengeBody>,
) -> Result<Response, AppError> {
    let Ok(session) = GameSession::decode(&token, &state.catalog) else {
        return Ok(go_home(is_htmx));
    };
    let Ok(items) = session.resolve_items(&state.catalog) else {
        return Ok(go_home(is_htmx));
    };
    let player_name = utils::clean_player_name(&body.name, names::MAX_PLAYER_NAME_LEN)
        .ok_or(AppError::Input("a name is required"))?;

    tracing::info!(
        "{player_name} accepted challenge {} over {} items",
        session.id,
        items.len()
    );

    let play = Play::new(
        PlayMode::Challenge {
            session,
            token,
            player_name,
        },
        TierQueue::single(items),
    );
    begin_play(&state, play, is_htmx, Vec::new())
}
