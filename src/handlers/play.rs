use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use maud::Markup;
use serde::Deserialize;

use super::{go_home, with_cookies};
use crate::{
    extractors::{IsHtmx, PlayToken, PlayerStore},
    game::{select_pool, DailyStats, GameSession, RecentItems, StreakBook, Tier, TierQueue},
    models::Difficulty,
    names,
    plays::{Play, PlayMode},
    rejections::{AppError, ResultExt},
    store::KeyValueStore,
    utils, views,
    views::{challenge as challenge_views, daily as daily_views, play as play_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::GAME_URL, get(start_game))
        .route(names::PLAY_URL, get(play_page))
        .route(names::GUESS_URL, post(submit_guess))
        .route(names::SHARE_URL, post(share))
}

#[derive(Deserialize)]
struct GameQuery {
    #[serde(default)]
    difficulty: Option<String>,
}

#[derive(Deserialize)]
struct GuessBody {
    guess: String,
}

#[derive(Deserialize)]
struct ShareBody {
    name: String,
}

fn parse_guess(raw: &str) -> Option<bool> {
    match raw {
        "ai" => Some(true),
        "human" => Some(false),
        _ => None,
    }
}

/// Tiers easy, medium, hard. A catalog without difficulties is played as one round.
fn tiered_game(state: &AppState) -> TierQueue {
    let mut rng = rand::thread_rng();
    let none = HashSet::new();
    let size = state.settings.tier_size;

    let tiers: Vec<Tier> = Difficulty::ALL
        .into_iter()
        .map(|d| Tier::new(d.label(), select_pool(&state.catalog, Some(d), &none, size, &mut rng)))
        .filter(|tier| !tier.pool.is_empty())
        .collect();

    if tiers.is_empty() {
        let pool = select_pool(&state.catalog, None, &none, size, &mut rng);
        TierQueue::single(pool)
    } else {
        TierQueue::new(tiers)
    }
}

fn single_difficulty_game(
    state: &AppState,
    difficulty: Difficulty,
    store: &mut impl KeyValueStore,
) -> Result<TierQueue, AppError> {
    let mut recent = store
        .get(names::RECENT_IDS_KEY)
        .and_then(|json| serde_json::from_str::<Vec<u32>>(&json).ok())
        .map(RecentItems::from_ids)
        .unwrap_or_default();

    let pool = recent.select(
        &state.catalog,
        Some(difficulty),
        state.settings.round_size,
        &mut rand::thread_rng(),
    );

    let json = serde_json::to_string(&recent.ids()).reject("could not save recent items")?;
    store.set(names::RECENT_IDS_KEY, json);

    Ok(TierQueue::new([Tier::new(difficulty.label(), pool)]))
}

/// Stores a new play and answers with its first question and the play cookie.
pub(crate) fn begin_play(
    state: &AppState,
    play: Play,
    is_htmx: bool,
    mut cookies: Vec<String>,
) -> Result<Response, AppError> {
    let page = views::render(is_htmx, "Play", question_view(&play));
    let token = state.plays.insert(play);
    cookies.push(utils::cookie(
        names::PLAY_COOKIE_NAME,
        &token,
        state.settings.secure_cookies,
    ));
    with_cookies(cookies, page)
}

async fn start_game(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    PlayerStore(mut store): PlayerStore,
    Query(query): Query<GameQuery>,
) -> Result<Response, AppError> {
    let difficulty = query
        .difficulty
        .filter(|d| !d.is_empty())
        .map(|d| d.parse::<Difficulty>())
        .transpose()
        .reject_input("unknown difficulty")?;

    let tiers = match difficulty {
        Some(difficulty) => single_difficulty_game(&state, difficulty, &mut store)?,
        None => tiered_game(&state),
    };
    tracing::info!(
        "starting practice game with {} items over {} tiers",
        tiers.total(),
        tiers.tier_count()
    );

    let play = Play::new(PlayMode::Practice, tiers);
    begin_play(&state, play, is_htmx, store.set_cookie_headers())
}

fn heading(mode: &PlayMode) -> String {
    match mode {
        PlayMode::Practice => "Practice Mode".to_string(),
        PlayMode::Daily => "Daily Challenge".to_string(),
        PlayMode::Challenge { session, .. } => format!(
            "Challenge from {}",
            session.original_player.as_deref().unwrap_or("a friend")
        ),
    }
}

pub(crate) fn question_view(play: &Play) -> Markup {
    let round = play.tiers.current();
    match round.current() {
        Some(item) => play_views::question(play_views::QuestionData {
            heading: heading(&play.mode),
            item,
            question_idx: round.position(),
            questions_count: round.total(),
            score: play.tiers.score(),
            total: play.tiers.total(),
            tier: play_views::TierData::from_queue(&play.tiers),
        }),
        None => play_views::summary(&play.tiers.summarize()),
    }
}

fn finished_view(play: &Play, store: &mut impl KeyValueStore) -> Markup {
    let summary = play.tiers.summarize();
    match &play.mode {
        PlayMode::Practice => play_views::summary(&summary),
        PlayMode::Daily => {
            let stats: DailyStats = StreakBook::new(store).load(utils::today());
            daily_views::daily_complete(summary.score, summary.total, &stats)
        }
        PlayMode::Challenge { session, token, .. } => {
            challenge_views::result(session, token, summary.score, summary.total)
        }
    }
}

async fn play_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    PlayToken(token): PlayToken,
    PlayerStore(mut store): PlayerStore,
) -> Response {
    let Some(play) = token.and_then(|t| state.plays.get(&t)) else {
        return go_home(is_htmx);
    };

    let body = if play.tiers.is_complete() {
        finished_view(&play, &mut store)
    } else {
        question_view(&play)
    };
    views::render(is_htmx, "Play", body).into_response()
}

async fn submit_guess(
    State(state): State<AppState>,
    PlayToken(token): PlayToken,
    PlayerStore(mut store): PlayerStore,
    Form(body): Form<GuessBody>,
) -> Result<Response, AppError> {
    let guess_is_ai = parse_guess(&body.guess).ok_or(AppError::Input("guess must be ai or human"))?;
    let Some(token) = token else {
        return Ok(go_home(true));
    };

    let submitted = state.plays.update(&token, |play| {
        let item = play.tiers.current().current().cloned();
        let outcome = play.tiers.submit_guess(guess_is_ai);
        let next_tier = play.tiers.current_label().to_string();
        (item, outcome, next_tier, play.clone())
    });
    let Some((item, outcome, next_tier, play)) = submitted else {
        return Ok(go_home(true));
    };

    let (Some(item), Ok(outcome)) = (item, outcome) else {
        // The round was already over; show where the player stands.
        return Ok(views::titled("Play", finished_view(&play, &mut store)).into_response());
    };

    if outcome.game_complete && matches!(play.mode, PlayMode::Daily) {
        StreakBook::new(&mut store)
            .complete(utils::today())
            .reject("could not save daily stats")?;
    }

    let page = play_views::feedback(play_views::FeedbackData {
        item: &item,
        correct: outcome.answer.correct,
        next_tier: (outcome.tier_complete && !outcome.game_complete).then_some(next_tier),
    });
    with_cookies(store.set_cookie_headers(), views::titled("Play", page))
}

async fn share(
    State(state): State<AppState>,
    PlayToken(token): PlayToken,
    Form(body): Form<ShareBody>,
) -> Result<Markup, AppError> {
    let name = utils::clean_player_name(&body.name, names::MAX_PLAYER_NAME_LEN)
        .ok_or(AppError::Input("a name is required"))?;
    let play = token
        .and_then(|t| state.plays.get(&t))
        .ok_or(AppError::Input("no play to share"))?;
    if !play.tiers.is_complete() {
        return Err(AppError::Input("play is not finished"));
    }

    let score = play.tiers.score();
    let total = play.tiers.total();
    let session = GameSession::create(play.tiers.item_ids(), Some(name), Some(score));
    let challenge_token = session.encode().reject("could not encode challenge")?;
    tracing::info!("created challenge {} over {} items", session.id, total);

    let url = format!(
        "{}{}",
        state.settings.base_url.trim_end_matches('/'),
        names::challenge_url(&challenge_token)
    );
    let text = format!("I scored {score}/{total} on AI or Human? Think you can beat me?");

    Ok(play_views::share_link(&url, &names::share_intent_url(&text, &url)))
}
