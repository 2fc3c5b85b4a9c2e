//! Challenge tokens.
//!
//! A [`GameSession`] pins the exact passages a player answered so a friend can
//! replay the same set. It travels inside the challenge URL as base64url JSON.
//! Tokens carry no signature: a forged score is possible and accepted.

use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::{catalog::Catalog, models::QuizItem};

/// base64url without padding on the way out; padded tokens are still accepted.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: String,
    pub text_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_player: Option<String>,
    pub timestamp: i64,
}

/// The single outcome for every token that cannot be turned into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid session")]
pub struct InvalidSession;

/// Why a token was turned away. Only ever logged.
#[derive(Debug, thiserror::Error)]
enum Rejection {
    #[error("token is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("payload is not session json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing or empty field `{0}`")]
    Missing(&'static str),
    #[error("unknown item id {0}")]
    UnknownItem(u32),
}

/// Every field optional so that structural checks run after parsing instead of
/// inside serde.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    id: Option<String>,
    text_ids: Option<Vec<u32>>,
    original_score: Option<u32>,
    original_player: Option<String>,
    timestamp: Option<i64>,
}

impl GameSession {
    /// Starts a new session over `text_ids`. Ids are not checked here.
    pub fn create(text_ids: Vec<u32>, player: Option<String>, score: Option<u32>) -> Self {
        Self {
            id: Ulid::new().to_string().to_lowercase(),
            text_ids,
            original_score: score,
            original_player: player,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(TOKEN_ENGINE.encode(json))
    }

    pub fn decode(token: &str, catalog: &Catalog) -> Result<Self, InvalidSession> {
        let run = || -> Result<Self, Rejection> {
            let bytes = unwrap_token(token)?;
            let candidate = parse(&bytes)?;
            let session = check_structure(candidate)?;
            check_references(&session, catalog)?;
            Ok(session)
        };

        run().map_err(|reason| {
            tracing::debug!("rejected challenge token: {reason}");
            InvalidSession
        })
    }

    /// The session's passages in presentation order.
    pub fn resolve_items(&self, catalog: &Catalog) -> Result<Vec<QuizItem>, InvalidSession> {
        self.text_ids
            .iter()
            .map(|&id| catalog.get(id).cloned().ok_or(InvalidSession))
            .collect()
    }
}

fn unwrap_token(token: &str) -> Result<Vec<u8>, Rejection> {
    Ok(TOKEN_ENGINE.decode(token.trim())?)
}

fn parse(bytes: &[u8]) -> Result<Candidate, Rejection> {
    Ok(serde_json::from_slice(bytes)?)
}

fn check_structure(candidate: Candidate) -> Result<GameSession, Rejection> {
    let id = candidate
        .id
        .filter(|id| !id.is_empty())
        .ok_or(Rejection::Missing("id"))?;
    let text_ids = candidate
        .text_ids
        .filter(|ids| !ids.is_empty())
        .ok_or(Rejection::Missing("textIds"))?;
    let timestamp = candidate
        .timestamp
        .filter(|ts| *ts > 0)
        .ok_or(Rejection::Missing("timestamp"))?;

    Ok(GameSession {
        id,
        text_ids,
        original_score: candidate.original_score,
        original_player: candidate.original_player,
        timestamp,
    })
}

fn check_references(session: &GameSession, catalog: &Catalog) -> Result<(), Rejection> {
    match session.text_ids.iter().find(|&&id| !catalog.contains(id)) {
        Some(&id) => Err(Rejection::UnknownItem(id)),
        None => Ok(()),
    }
}
