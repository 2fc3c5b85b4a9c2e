use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::{names, store::CookieStore, AppState};

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// The play token from the `play` cookie, if the browser has one.
pub struct PlayToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for PlayToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(names::PLAY_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty());
        Ok(PlayToken(token))
    }
}

/// The player's cookie-backed key-value store.
pub struct PlayerStore(pub CookieStore);

impl FromRequestParts<AppState> for PlayerStore {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(PlayerStore(CookieStore::new(
            jar,
            state.settings.secure_cookies,
        )))
    }
}
