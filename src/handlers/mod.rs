pub mod challenge;
pub mod daily;
pub mod homepage;
pub mod play;

use axum::{
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    names,
    rejections::{AppError, ResultExt},
};

/// Attaches `Set-Cookie` headers to a response body.
pub(crate) fn with_cookies(
    cookies: impl IntoIterator<Item = String>,
    body: impl IntoResponse,
) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        let value = HeaderValue::from_str(&cookie).reject("could not build cookie header")?;
        headers.append(SET_COOKIE, value);
    }
    Ok((headers, body).into_response())
}

/// Sends the browser back to the home page. htmx requests get an
/// `HX-Redirect` so the whole page changes, not just the swapped fragment.
pub(crate) fn go_home(is_htmx: bool) -> Response {
    if is_htmx {
        let mut headers = HeaderMap::new();
        headers.insert("HX-Redirect", HeaderValue::from_static(names::HOME_URL));
        headers.into_response()
    } else {
        Redirect::to(names::HOME_URL).into_response()
    }
}
