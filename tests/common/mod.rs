#![allow(dead_code)]

use std::time::Duration;

use ai_or_human::{
    catalog::Catalog,
    models::{Difficulty, QuizItem},
    router, AppState, Settings,
};
use axum::{body::Body, http::Response};
use http_body_util::BodyExt;

pub fn item(id: u32, is_ai: bool, difficulty: Option<Difficulty>) -> QuizItem {
    QuizItem {
        id,
        content: format!("Passage number {id}"),
        is_ai,
        difficulty,
    }
}

/// The three-item catalog used by the scoring scenario.
pub fn tiny_catalog() -> Catalog {
    Catalog::new(vec![
        item(1, false, None),
        item(2, true, None),
        item(3, true, None),
    ])
    .expect("tiny catalog is valid")
}

/// `per_tier` items for each difficulty, ids numbered from 1.
pub fn tiered_catalog(per_tier: u32) -> Catalog {
    let items = Difficulty::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(tier, difficulty)| {
            (0..per_tier).map(move |n| {
                let id = tier as u32 * per_tier + n + 1;
                item(id, id % 2 == 0, Some(difficulty))
            })
        })
        .collect();
    Catalog::new(items).expect("tiered catalog is valid")
}

pub fn app() -> axum::Router {
    router(AppState::new(
        Catalog::builtin(),
        Settings::default(),
        Duration::from_secs(3600),
    ))
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// `name=value` pairs from every `Set-Cookie` header on the response.
pub fn set_cookies(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .collect()
}

pub fn cookie_named(cookies: &[String], name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookies.iter().find(|c| c.starts_with(&prefix)).cloned()
}
