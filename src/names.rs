pub const HOME_URL: &str = "/";
pub const GAME_URL: &str = "/game";
pub const PLAY_URL: &str = "/play";
pub const GUESS_URL: &str = "/guess";
pub const DAILY_URL: &str = "/daily";
pub const SHARE_URL: &str = "/share";

pub const PLAY_COOKIE_NAME: &str = "play";
pub const RECENT_IDS_KEY: &str = "recentIds";

pub fn game_url(difficulty: Option<crate::models::Difficulty>) -> String {
    match difficulty {
        Some(difficulty) => format!("{GAME_URL}?difficulty={}", difficulty.as_str()),
        None => GAME_URL.to_string(),
    }
}

pub fn challenge_url(token: &str) -> String {
    format!("/challenge/{token}")
}

pub fn share_intent_url(text: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(text),
        urlencoding::encode(url)
    )
}

// Game defaults
pub const DEFAULT_TIER_SIZE: usize = 5;
pub const DEFAULT_ROUND_SIZE: usize = 5;
pub const DEFAULT_DAILY_SIZE: usize = 5;
pub const FEEDBACK_DELAY_MS: u64 = 1500;
pub const MAX_PLAYER_NAME_LEN: usize = 40;
