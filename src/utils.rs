pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=7200;{secure} Path=/; SameSite=Lax")
}

/// Cookie kept for a year, used for state the player owns.
pub fn persistent_cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=31536000;{secure} Path=/; SameSite=Lax")
}

/// Trims a submitted display name and caps its length.
pub fn clean_player_name(raw: &str, max_len: usize) -> Option<String> {
    let name: String = raw.trim().chars().take(max_len).collect();
    (!name.is_empty()).then_some(name)
}

/// The calendar date daily challenges and streaks are keyed by.
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
