//! String key-value storage for state the player keeps on their side.

use std::collections::HashMap;

use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::utils;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Stores values in the player's cookies.
///
/// Values are base64url-encoded so JSON survives cookie syntax. Writes are
/// collected as `Set-Cookie` values for the response.
pub struct CookieStore {
    jar: CookieJar,
    secure: bool,
    written: HashMap<String, String>,
}

impl CookieStore {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self {
            jar,
            secure,
            written: HashMap::new(),
        }
    }

    /// `Set-Cookie` header values for everything written through this store.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.written
            .iter()
            .map(|(key, value)| utils::persistent_cookie(key, value, self.secure))
            .collect()
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = match self.written.get(key) {
            Some(value) => value.clone(),
            None => self.jar.get(key)?.value().to_string(),
        };
        let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
        String::from_utf8(bytes).ok()
    }

    fn set(&mut self, key: &str, value: String) {
        self.written
            .insert(key.to_string(), URL_SAFE_NO_PAD.encode(value));
    }
}
