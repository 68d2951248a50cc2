//! User preferences, read from the environment.

pub mod display_preference;
pub mod user_prefs;

/// True for "true" (any case) or "1".
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|val| val.trim().eq_ignore_ascii_case("true") || val.trim() == "1")
}
