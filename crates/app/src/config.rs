use shared_ui::components::{parse_locale, parse_offset_minutes, DateDisplayConfig};

/// Locale name, e.g. `fr_FR`.
pub const LOCALE_VAR: &str = "DATE_DISPLAY_LOCALE";
/// Signed minutes east of UTC, e.g. `-300`.
pub const OFFSET_VAR: &str = "DATE_DISPLAY_UTC_OFFSET_MINUTES";

/// Build the date display configuration from the process environment.
///
/// Loads `.env` when present. Unset variables keep their defaults (US English,
/// local time zone); malformed ones are logged and ignored.
pub fn load() -> DateDisplayConfig {
    let _ = dotenvy::dotenv();
    let config = from_lookup(|key| std::env::var(key).ok());
    tracing::info!(
        locale = ?config.locale,
        zone = ?config.zone,
        "date display configured"
    );
    config
}

/// Build the configuration from any key/value source.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DateDisplayConfig {
    let mut config = DateDisplayConfig::default();

    if let Some(raw) = lookup(LOCALE_VAR) {
        match parse_locale(&raw) {
            Ok(locale) => config = config.with_locale(locale),
            Err(e) => tracing::warn!(var = LOCALE_VAR, error = %e, "keeping default locale"),
        }
    }

    if let Some(raw) = lookup(OFFSET_VAR) {
        match parse_offset_minutes(&raw) {
            Ok(offset) => config = config.with_offset(offset),
            Err(e) => tracing::warn!(var = OFFSET_VAR, error = %e, "keeping local time zone"),
        }
    }

    config
}
