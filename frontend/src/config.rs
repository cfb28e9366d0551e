/// Height of the sticky header, subtracted from every navigation target.
pub const HEADER_OFFSET: f64 = 80.0;

/// Fraction of a region that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const LOADER_DELAY_MS: u32 = 1_500;
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const SIMULATED_DELAY_MS: u32 = 1_500;

pub const WHATSAPP_NUMBER: &str = "917378719142";
pub const CONTACT_EMAIL: &str = "geology.apoorva95@gmail.com";

/// Apps Script web app that appends registrations to the sheet.
///
/// Set `REGISTRATION_SCRIPT_URL` when building; without it submissions are
/// simulated locally.
pub fn get_script_url() -> Option<&'static str> {
    script_url_from(option_env!("REGISTRATION_SCRIPT_URL"))
}

fn script_url_from(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|url| !url.is_empty())
}

#[cfg(debug_assertions)]
pub fn default_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> log::Level {
    log::Level::Info
}
