use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Lead endpoint baked in at build time. Unset means submissions are simulated.
pub fn get_lead_endpoint() -> Option<&'static str> {
    option_env!("PROCEX_LEAD_ENDPOINT").filter(|url| !url.is_empty())
}

pub fn get_whatsapp_number() -> &'static str {
    option_env!("PROCEX_WHATSAPP_NUMBER").unwrap_or("5511999999999")
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_ROOT_CLASS: &str = "dark";

// The sticky CTA and hero follow the 768px mobile cut; the header
// collapses below 1024px.
pub const MOBILE_QUERY: &str = "(max-width: 767px)";
pub const COMPACT_NAV_QUERY: &str = "(max-width: 1023px)";

/// Every "diagnóstico" call to action scrolls here.
pub const CONTACT_SECTION_ID: &str = "contato";

pub const HEADER_SHADOW_THRESHOLD_PX: f64 = 50.0;
pub const STICKY_CTA_THRESHOLD_PX: f64 = 800.0;

pub const SIMULATED_SUBMIT_LATENCY_MS: u32 = 2_000;
pub const SUCCESS_BANNER_MS: u32 = 5_000;
pub const NEWSLETTER_LATENCY_MS: u32 = 1_000;
pub const NEWSLETTER_BANNER_MS: u32 = 3_000;

pub const COUNTER_DURATION_SECS: f64 = 2.0;
