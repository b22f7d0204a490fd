use log::LevelFilter;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SiteError;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
const DEFAULT_SECTION_LOOKAHEAD_PX: f64 = 100.0;
const DEFAULT_SETTLE_DELAY_MS: u32 = 250;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const SCROLL_TOP_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const SECTION_LOOKAHEAD_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SETTLE_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_top_threshold_px: f64,
    pub section_lookahead_px: f64,
    pub settle_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            section_lookahead_px: DEFAULT_SECTION_LOOKAHEAD_PX,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSiteConfig {
    scroll_top_threshold_px: Option<Value>,
    section_lookahead_px: Option<Value>,
    settle_delay_ms: Option<Value>,
    log_level: Option<Value>,
}

impl SiteConfig {
    /// Parses the inline JSON config block. Keys are optional; a value of the wrong
    /// type or outside its bounds falls back to that key's default without affecting
    /// the others. Only a block that is not a JSON object is rejected.
    pub fn from_json(source: &str) -> Result<Self, SiteError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSiteConfig = serde_json::from_str(trimmed)?;

        Ok(Self {
            scroll_top_threshold_px: f64_with_bounds(
                raw.scroll_top_threshold_px.as_ref(),
                DEFAULT_SCROLL_TOP_THRESHOLD_PX,
                SCROLL_TOP_THRESHOLD_PX_BOUNDS,
            ),
            section_lookahead_px: f64_with_bounds(
                raw.section_lookahead_px.as_ref(),
                DEFAULT_SECTION_LOOKAHEAD_PX,
                SECTION_LOOKAHEAD_PX_BOUNDS,
            ),
            settle_delay_ms: u32_with_bounds(
                raw.settle_delay_ms.as_ref(),
                DEFAULT_SETTLE_DELAY_MS,
                SETTLE_DELAY_MS_BOUNDS,
            ),
            log_level: parse_log_level(
                raw.log_level.as_ref().and_then(Value::as_str),
                DEFAULT_LOG_LEVEL,
            ),
        })
    }
}

fn f64_with_bounds(value: Option<&Value>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn u32_with_bounds(value: Option<&Value>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        _ => default,
    }
}
