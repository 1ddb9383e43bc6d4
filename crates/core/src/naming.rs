use chrono::NaiveDateTime;
use thiserror::Error;

pub const CANONICAL_SUFFIX: &str = ".jpg";

const CAPTURE_DATE_LAYOUT: &str = "%Y:%m:%d %H:%M:%S";
const CANONICAL_LAYOUT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("撮影日時の形式が不正です: {0}")]
    InvalidCaptureDate(String),
}

pub fn canonical_stem(raw: &str) -> Result<String, NamingError> {
    let parsed = NaiveDateTime::parse_from_str(raw, CAPTURE_DATE_LAYOUT)
        .map_err(|_| NamingError::InvalidCaptureDate(raw.to_string()))?;
    Ok(parsed.format(CANONICAL_LAYOUT).to_string())
}
