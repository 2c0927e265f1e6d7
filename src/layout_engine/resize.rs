use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A resize step that can be specified as pixels or percentage of the
/// working area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeValue {
    Pixels(i32),
    Percent(f64),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid resize step {0:?}, expected pixels (\"30\") or a percentage (\"3%\")")]
pub struct ResizeValueError(String);

impl ResizeValue {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Some(num_str) = trimmed.strip_suffix('%') {
            let pct: f64 = num_str.trim().parse().ok()?;
            pct.is_finite().then_some(Self::Percent(pct / 100.0))
        } else {
            let px: i32 = trimmed.trim_end_matches("px").parse().ok()?;
            Some(Self::Pixels(px))
        }
    }

    /// Resolves the step against the extent it applies to.
    pub fn to_pixels(self, extent: i32) -> i32 {
        match self {
            ResizeValue::Pixels(px) => px,
            ResizeValue::Percent(pct) => (f64::from(extent) * pct).round() as i32,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            ResizeValue::Pixels(px) => px > 0,
            ResizeValue::Percent(pct) => pct > 0.0,
        }
    }
}

impl Default for ResizeValue {
    fn default() -> Self { ResizeValue::Percent(0.03) }
}

impl FromStr for ResizeValue {
    type Err = ResizeValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ResizeValueError(s.to_string()))
    }
}

impl fmt::Display for ResizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeValue::Pixels(px) => write!(f, "{px}"),
            ResizeValue::Percent(pct) => write!(f, "{}%", pct * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pixels_and_percentages() {
        assert_eq!(ResizeValue::parse("30"), Some(ResizeValue::Pixels(30)));
        assert_eq!(ResizeValue::parse(" 40px "), Some(ResizeValue::Pixels(40)));
        assert_eq!(ResizeValue::parse("5%"), Some(ResizeValue::Percent(0.05)));
        assert_eq!(ResizeValue::parse("abc"), None);
        assert!("%".parse::<ResizeValue>().is_err());
    }

    #[test]
    fn resolves_against_the_extent() {
        assert_eq!(ResizeValue::Percent(0.03).to_pixels(1920), 58);
        assert_eq!(ResizeValue::Pixels(25).to_pixels(1920), 25);
    }
}
