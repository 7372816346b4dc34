use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::sanitize::parse_lenient_decimal;

/// Error returned when a value is not one of the preset tip rates.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a preset tip rate (expected 10, 15 or 25)")]
pub struct UnknownPresetError(pub String);

/// The quick-select tip rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetRate {
    Ten,
    Fifteen,
    TwentyFive,
}

impl PresetRate {
    /// All presets in the order they are offered.
    pub const ALL: [PresetRate; 3] = [Self::Ten, Self::Fifteen, Self::TwentyFive];

    /// The rate as a whole-number percentage.
    pub fn percent(&self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::TwentyFive => 25,
        }
    }

    pub fn rate(&self) -> Decimal {
        Decimal::from(self.percent())
    }

    /// Label shown on buttons and stored in history, e.g. `"15%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }

    pub fn from_percent(percent: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.percent() == percent)
    }
}

impl fmt::Display for PresetRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for PresetRate {
    type Err = UnknownPresetError;

    /// Accepts `"15"` or `"15%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_suffix('%')
            .unwrap_or(trimmed)
            .parse::<u32>()
            .ok()
            .and_then(Self::from_percent)
            .ok_or_else(|| UnknownPresetError(s.to_string()))
    }
}

/// How the tip rate is chosen.
///
/// Preset and custom modes are mutually exclusive: moving into one variant
/// drops whatever the other held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PercentageChoice {
    #[default]
    Unset,
    Preset(PresetRate),
    /// Custom rate text, expected to be sanitized already.
    Custom(String),
}

impl PercentageChoice {
    /// Effective rate in percent.
    ///
    /// `Unset`, and custom text that is empty or unparseable, resolve to zero.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Unset => Decimal::ZERO,
            Self::Preset(preset) => preset.rate(),
            Self::Custom(text) => parse_lenient_decimal(text).unwrap_or(Decimal::ZERO),
        }
    }

    /// History label for a choice that can be committed.
    ///
    /// Custom text is used verbatim (`"7.5"` → `"7.5%"`).
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Preset(preset) => Some(preset.label()),
            Self::Custom(text) if text.is_empty() => None,
            Self::Custom(text) => Some(format!("{text}%")),
        }
    }

    /// Whether this choice is enough to commit a record.
    pub fn is_committable(&self) -> bool {
        self.label().is_some()
    }

    pub fn preset(&self) -> Option<PresetRate> {
        match self {
            Self::Preset(preset) => Some(*preset),
            _ => None,
        }
    }

    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Self::Custom(text) => Some(text),
            _ => None,
        }
    }
}
