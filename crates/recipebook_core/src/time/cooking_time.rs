//! Cooking time selection and display formatting.
//!
//! # Responsibility
//! - Model the hour/minute pair chosen in the time picker.
//! - Render the display string stored on recipes.
//! - Parse display strings back into picker values for edit flows.
//!
//! # Invariants
//! - Hours stay within `0..=MAX_HOURS`, minutes within `0..=MAX_MINUTES`.
//! - `Display` output is the exact string stored in `Recipe::cooking_time`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Largest hour value offered by the picker.
pub const MAX_HOURS: u8 = 12;
/// Largest minute value offered by the picker.
pub const MAX_MINUTES: u8 = 59;

static MINUTES_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s*mins?$").expect("valid minutes regex"));
static HOURS_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s*hours?$").expect("valid hours regex"));
static HOURS_MINUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})h\s*(\d{1,2})m$").expect("valid compact regex"));

/// Out-of-range picker input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingTimeError {
    HoursOutOfRange(u8),
    MinutesOutOfRange(u8),
}

impl Display for CookingTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoursOutOfRange(value) => {
                write!(f, "hours must be within 0..={MAX_HOURS}, got {value}")
            }
            Self::MinutesOutOfRange(value) => {
                write!(f, "minutes must be within 0..={MAX_MINUTES}, got {value}")
            }
        }
    }
}

impl Error for CookingTimeError {}

/// Hour/minute pair selected in the time picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CookingTime {
    hours: u8,
    minutes: u8,
}

impl CookingTime {
    /// Creates a picker value, rejecting values the picker cannot show.
    pub fn new(hours: u8, minutes: u8) -> Result<Self, CookingTimeError> {
        if hours > MAX_HOURS {
            return Err(CookingTimeError::HoursOutOfRange(hours));
        }
        if minutes > MAX_MINUTES {
            return Err(CookingTimeError::MinutesOutOfRange(minutes));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(self) -> u8 {
        self.hours
    }

    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// Total duration in minutes.
    pub fn total_minutes(self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }

    /// Live label shown above the picker wheels, e.g. `1h 5m`.
    pub fn picker_label(self) -> String {
        format!("{}h {}m", self.hours, self.minutes)
    }
}

impl Display for CookingTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.hours == 0 {
            write!(f, "{} mins", self.minutes)
        } else if self.minutes == 0 {
            let suffix = if self.hours > 1 { "s" } else { "" };
            write!(f, "{} hour{suffix}", self.hours)
        } else {
            write!(f, "{}h {}m", self.hours, self.minutes)
        }
    }
}

/// Formats an hour/minute pair as a recipe display string.
///
/// Convenience for callers holding raw picker integers.
pub fn format_cooking_time(hours: u8, minutes: u8) -> Result<String, CookingTimeError> {
    CookingTime::new(hours, minutes).map(|time| time.to_string())
}

/// Parses a recipe display string back into picker values.
///
/// Accepts every shape produced by [`CookingTime`]'s `Display`, plus the
/// singular `min` spelling. Returns `None` for free-form text or
/// out-of-range values.
pub fn parse_cooking_time(value: &str) -> Option<CookingTime> {
    let text = value.trim().to_ascii_lowercase();

    if let Some(caps) = MINUTES_ONLY_RE.captures(&text) {
        return CookingTime::new(0, caps[1].parse().ok()?).ok();
    }
    if let Some(caps) = HOURS_ONLY_RE.captures(&text) {
        return CookingTime::new(caps[1].parse().ok()?, 0).ok();
    }
    if let Some(caps) = HOURS_MINUTES_RE.captures(&text) {
        return CookingTime::new(caps[1].parse().ok()?, caps[2].parse().ok()?).ok();
    }
    None
}

/// Quick presets offered next to the picker wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePreset {
    FifteenMinutes,
    ThirtyMinutes,
    FortyFiveMinutes,
    OneHour,
    NinetyMinutes,
    TwoHours,
}

impl TimePreset {
    /// All presets in display order.
    pub const ALL: [TimePreset; 6] = [
        TimePreset::FifteenMinutes,
        TimePreset::ThirtyMinutes,
        TimePreset::FortyFiveMinutes,
        TimePreset::OneHour,
        TimePreset::NinetyMinutes,
        TimePreset::TwoHours,
    ];

    /// Button label for the preset.
    pub fn label(self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::FortyFiveMinutes => "45m",
            Self::OneHour => "1h",
            Self::NinetyMinutes => "1h 30m",
            Self::TwoHours => "2h",
        }
    }

    /// Picker value the preset selects.
    pub fn cooking_time(self) -> CookingTime {
        let (hours, minutes) = match self {
            Self::FifteenMinutes => (0, 15),
            Self::ThirtyMinutes => (0, 30),
            Self::FortyFiveMinutes => (0, 45),
            Self::OneHour => (1, 0),
            Self::NinetyMinutes => (1, 30),
            Self::TwoHours => (2, 0),
        };
        CookingTime { hours, minutes }
    }
}

/// Unknown preset label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePresetParseError(pub String);

impl Display for TimePresetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown time preset `{}`", self.0)
    }
}

impl Error for TimePresetParseError {}

impl FromStr for TimePreset {
    type Err = TimePresetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.label() == trimmed)
            .ok_or_else(|| TimePresetParseError(trimmed.to_string()))
    }
}
