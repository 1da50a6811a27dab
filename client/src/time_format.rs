use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Hour convention for short clock labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockConvention {
    TwelveHour,
    TwentyFourHour,
}

impl ClockConvention {
    /// Resolve the convention for a BCP 47 language tag such as "en-US".
    /// The region subtag decides; a bare "en" with no region reads 12-hour.
    pub fn from_language_tag(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        // Skip script subtags ("zh-Hant-TW") — the region is two letters.
        let region = parts
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
            .map(|part| part.to_ascii_uppercase());
        match region.as_deref() {
            Some("US" | "CA" | "AU" | "NZ" | "PH") => Self::TwelveHour,
            Some(_) => Self::TwentyFourHour,
            None if language == "en" => Self::TwelveHour,
            None => Self::TwentyFourHour,
        }
    }
}

/// Format a timestamp as a short clock reading, e.g. "2:05 PM" or "14:05".
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>, convention: ClockConvention) -> String
where
    Tz::Offset: fmt::Display,
{
    match convention {
        ClockConvention::TwelveHour => at.format("%-I:%M %p").to_string(),
        ClockConvention::TwentyFourHour => at.format("%H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockConvention, format_clock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn twelve_hour_afternoon() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 14, 5, 0).unwrap();
        assert_eq!(format_clock(&at, ClockConvention::TwelveHour), "2:05 PM");
    }

    #[test]
    fn twenty_four_hour_afternoon() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 14, 5, 0).unwrap();
        assert_eq!(format_clock(&at, ClockConvention::TwentyFourHour), "14:05");
    }

    #[test]
    fn twelve_hour_midnight() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(format_clock(&at, ClockConvention::TwelveHour), "12:00 AM");
    }

    #[test]
    fn repeated_calls_are_stable() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(
            format_clock(&at, ClockConvention::TwelveHour),
            format_clock(&at, ClockConvention::TwelveHour)
        );
    }

    #[test]
    fn us_tag_reads_twelve_hour() {
        assert_eq!(
            ClockConvention::from_language_tag("en-US"),
            ClockConvention::TwelveHour
        );
        assert_eq!(
            ClockConvention::from_language_tag("en_US"),
            ClockConvention::TwelveHour
        );
    }

    #[test]
    fn gb_tag_reads_twenty_four_hour() {
        assert_eq!(
            ClockConvention::from_language_tag("en-GB"),
            ClockConvention::TwentyFourHour
        );
    }

    #[test]
    fn bare_en_defaults_to_twelve_hour() {
        assert_eq!(
            ClockConvention::from_language_tag("en"),
            ClockConvention::TwelveHour
        );
    }

    #[test]
    fn non_english_defaults_to_twenty_four_hour() {
        assert_eq!(
            ClockConvention::from_language_tag("de-DE"),
            ClockConvention::TwentyFourHour
        );
        assert_eq!(
            ClockConvention::from_language_tag("ja"),
            ClockConvention::TwentyFourHour
        );
    }

    #[test]
    fn script_subtag_is_skipped() {
        assert_eq!(
            ClockConvention::from_language_tag("en-Latn-AU"),
            ClockConvention::TwelveHour
        );
    }
}
