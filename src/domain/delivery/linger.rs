//! Linger duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default time to keep the run loop alive after delivery (50 milliseconds)
pub const DEFAULT_LINGER_MILLIS: u64 = 50;

/// Upper bound for the linger duration (5 minutes)
pub const MAX_LINGER_MILLIS: u64 = 5 * 60 * 1000;

/// How long the process stays alive after handing the notification to the OS.
///
/// A zero linger is valid and means "return as soon as delivery is queued".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Linger {
    milliseconds: u64,
}

impl Linger {
    /// Create a Linger from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Linger from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// No lingering at all
    pub const fn none() -> Self {
        Self::from_millis(0)
    }

    /// Default linger (50 milliseconds)
    pub const fn default_linger() -> Self {
        Self::from_millis(DEFAULT_LINGER_MILLIS)
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Get duration in fractional seconds, as expected by `NSDate`
    pub fn as_secs_f64(&self) -> f64 {
        self.milliseconds as f64 / 1000.0
    }

    /// Whether the linger is zero
    pub const fn is_zero(&self) -> bool {
        self.milliseconds == 0
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Linger {
    type Err = DurationParseError;

    /// Parse a duration string.
    /// Supported units: "ms", "s", "m", combinable in descending order ("1m30s", "2s500ms").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DurationParseError { input: s.to_string() };
        let input = s.trim().to_lowercase();

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        // Rank of the last unit seen: m=3, s=2, ms=1. Units must strictly descend.
        let mut last_rank = u8::MAX;

        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() {
                return Err(err());
            }

            let (rank, factor) = match ch {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    (1, 1)
                }
                'm' => (3, 60_000),
                's' => (2, 1000),
                _ => return Err(err()),
            };
            if rank >= last_rank {
                return Err(err());
            }
            last_rank = rank;

            let value: u64 = current_num.parse().map_err(|_| err())?;
            total_ms = value
                .checked_mul(factor)
                .and_then(|ms| ms.checked_add(total_ms))
                .ok_or_else(err)?;
            current_num.clear();
            found_any = true;
        }

        if !current_num.is_empty() || !found_any {
            return Err(err());
        }

        if total_ms > MAX_LINGER_MILLIS {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Linger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.milliseconds / 1000;
        let millis = self.milliseconds % 1000;
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if self.milliseconds == 0 {
            return write!(f, "0ms");
        }
        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        if millis > 0 {
            write!(f, "{}ms", millis)?;
        }
        Ok(())
    }
}

impl Default for Linger {
    fn default() -> Self {
        Self::default_linger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_millis_only() {
        let d: Linger = "250ms".parse().unwrap();
        assert_eq!(d.as_millis(), 250);
    }

    #[test]
    fn parse_seconds_only() {
        let d: Linger = "2s".parse().unwrap();
        assert_eq!(d.as_millis(), 2000);
    }

    #[test]
    fn parse_minutes_and_seconds() {
        let d: Linger = "1m30s".parse().unwrap();
        assert_eq!(d.as_millis(), 90_000);
    }

    #[test]
    fn parse_seconds_and_millis() {
        let d: Linger = "1s500ms".parse().unwrap();
        assert_eq!(d.as_millis(), 1500);
    }

    #[test]
    fn parse_case_insensitive_and_trimmed() {
        let d: Linger = "  2S  ".parse().unwrap();
        assert_eq!(d.as_millis(), 2000);
    }

    #[test]
    fn parse_zero_is_allowed() {
        let d: Linger = "0ms".parse().unwrap();
        assert!(d.is_zero());
        assert!("0s".parse::<Linger>().unwrap().is_zero());
    }

    #[test]
    fn parse_rejects_bare_numbers_and_garbage() {
        assert!("".parse::<Linger>().is_err());
        assert!("50".parse::<Linger>().is_err());
        assert!("abc".parse::<Linger>().is_err());
        assert!("5h".parse::<Linger>().is_err());
        assert!("s".parse::<Linger>().is_err());
    }

    #[test]
    fn parse_rejects_out_of_order_units() {
        assert!("30s1m".parse::<Linger>().is_err());
        assert!("1s1s".parse::<Linger>().is_err());
        assert!("500ms1s".parse::<Linger>().is_err());
    }

    #[test]
    fn parse_rejects_too_long() {
        assert!("6m".parse::<Linger>().is_err());
        assert!("5m".parse::<Linger>().is_ok());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Linger::from_millis(0).to_string(), "0ms");
        assert_eq!(Linger::from_millis(50).to_string(), "50ms");
        assert_eq!(Linger::from_secs(2).to_string(), "2s");
        assert_eq!(Linger::from_millis(90_000).to_string(), "1m30s");
        assert_eq!(Linger::from_millis(1500).to_string(), "1s500ms");
    }

    #[test]
    fn display_parses_back() {
        let d = Linger::from_millis(61_250);
        assert_eq!(d.to_string().parse::<Linger>().unwrap(), d);
    }

    #[test]
    fn seconds_as_float() {
        assert_eq!(Linger::from_millis(250).as_secs_f64(), 0.25);
    }

    #[test]
    fn default_is_fifty_millis() {
        assert_eq!(Linger::default().as_millis(), 50);
        assert_eq!(Linger::default().as_std(), StdDuration::from_millis(50));
    }
}
