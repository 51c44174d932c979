/*!
    Filter configuration types.
*/

use std::str::FromStr;

use ffmpeg_types::{Error, Result};

/**
    Configuration for the flip filter.

    Frames whose presentation time is at or before `duration` seconds are
    mirrored vertically, later frames pass through untouched.
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipConfig {
    /// Length of the flip window in seconds, `0..=i32::MAX`.
    pub duration: i64,
}

impl FlipConfig {
    /// Largest accepted duration in seconds.
    pub const MAX_DURATION: i64 = i32::MAX as i64;

    /**
        Create a new config with default settings (a zero-length window,
        so only frames at time zero or earlier are mirrored).
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Set the flip window, in seconds.
    */
    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = seconds;
        self
    }

    /**
        Check that the duration lies within `0..=MAX_DURATION`.
    */
    pub fn validate(&self) -> Result<()> {
        if self.duration < 0 {
            return Err(Error::invalid_configuration(format!(
                "duration must be non-negative, got {}",
                self.duration
            )));
        }
        if self.duration > Self::MAX_DURATION {
            return Err(Error::invalid_configuration(format!(
                "duration {} exceeds maximum of {}",
                self.duration,
                Self::MAX_DURATION
            )));
        }
        Ok(())
    }
}

/**
    Parses filter-graph option strings.

    Accepts an empty string, a bare value (`"2"`), or `key=value` pairs
    separated by `:` (`"duration=2"`). Later pairs override earlier ones.
*/
impl FromStr for FlipConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut config = Self::new();

        for (position, option) in s.split(':').map(str::trim).enumerate() {
            if option.is_empty() {
                continue;
            }
            let (key, value) = match option.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None if position == 0 => ("duration", option),
                None => {
                    return Err(Error::invalid_configuration(format!(
                        "option '{option}' is missing a key"
                    )));
                }
            };
            match key {
                "duration" => {
                    config.duration = value.parse().map_err(|_| {
                        Error::invalid_configuration(format!(
                            "duration '{value}' is not an integer"
                        ))
                    })?;
                }
                other => {
                    return Err(Error::invalid_configuration(format!(
                        "unknown option '{other}'"
                    )));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}
