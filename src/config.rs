use chrono::{DateTime, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("invalid timestamp `{raw}`, expected YYYY-MM-DDTHH:MM:SS: {source}")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("start time {start} is after end time {end}")]
    InvertedWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Whether the run exports both host and client views or host only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single,
    Paired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Values synthesized per class before deduplication.
    pub node_num: usize,
    /// Sampling ratio and edge inclusion probability.
    pub prob: f64,
    pub layout: Layout,
}

impl GeneratorConfig {
    pub fn new(node_num: usize, prob: f64, layout: Layout) -> Result<Self, ConfigError> {
        if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
            return Err(ConfigError::ProbabilityOutOfRange(prob));
        }
        Ok(Self {
            node_num,
            prob,
            layout,
        })
    }
}

/// Inclusive bounds for the per-file timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ConfigError> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    /// Uniform whole-second instant within the window.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let lo = self.start.and_utc().timestamp();
        let hi = self.end.and_utc().timestamp();
        let secs = rng.random_range(lo..=hi);
        DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or(self.start)
    }

    pub fn sample_formatted<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.sample(rng).format(TIMESTAMP_FORMAT).to_string()
    }
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|source| {
        ConfigError::InvalidTimestamp {
            raw: raw.to_string(),
            source,
        }
    })
}
