//! Settings loading for Blink.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! this crate. Loading resolves them into [`Settings`] at the parse
//! boundary, so the rest of the application never sees a half-validated
//! value.
//!
//! ```toml
//! messages = ["First", "Second"]
//! message_order = "sequential"
//! word_order = "forward"
//! letter_order = "forward"
//! interval_ms = 1000
//! ```
//!
//! Every field is optional. Omitted modes fall back to their identity
//! defaults and the interval defaults to one second.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use blink_types::{LetterOrder, MessageOrder, WordOrder};

const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("interval_ms must be greater than zero")]
    ZeroInterval,
}

#[derive(Deserialize)]
struct RawSettings {
    #[serde(default)]
    messages: Vec<String>,
    #[serde(default)]
    message_order: MessageOrder,
    #[serde(default)]
    word_order: WordOrder,
    #[serde(default)]
    letter_order: LetterOrder,
    #[serde(default = "default_interval_ms")]
    interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// Validated flash settings.
///
/// Invariant: the interval is non-zero (a zero-delay flash loop spins).
/// The message list may be empty; the sequencer treats that as "nothing
/// to show", not an error.
#[derive(Debug, Clone)]
pub struct Settings {
    messages: Vec<String>,
    message_order: MessageOrder,
    word_order: WordOrder,
    letter_order: LetterOrder,
    interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            message_order: MessageOrder::default(),
            word_order: WordOrder::default(),
            letter_order: LetterOrder::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = SettingsError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        if raw.interval_ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }
        Ok(Self {
            messages: raw.messages,
            message_order: raw.message_order,
            word_order: raw.word_order,
            letter_order: raw.letter_order,
            interval: Duration::from_millis(raw.interval_ms),
        })
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::parse(&contents)?;
        debug!(
            path = %path.display(),
            messages = settings.messages.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self, SettingsError> {
        let raw: RawSettings = toml::from_str(contents)?;
        Self::try_from(raw)
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    #[must_use]
    pub const fn message_order(&self) -> MessageOrder {
        self.message_order
    }

    #[must_use]
    pub const fn word_order(&self) -> WordOrder {
        self.word_order
    }

    #[must_use]
    pub const fn letter_order(&self) -> LetterOrder {
        self.letter_order
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
