//! Ordering mode enumerations and their parse boundary.
//!
//! Three independent knobs govern what the sequencer emits: which message
//! is chosen next ([`MessageOrder`]), how its words are permuted
//! ([`WordOrder`]), and how the letters inside each word are permuted
//! ([`LetterOrder`]).
//!
//! Word order and letter order are separate enums on purpose: `Join` only
//! makes sense at word granularity (it disables tokenization), so it simply
//! does not exist on [`LetterOrder`]. Invalid combinations are
//! unrepresentable rather than silently ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which ordering knob a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    MessageOrder,
    WordOrder,
    LetterOrder,
}

impl ModeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModeKind::MessageOrder => "message order",
            ModeKind::WordOrder => "word order",
            ModeKind::LetterOrder => "letter order",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{raw}'; expected one of: {expected:?}")]
pub struct ModeParseError {
    kind: ModeKind,
    raw: String,
    expected: &'static [&'static str],
}

impl ModeParseError {
    fn new(kind: ModeKind, raw: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            raw: raw.into(),
            expected,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        self.kind
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

const MESSAGE_ORDER_VALUES: &[&str] = &["random", "sequential"];
const WORD_ORDER_VALUES: &[&str] = &["forward", "reverse", "shuffle_inner", "shuffle_all", "join"];
const LETTER_ORDER_VALUES: &[&str] = &["forward", "reverse", "shuffle_inner", "shuffle_all"];

/// How the next message's position in the list is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrder {
    /// Uniformly random index on every call.
    Random,
    /// Insertion order with wraparound.
    #[default]
    Sequential,
}

impl MessageOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageOrder::Random => "random",
            MessageOrder::Sequential => "sequential",
        }
    }
}

impl fmt::Display for MessageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageOrder {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(MessageOrder::Random),
            "sequential" => Ok(MessageOrder::Sequential),
            _ => Err(ModeParseError::new(
                ModeKind::MessageOrder,
                s.trim(),
                MESSAGE_ORDER_VALUES,
            )),
        }
    }
}

/// How the space-delimited tokens of a message are reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOrder {
    /// Leave tokens where they are.
    #[default]
    Forward,
    /// Reverse the token list.
    Reverse,
    /// Shuffle tokens strictly between the first and last.
    ShuffleInner,
    /// Shuffle the whole token list.
    ShuffleAll,
    /// Treat the whole message as a single token; no splitting at all.
    Join,
}

impl WordOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WordOrder::Forward => "forward",
            WordOrder::Reverse => "reverse",
            WordOrder::ShuffleInner => "shuffle_inner",
            WordOrder::ShuffleAll => "shuffle_all",
            WordOrder::Join => "join",
        }
    }
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordOrder {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(WordOrder::Forward),
            "reverse" => Ok(WordOrder::Reverse),
            "shuffle_inner" => Ok(WordOrder::ShuffleInner),
            "shuffle_all" => Ok(WordOrder::ShuffleAll),
            "join" => Ok(WordOrder::Join),
            _ => Err(ModeParseError::new(
                ModeKind::WordOrder,
                s.trim(),
                WORD_ORDER_VALUES,
            )),
        }
    }
}

/// How the letters inside each token are reordered.
///
/// Deliberately has no `Join` variant; joining is a tokenization decision,
/// not a permutation, and only exists on [`WordOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterOrder {
    /// Leave letters where they are.
    #[default]
    Forward,
    /// Reverse each token's letters.
    Reverse,
    /// Shuffle letters strictly between the first and last of each token.
    ShuffleInner,
    /// Shuffle all letters of each token.
    ShuffleAll,
}

impl LetterOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LetterOrder::Forward => "forward",
            LetterOrder::Reverse => "reverse",
            LetterOrder::ShuffleInner => "shuffle_inner",
            LetterOrder::ShuffleAll => "shuffle_all",
        }
    }
}

impl fmt::Display for LetterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterOrder {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(LetterOrder::Forward),
            "reverse" => Ok(LetterOrder::Reverse),
            "shuffle_inner" => Ok(LetterOrder::ShuffleInner),
            "shuffle_all" => Ok(LetterOrder::ShuffleAll),
            _ => Err(ModeParseError::new(
                ModeKind::LetterOrder,
                s.trim(),
                LETTER_ORDER_VALUES,
            )),
        }
    }
}
