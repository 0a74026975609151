//! Core domain types for Blink.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod order;

pub use order::{LetterOrder, MessageOrder, ModeKind, ModeParseError, WordOrder};
