//! Message sequencing and scrambling engine for Blink.
//!
//! The [`Sequencer`] holds a mutable list of messages plus three ordering
//! modes and hands out one scrambled message per [`Sequencer::next`] call.
//! It has no timer and no display; a caller-owned loop drives it. The
//! scramble itself is exposed as the pure [`scramble`] function for
//! previews.

mod scramble;
mod sequencer;

pub use scramble::scramble;
pub use sequencer::Sequencer;
