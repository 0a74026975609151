//! Message selection with independently reconfigurable ordering modes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use blink_types::{LetterOrder, MessageOrder, WordOrder};
use rand::RngExt;
use tracing::trace;

use crate::scramble::scramble;

/// Cursor sentinel meaning "before the first message"; the first
/// `wrapping_add(1)` lands on index 0.
const BEFORE_FIRST: usize = usize::MAX;

/// Picks the next message from a mutable list and scrambles it.
///
/// Every stored field is independently updatable from other threads:
/// readers never see a torn value for any single field, but a `next()`
/// call may observe an old message list together with a new mode. That
/// is the documented contract, not a bug.
///
/// The sequential cursor survives list replacement. When the list
/// shrinks below the stored cursor, the next advance re-anchors it with
/// `(cursor + 1) % new_len` rather than resetting to the start, which
/// can skip or repeat messages. Intentionally kept that way; see
/// `cursor_reanchors_when_list_shrinks` in the tests.
#[derive(Debug)]
pub struct Sequencer {
    messages: RwLock<Arc<[String]>>,
    message_order: RwLock<MessageOrder>,
    word_order: RwLock<WordOrder>,
    letter_order: RwLock<LetterOrder>,
    cursor: AtomicUsize,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Sequencer {
    #[must_use]
    pub fn new(
        messages: Vec<String>,
        message_order: MessageOrder,
        word_order: WordOrder,
        letter_order: LetterOrder,
    ) -> Self {
        Self {
            messages: RwLock::new(messages.into()),
            message_order: RwLock::new(message_order),
            word_order: RwLock::new(word_order),
            letter_order: RwLock::new(letter_order),
            cursor: AtomicUsize::new(BEFORE_FIRST),
        }
    }

    /// Replace the message list wholesale. The sequential cursor is left
    /// untouched.
    pub fn set_messages(&self, messages: Vec<String>) {
        *write(&self.messages) = messages.into();
    }

    pub fn set_message_order(&self, message_order: MessageOrder) {
        *write(&self.message_order) = message_order;
    }

    pub fn set_word_order(&self, word_order: WordOrder) {
        *write(&self.word_order) = word_order;
    }

    pub fn set_letter_order(&self, letter_order: LetterOrder) {
        *write(&self.letter_order) = letter_order;
    }

    /// Select and scramble the next message.
    ///
    /// Returns `None` when the message list is empty; the cursor is not
    /// advanced in that case.
    pub fn next(&self) -> Option<String> {
        let messages = Arc::clone(&read(&self.messages));
        if messages.is_empty() {
            return None;
        }

        let index = self.select_index(messages.len());
        let word_order = *read(&self.word_order);
        let letter_order = *read(&self.letter_order);
        trace!(index, %word_order, %letter_order, "selected message");

        Some(scramble(&messages[index], word_order, letter_order))
    }

    fn select_index(&self, len: usize) -> usize {
        match *read(&self.message_order) {
            MessageOrder::Random => rand::rng().random_range(0..len),
            MessageOrder::Sequential => {
                let previous = self
                    .cursor
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cursor| {
                        Some(cursor.wrapping_add(1) % len)
                    })
                    .unwrap_or_else(|cursor| cursor);
                previous.wrapping_add(1) % len
            }
        }
    }
}
