//! Boundary-preserving word and letter scrambling.
//!
//! [`scramble`] is a pure function so callers can preview a transform
//! without going through message selection.

use blink_types::{LetterOrder, WordOrder};
use rand::seq::SliceRandom;
use unicode_segmentation::UnicodeSegmentation;

/// Permutation applied to a list of elements, shared between the word and
/// letter levels. `WordOrder::Join` maps to `Forward` here: joining is a
/// tokenization decision, not a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Permutation {
    Forward,
    Reverse,
    ShuffleInner,
    ShuffleAll,
}

impl From<WordOrder> for Permutation {
    fn from(mode: WordOrder) -> Self {
        match mode {
            WordOrder::Forward | WordOrder::Join => Permutation::Forward,
            WordOrder::Reverse => Permutation::Reverse,
            WordOrder::ShuffleInner => Permutation::ShuffleInner,
            WordOrder::ShuffleAll => Permutation::ShuffleAll,
        }
    }
}

impl From<LetterOrder> for Permutation {
    fn from(mode: LetterOrder) -> Self {
        match mode {
            LetterOrder::Forward => Permutation::Forward,
            LetterOrder::Reverse => Permutation::Reverse,
            LetterOrder::ShuffleInner => Permutation::ShuffleInner,
            LetterOrder::ShuffleAll => Permutation::ShuffleAll,
        }
    }
}

/// Reorder `items` in place.
///
/// Single-element and empty lists are always left alone. `ShuffleInner`
/// additionally requires more than three elements: with three or fewer,
/// fixing the first and last leaves nothing to shuffle.
fn permute<T>(items: &mut [T], permutation: Permutation) {
    if items.len() <= 1 {
        return;
    }
    match permutation {
        Permutation::Forward => {}
        Permutation::Reverse => items.reverse(),
        Permutation::ShuffleAll => items.shuffle(&mut rand::rng()),
        Permutation::ShuffleInner => {
            if items.len() > 3 {
                let last = items.len() - 1;
                items[1..last].shuffle(&mut rand::rng());
            }
        }
    }
}

/// Scramble `message` according to the word and letter ordering modes.
///
/// Tokenization splits on the space character only and keeps empty tokens,
/// so consecutive, leading, and trailing spaces survive the round trip and
/// the output always contains exactly the characters of the input.
/// `WordOrder::Join` skips splitting entirely and treats the whole message
/// as one token.
///
/// Letter-level reordering operates on grapheme clusters, so combining
/// marks stay attached to their base character.
#[must_use]
pub fn scramble(message: &str, word_order: WordOrder, letter_order: LetterOrder) -> String {
    if word_order == WordOrder::Forward && letter_order == LetterOrder::Forward {
        return message.to_string();
    }

    let mut tokens: Vec<String> = if word_order == WordOrder::Join {
        vec![message.to_string()]
    } else {
        message.split(' ').map(str::to_string).collect()
    };

    permute(&mut tokens, word_order.into());

    if letter_order != LetterOrder::Forward {
        for token in &mut tokens {
            let mut letters: Vec<&str> = token.graphemes(true).collect();
            permute(&mut letters, letter_order.into());
            let reordered = letters.concat();
            *token = reordered;
        }
    }

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn forward_forward_is_identity() {
        assert_eq!(
            scramble("hello world test", WordOrder::Forward, LetterOrder::Forward),
            "hello world test"
        );
        assert_eq!(scramble("", WordOrder::Forward, LetterOrder::Forward), "");
    }

    #[test]
    fn forward_preserves_multiple_spaces() {
        assert_eq!(
            scramble("hello  world", WordOrder::Forward, LetterOrder::Forward),
            "hello  world"
        );
    }

    #[test]
    fn word_reverse() {
        assert_eq!(
            scramble("hello world test", WordOrder::Reverse, LetterOrder::Forward),
            "test world hello"
        );
    }

    #[test]
    fn word_reverse_single_word_unchanged() {
        assert_eq!(
            scramble("hello", WordOrder::Reverse, LetterOrder::Forward),
            "hello"
        );
    }

    #[test]
    fn word_reverse_is_self_inverse() {
        for input in ["hello world", "a b c d e", "one", "padded  middle"] {
            let once = scramble(input, WordOrder::Reverse, LetterOrder::Forward);
            let twice = scramble(&once, WordOrder::Reverse, LetterOrder::Forward);
            assert_eq!(twice, input);
        }
    }

    #[test]
    fn letter_reverse() {
        assert_eq!(
            scramble("hello", WordOrder::Forward, LetterOrder::Reverse),
            "olleh"
        );
        assert_eq!(
            scramble("hello world", WordOrder::Forward, LetterOrder::Reverse),
            "olleh dlrow"
        );
        assert_eq!(
            scramble("a", WordOrder::Forward, LetterOrder::Reverse),
            "a"
        );
    }

    #[test]
    fn letter_reverse_is_self_inverse() {
        for input in ["hello world", "testing", "x", "spaced  out"] {
            let once = scramble(input, WordOrder::Forward, LetterOrder::Reverse);
            let twice = scramble(&once, WordOrder::Forward, LetterOrder::Reverse);
            assert_eq!(twice, input);
        }
    }

    #[test]
    fn letter_reverse_keeps_graphemes_intact() {
        // e + combining acute accent must travel as one unit
        let input = "cafe\u{301}";
        let reversed = scramble(input, WordOrder::Forward, LetterOrder::Reverse);
        assert_eq!(reversed, "e\u{301}fac");
    }

    #[test]
    fn join_with_forward_letters_is_identity() {
        assert_eq!(
            scramble("hello world test", WordOrder::Join, LetterOrder::Forward),
            "hello world test"
        );
    }

    #[test]
    fn join_reverses_across_word_boundaries() {
        assert_eq!(
            scramble("hello world", WordOrder::Join, LetterOrder::Reverse),
            "dlrow olleh"
        );
    }

    #[test]
    fn reverse_words_and_letters() {
        assert_eq!(
            scramble("hello world", WordOrder::Reverse, LetterOrder::Reverse),
            "dlrow olleh"
        );
    }

    #[test]
    fn shuffle_inner_words_keeps_first_and_last() {
        let input = "first second third fourth last";
        for _ in 0..20 {
            let result = scramble(input, WordOrder::ShuffleInner, LetterOrder::Forward);
            let words: Vec<&str> = result.split(' ').collect();
            assert_eq!(words.first(), Some(&"first"));
            assert_eq!(words.last(), Some(&"last"));
            let mut sorted = words.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, ["first", "fourth", "last", "second", "third"]);
        }
    }

    #[test]
    fn shuffle_inner_three_or_fewer_words_unchanged() {
        assert_eq!(
            scramble("one two three", WordOrder::ShuffleInner, LetterOrder::Forward),
            "one two three"
        );
        assert_eq!(
            scramble("one two", WordOrder::ShuffleInner, LetterOrder::Forward),
            "one two"
        );
        assert_eq!(
            scramble("one", WordOrder::ShuffleInner, LetterOrder::Forward),
            "one"
        );
    }

    #[test]
    fn shuffle_inner_letters_keeps_first_and_last() {
        let input = "testing";
        for _ in 0..20 {
            let result = scramble(input, WordOrder::Forward, LetterOrder::ShuffleInner);
            assert!(result.starts_with('t'));
            assert!(result.ends_with('g'));
            assert_eq!(sorted_chars(&result), sorted_chars(input));
        }
    }

    #[test]
    fn shuffle_inner_three_or_fewer_letters_unchanged() {
        assert_eq!(
            scramble("cat", WordOrder::Forward, LetterOrder::ShuffleInner),
            "cat"
        );
        assert_eq!(
            scramble("at", WordOrder::Forward, LetterOrder::ShuffleInner),
            "at"
        );
    }

    #[test]
    fn shuffle_all_words_preserves_word_multiset() {
        let input = "first second third fourth last";
        for _ in 0..20 {
            let result = scramble(input, WordOrder::ShuffleAll, LetterOrder::Forward);
            let mut words: Vec<&str> = result.split(' ').collect();
            words.sort_unstable();
            assert_eq!(words, ["first", "fourth", "last", "second", "third"]);
        }
    }

    #[test]
    fn shuffle_all_letters_preserves_letter_multiset() {
        let input = "testing";
        for _ in 0..20 {
            let result = scramble(input, WordOrder::Forward, LetterOrder::ShuffleAll);
            assert_eq!(sorted_chars(&result), sorted_chars(input));
        }
    }

    #[test]
    fn shuffle_all_eventually_produces_a_different_order() {
        // 4! = 24 arrangements; 100 draws leaving the input untouched every
        // time would be astronomically unlikely.
        let input = "a b c d";
        let moved = (0..100)
            .map(|_| scramble(input, WordOrder::ShuffleAll, LetterOrder::Forward))
            .any(|result| result != input);
        assert!(moved);
    }

    #[test]
    fn every_mode_combination_preserves_characters() {
        let word_orders = [
            WordOrder::Forward,
            WordOrder::Reverse,
            WordOrder::ShuffleInner,
            WordOrder::ShuffleAll,
            WordOrder::Join,
        ];
        let letter_orders = [
            LetterOrder::Forward,
            LetterOrder::Reverse,
            LetterOrder::ShuffleInner,
            LetterOrder::ShuffleAll,
        ];
        let inputs = ["hello world test", " leading", "trailing ", "a  b", ""];
        for input in inputs {
            for word_order in word_orders {
                for letter_order in letter_orders {
                    let result = scramble(input, word_order, letter_order);
                    assert_eq!(
                        sorted_chars(&result),
                        sorted_chars(input),
                        "chars changed for {input:?} with {word_order}/{letter_order}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_tokens_survive_reordering() {
        // Splitting is not whitespace-collapsing: "a  b" is three tokens,
        // the middle one empty, and reversal keeps all three.
        assert_eq!(
            scramble("a  b", WordOrder::Reverse, LetterOrder::Forward),
            "b  a"
        );
        assert_eq!(
            scramble("a ", WordOrder::Reverse, LetterOrder::Forward),
            " a"
        );
    }
}
