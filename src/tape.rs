//! The singly-infinite tape: a zipper of symbols around the head.
//!
//! The tape stores the symbol under the head plus two sequences of symbols,
//! one for each side of the head, both ordered nearest-to-head first.
//! Concatenating `reverse(left) + [current] + right` reconstructs everything
//! written so far, left-to-right. Reading past the right end yields the blank
//! symbol and writing past it extends the tape; the left end is bounded.

use std::collections::VecDeque;
use tracing::warn;

/// A singly-infinite tape with its head position.
///
/// A fresh tape carries one blank cell to the left of the input, so a machine
/// that scans left for the start of its input finds a blank there. Moving
/// left when the left-hand side is already empty keeps the head where it is
/// and logs a warning; it never corrupts the tape or halts the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    left: VecDeque<char>,
    current: char,
    right: VecDeque<char>,
    blank: char,
}

impl Tape {
    /// Creates a tape holding `input` with the head on its first symbol.
    ///
    /// Empty input is indistinguishable from input consisting of a single
    /// blank cell.
    pub fn new(input: &str, blank: char) -> Self {
        let mut symbols = input.chars();
        Self {
            left: VecDeque::from([blank]),
            current: symbols.next().unwrap_or(blank),
            right: symbols.collect(),
            blank,
        }
    }

    /// The symbol under the head.
    pub fn read(&self) -> char {
        self.current
    }

    /// Replaces the symbol under the head.
    pub fn write(&mut self, symbol: char) {
        self.current = symbol;
    }

    /// Moves the head one cell to the right, extending with a blank if the
    /// cell was never written.
    pub fn move_right(&mut self) {
        self.left.push_front(self.current);
        self.current = self.right.pop_front().unwrap_or(self.blank);
    }

    /// Moves the head one cell to the left, or stays put at the left edge.
    pub fn move_left(&mut self) {
        match self.left.pop_front() {
            Some(symbol) => {
                self.right.push_front(self.current);
                self.current = symbol;
            }
            None => {
                warn!("attempt to move left from the leftmost cell; the head stays put");
            }
        }
    }

    /// The symbols left of the head, nearest to the head first.
    pub fn left_symbols(&self) -> Vec<char> {
        self.left.iter().copied().collect()
    }

    /// The symbols right of the head, nearest to the head first.
    pub fn right_symbols(&self) -> Vec<char> {
        self.right.iter().copied().collect()
    }

    /// The written tape contents, left-to-right.
    pub fn contents(&self) -> String {
        self.left
            .iter()
            .rev()
            .chain(std::iter::once(&self.current))
            .chain(self.right.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_head_on_first_symbol() {
        let tape = Tape::new("abc", ' ');

        assert_eq!(tape.read(), 'a');
        assert_eq!(tape.left_symbols(), vec![' ']);
        assert_eq!(tape.right_symbols(), vec!['b', 'c']);
        assert_eq!(tape.contents(), " abc");
    }

    #[test]
    fn test_empty_input_is_a_single_blank() {
        let tape = Tape::new("", '-');

        assert_eq!(tape.read(), '-');
        assert_eq!(tape.left_symbols(), vec!['-']);
        assert_eq!(tape.right_symbols(), Vec::<char>::new());
    }

    #[test]
    fn test_move_right_past_the_end_extends_with_blanks() {
        let mut tape = Tape::new("a", ' ');

        tape.move_right();
        assert_eq!(tape.read(), ' ');
        tape.move_right();
        assert_eq!(tape.read(), ' ');
        assert_eq!(tape.left_symbols(), vec![' ', 'a', ' ']);
    }

    #[test]
    fn test_write_then_move_keeps_written_symbols() {
        let mut tape = Tape::new("ab", ' ');

        tape.write('X');
        tape.move_right();
        assert_eq!(tape.read(), 'b');
        tape.write('Y');
        tape.move_left();
        assert_eq!(tape.read(), 'X');
        assert_eq!(tape.contents(), " XY");
    }

    #[test]
    fn test_move_left_at_the_edge_stays_put() {
        let mut tape = Tape::new("ab", ' ');

        // One blank sits left of the input; past it the head stays put.
        tape.move_left();
        assert_eq!(tape.read(), ' ');
        assert_eq!(tape.left_symbols(), Vec::<char>::new());

        tape.move_left();
        assert_eq!(tape.read(), ' ');
        assert_eq!(tape.left_symbols(), Vec::<char>::new());
        assert_eq!(tape.right_symbols(), vec!['a', 'b']);
    }

    #[test]
    fn test_contents_reconstruction_after_moves() {
        let mut tape = Tape::new("101", '_');

        tape.write('X');
        tape.move_right();
        tape.move_right();
        tape.write('Y');
        tape.move_right();

        // Visited-and-written cells plus blanks for visited-but-unwritten.
        assert_eq!(tape.contents(), "_X0Y_");
    }
}
