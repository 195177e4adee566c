//! Core data types for the Turing machine interpreter: directions, actions,
//! transitions, configuration snapshots, verdicts, the JSON definition format,
//! and the error type shared across the crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The default start state of a machine.
pub const DEFAULT_START_STATE: &str = "q0";
/// The default accept state of a machine.
pub const DEFAULT_ACCEPT_STATE: &str = "qa";
/// The default reject state of a machine.
pub const DEFAULT_REJECT_STATE: &str = "qr";
/// The default blank symbol written on unvisited tape cells.
pub const DEFAULT_BLANK_SYMBOL: char = ' ';
/// The default number of steps the acceptance evaluator pulls before giving up.
pub const DEFAULT_STEP_LIMIT: usize = 100;

/// The directions a tape head can move after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

/// The role the machine's current state plays during one step.
///
/// Every emission of an [`Execution`](crate::machine::Execution) is tagged
/// with an `Action`. `Accept` and `Reject` are final: the execution yields the
/// configuration that entered the halting state and then terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The machine is in a transient state and keeps running.
    Continue,
    /// The machine reached its accept state.
    Accept,
    /// The machine reached its reject state.
    Reject,
}

impl Action {
    /// Returns `true` for `Accept` and `Reject`.
    pub fn is_halting(&self) -> bool {
        !matches!(self, Action::Continue)
    }
}

/// A single transition rule: what to write, where to move, and the next state.
///
/// The `(state, read symbol)` key lives in the [`TransitionTable`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The symbol written under the head before the move.
    pub write: char,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The state the machine transitions to.
    pub next_state: String,
}

impl Transition {
    pub fn new(write: char, direction: Direction, next_state: impl Into<String>) -> Self {
        Self {
            write,
            direction,
            next_state: next_state.into(),
        }
    }
}

/// A deterministic transition table keyed by (state, read symbol).
///
/// Stored as a nested map so the per-step lookup can borrow the current state
/// name instead of building an owned key. Inserting a duplicate key replaces
/// the previous rule (last write wins); callers must not rely on that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    rules: HashMap<String, HashMap<char, Transition>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule, returning the rule it replaced, if any.
    pub fn insert(
        &mut self,
        state: impl Into<String>,
        read: char,
        transition: Transition,
    ) -> Option<Transition> {
        self.rules
            .entry(state.into())
            .or_default()
            .insert(read, transition)
    }

    /// Builder-style variant of [`insert`](Self::insert) for literal tables.
    pub fn rule(
        mut self,
        state: &str,
        read: char,
        write: char,
        direction: Direction,
        next_state: &str,
    ) -> Self {
        self.insert(state, read, Transition::new(write, direction, next_state));
        self
    }

    /// Looks up the rule for a (state, read symbol) pair.
    pub fn get(&self, state: &str, read: char) -> Option<&Transition> {
        self.rules.get(state).and_then(|rules| rules.get(&read))
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(HashMap::is_empty)
    }
}

/// An immutable snapshot of the machine at one step: the current state, the
/// symbols left of the head (nearest to the head first), the symbol under the
/// head, and the symbols right of the head (nearest to the head first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub state: String,
    pub left: Vec<char>,
    pub symbol: char,
    pub right: Vec<char>,
}

impl Configuration {
    /// Reconstructs the written tape contents left-to-right:
    /// `reverse(left) + [symbol] + right`.
    pub fn contents(&self) -> String {
        self.left
            .iter()
            .rev()
            .chain(std::iter::once(&self.symbol))
            .chain(self.right.iter())
            .collect()
    }
}

/// The tri-state result of a bounded acceptance run.
///
/// `StepLimitReached` means the machine was still running when the step limit
/// was exhausted. It is a legitimate outcome of a bounded search, not an
/// error, and is deliberately distinct from both `Accepted` and `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The machine halted in its accept state.
    Accepted,
    /// The machine halted in its reject state.
    Rejected,
    /// The step limit was exhausted before the machine halted.
    StepLimitReached,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Verdict::StepLimitReached)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::StepLimitReached => write!(f, "step limit reached"),
        }
    }
}

/// A machine definition as found in a `.json` definition file.
///
/// The counterpart of a machine's constructor arguments in serializable form:
/// the state roles, the blank symbol, and a flat list of rules. Omitted
/// fields fall back to the `q0`/`qa`/`qr` convention and a space blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineDef {
    /// A human-readable name for the machine.
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_start_state")]
    pub start_state: String,
    #[serde(default = "default_accept_state")]
    pub accept_state: String,
    #[serde(default = "default_reject_state")]
    pub reject_state: String,
    #[serde(default = "default_blank_symbol")]
    pub blank: char,
    pub rules: Vec<RuleDef>,
}

/// One rule of a [`MachineDef`]: the (state, read) key together with its
/// [`Transition`] payload, flattened for readable JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub state: String,
    pub read: char,
    pub write: char,
    pub direction: Direction,
    pub next_state: String,
}

fn default_start_state() -> String {
    DEFAULT_START_STATE.to_string()
}

fn default_accept_state() -> String {
    DEFAULT_ACCEPT_STATE.to_string()
}

fn default_reject_state() -> String {
    DEFAULT_REJECT_STATE.to_string()
}

fn default_blank_symbol() -> char {
    DEFAULT_BLANK_SYMBOL
}

/// Errors that can occur while loading machine definitions.
///
/// The interpreter core never fails: construction always succeeds and every
/// (state, symbol) pair has a well-defined next step. Errors exist only on
/// the definition-loading surface.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A definition file could not be read.
    #[error("File error: {0}")]
    FileError(String),
    /// A definition document was not valid JSON for [`MachineDef`].
    #[error("Definition parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    /// A structurally valid definition failed a catalogue-level check.
    #[error("Definition validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Direction = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_transition_table_lookup() {
        let table = TransitionTable::new()
            .rule("q0", '#', '#', Direction::Right, "saw_#")
            .rule("saw_#", ' ', ' ', Direction::Right, "qa");

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("q0", '#'),
            Some(&Transition::new('#', Direction::Right, "saw_#"))
        );
        assert_eq!(table.get("q0", '0'), None);
        assert_eq!(table.get("missing", '#'), None);
    }

    #[test]
    fn test_transition_table_last_write_wins() {
        let mut table = TransitionTable::new();
        assert!(table.is_empty());

        let old = table.insert("q0", '#', Transition::new('#', Direction::Right, "first"));
        assert_eq!(old, None);

        let old = table.insert("q0", '#', Transition::new('X', Direction::Left, "second"));
        assert_eq!(old, Some(Transition::new('#', Direction::Right, "first")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("q0", '#').unwrap().next_state, "second");
    }

    #[test]
    fn test_configuration_contents() {
        let configuration = Configuration {
            state: "q1".to_string(),
            left: vec!['b', 'a'],
            symbol: 'c',
            right: vec!['d', 'e'],
        };

        assert_eq!(configuration.contents(), "abcde");
    }

    #[test]
    fn test_verdict_predicates() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(Verdict::Rejected.is_rejected());
        assert!(Verdict::StepLimitReached.is_indeterminate());
        assert!(!Verdict::StepLimitReached.is_accepted());
        assert!(!Verdict::StepLimitReached.is_rejected());
        assert_eq!(Verdict::StepLimitReached.to_string(), "step limit reached");
    }

    #[test]
    fn test_machine_def_defaults() {
        let def: MachineDef = serde_json::from_str(
            r##"{
                "rules": [
                    {"state": "q0", "read": "#", "write": "#", "direction": "Right", "next_state": "qa"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(def.name, "");
        assert_eq!(def.start_state, "q0");
        assert_eq!(def.accept_state, "qa");
        assert_eq!(def.reject_state, "qr");
        assert_eq!(def.blank, ' ');
        assert_eq!(def.rules.len(), 1);
    }

    #[test]
    fn test_error_display() {
        let error = MachineError::FileError("missing.json".to_string());

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("File error"));
        assert!(error_msg.contains("missing.json"));
    }
}
