//! The machine interpreter: an immutable [`Machine`] owning a transition
//! table and its state roles, and the lazy [`Execution`] it produces for each
//! input. One execution step is computed per pull, so machines that never
//! halt are directly representable and the caller bounds them externally.

use tracing::warn;

use crate::render::{Renderer, TraceStyle};
use crate::tape::Tape;
use crate::types::{
    Action, Configuration, Direction, MachineDef, Transition, TransitionTable, Verdict,
    DEFAULT_ACCEPT_STATE, DEFAULT_BLANK_SYMBOL, DEFAULT_REJECT_STATE, DEFAULT_START_STATE,
    DEFAULT_STEP_LIMIT,
};

/// A deterministic single-tape Turing machine.
///
/// A machine is the immutable pairing of a [`TransitionTable`] with its start,
/// accept and reject states and a blank symbol. Construction never fails and
/// performs no validation; the table may be empty and the state roles may
/// coincide. Any (state, symbol) pair absent from the table transitions
/// implicitly to the reject state, writing the symbol back and moving right.
///
/// The machine itself is never mutated by execution: [`run`](Machine::run)
/// hands out a fresh [`Execution`] each call, so independent runs over one
/// machine may proceed concurrently.
#[derive(Debug, Clone)]
pub struct Machine {
    transitions: TransitionTable,
    start_state: String,
    accept_state: String,
    reject_state: String,
    blank: char,
}

impl Machine {
    /// Creates a machine with the conventional `q0`/`qa`/`qr` state roles and
    /// a space blank.
    pub fn new(transitions: TransitionTable) -> Self {
        Self::with_config(
            transitions,
            DEFAULT_START_STATE,
            DEFAULT_ACCEPT_STATE,
            DEFAULT_REJECT_STATE,
            DEFAULT_BLANK_SYMBOL,
        )
    }

    /// Creates a machine with explicit state roles and blank symbol.
    pub fn with_config(
        transitions: TransitionTable,
        start_state: impl Into<String>,
        accept_state: impl Into<String>,
        reject_state: impl Into<String>,
        blank: char,
    ) -> Self {
        Self {
            transitions,
            start_state: start_state.into(),
            accept_state: accept_state.into(),
            reject_state: reject_state.into(),
            blank,
        }
    }

    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    pub fn accept_state(&self) -> &str {
        &self.accept_state
    }

    pub fn reject_state(&self) -> &str {
        &self.reject_state
    }

    pub fn blank(&self) -> char {
        self.blank
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Starts a fresh execution over `input`.
    ///
    /// The returned iterator yields one `(Action, Configuration)` pair per
    /// step, beginning with the initial configuration before any transition
    /// is applied, and terminates after yielding the emission whose action is
    /// `Accept` or `Reject`. A machine that never reaches a halting state
    /// yields forever; bound it with [`evaluate`](Machine::evaluate) or
    /// `take`. Each call produces an independent execution.
    ///
    /// Empty input is treated as input consisting of a single blank symbol.
    pub fn run(&self, input: &str) -> Execution<'_> {
        Execution {
            machine: self,
            state: self.start_state.clone(),
            tape: Tape::new(input, self.blank),
            halted: false,
        }
    }

    /// Runs the machine over `input` for at most `step_limit` emissions and
    /// reduces the trace to a [`Verdict`].
    ///
    /// Pulls lazily and stops at the first halting action, so a large limit
    /// costs nothing for a machine that halts early. Exhausting the limit is
    /// reported as [`Verdict::StepLimitReached`] with a warning logged — a
    /// bounded search that is still running is not an error.
    pub fn evaluate(&self, input: &str, step_limit: usize) -> Verdict {
        let mut last = Action::Continue;
        for (action, _) in self.run(input).take(step_limit) {
            last = action;
            if action.is_halting() {
                break;
            }
        }

        match last {
            Action::Accept => Verdict::Accepted,
            Action::Reject => Verdict::Rejected,
            Action::Continue => {
                warn!(step_limit, "the step limit was reached before the machine halted");
                Verdict::StepLimitReached
            }
        }
    }

    /// Whether the machine accepts `input` within [`DEFAULT_STEP_LIMIT`] steps.
    ///
    /// Returns `false` both for rejection and for an indeterminate run; use
    /// [`evaluate`](Machine::evaluate) to tell the two apart or to raise the
    /// limit for long-running machines.
    pub fn accepts(&self, input: &str) -> bool {
        self.evaluate(input, DEFAULT_STEP_LIMIT).is_accepted()
    }

    /// Whether the machine rejects `input` within [`DEFAULT_STEP_LIMIT`] steps.
    ///
    /// The complement of [`accepts`](Machine::accepts) whenever the verdict
    /// is determinate; never `true` for an indeterminate run.
    pub fn rejects(&self, input: &str) -> bool {
        self.evaluate(input, DEFAULT_STEP_LIMIT).is_rejected()
    }

    /// Prints one rendered line per emission, up to `step_limit` of them.
    pub fn debug(&self, input: &str, step_limit: usize, style: TraceStyle) {
        let renderer = Renderer::new(style);
        for (_, configuration) in self.run(input).take(step_limit) {
            println!("{}", renderer.render(&configuration));
        }
    }

    /// The action associated with a state by its role. The accept state wins
    /// if a state holds several roles.
    fn action_for(&self, state: &str) -> Action {
        if state == self.accept_state {
            Action::Accept
        } else if state == self.reject_state {
            Action::Reject
        } else {
            Action::Continue
        }
    }

    /// The total transition function: the table entry for (state, symbol),
    /// or the implicit default to the reject state (same symbol, move right)
    /// when the table has no entry. Never fails.
    fn resolve(&self, state: &str, symbol: char) -> Transition {
        self.transitions
            .get(state, symbol)
            .cloned()
            .unwrap_or_else(|| {
                Transition::new(symbol, Direction::Right, self.reject_state.clone())
            })
    }
}

impl MachineDef {
    /// Builds the machine this definition describes.
    ///
    /// Duplicate (state, read) rules keep the last occurrence and log a
    /// warning for the replaced one.
    pub fn build(&self) -> Machine {
        let mut transitions = TransitionTable::new();
        for rule in &self.rules {
            let replaced = transitions.insert(
                rule.state.clone(),
                rule.read,
                Transition::new(rule.write, rule.direction, rule.next_state.clone()),
            );
            if replaced.is_some() {
                warn!(
                    state = %rule.state,
                    read = %rule.read,
                    "duplicate rule in definition; the later one wins"
                );
            }
        }

        Machine::with_config(
            transitions,
            &self.start_state,
            &self.accept_state,
            &self.reject_state,
            self.blank,
        )
    }
}

/// One run of a [`Machine`] over one input.
///
/// A transient, single-consumer iterator owning its own tape and current
/// state. Each `next` call performs exactly one step: it snapshots the
/// current configuration, and — unless the state is a halting one — applies
/// the (total) transition function, writes, moves the head and switches
/// state. Dropping the execution at any point is sufficient cancellation; it
/// holds no resources beyond its tape.
pub struct Execution<'m> {
    machine: &'m Machine,
    state: String,
    tape: Tape,
    halted: bool,
}

impl Execution<'_> {
    /// The state the execution is currently in.
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl Iterator for Execution<'_> {
    type Item = (Action, Configuration);

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let action = self.machine.action_for(&self.state);
        let configuration = Configuration {
            state: self.state.clone(),
            left: self.tape.left_symbols(),
            symbol: self.tape.read(),
            right: self.tape.right_symbols(),
        };

        if action.is_halting() {
            self.halted = true;
            return Some((action, configuration));
        }

        let transition = self.machine.resolve(&self.state, self.tape.read());
        self.tape.write(transition.write);
        match transition.direction {
            Direction::Left => self.tape.move_left(),
            Direction::Right => self.tape.move_right(),
        }
        self.state = transition.next_state;

        Some((action, configuration))
    }
}
