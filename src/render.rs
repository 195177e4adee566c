//! Rendering of configuration snapshots for inspection.
//!
//! Purely presentational: a renderer consumes the configurations an execution
//! yields and has no effect on machine semantics. One line per configuration:
//! the state name padded to a fixed width, the left-hand symbols in tape
//! order, the current symbol under a head marker, and the right-hand symbols
//! in tape order.

use serde::{Deserialize, Serialize};

use crate::types::Configuration;

/// Width the state name is padded to before the tape is printed.
const STATE_COLUMN_WIDTH: usize = 30;

const HIGHLIGHT_BEGIN: &str = "\x1b[47;1m";
const HIGHLIGHT_END: &str = "\x1b[0m";

/// How the head position is marked in a rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceStyle {
    /// Plain brackets around the current symbol: `[x]`.
    #[default]
    Plain,
    /// ANSI reverse-video highlighting of the current symbol.
    Highlight,
}

/// Formats [`Configuration`] snapshots, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    style: TraceStyle,
}

impl Renderer {
    pub fn new(style: TraceStyle) -> Self {
        Self { style }
    }

    /// Renders one configuration as a single line.
    ///
    /// Blank cells are printed as the blank symbol itself, so the cell left
    /// of the input shows up as a leading space with the default blank.
    pub fn render(&self, configuration: &Configuration) -> String {
        let (begin, end) = match self.style {
            TraceStyle::Plain => ("[", "]"),
            TraceStyle::Highlight => (HIGHLIGHT_BEGIN, HIGHLIGHT_END),
        };

        let left: String = configuration.left.iter().rev().collect();
        let right: String = configuration.right.iter().collect();

        format!(
            "{:<width$} {}{}{}{}{}",
            configuration.state,
            left,
            begin,
            configuration.symbol,
            end,
            right,
            width = STATE_COLUMN_WIDTH,
        )
    }
}
