//! Commit/revert rules for the two host conventions
//!
//! A free-standing form treats the field as uncommitted until the user
//! confirms it; a grid cell editor saves on any exit, like a spreadsheet.
//! The rules are a pure table over `(Mode, ExitEvent, open)` so they can be
//! checked without an engine.
//!
//! | Event          | Form                    | Cell editor              |
//! |----------------|-------------------------|--------------------------|
//! | select row     | commit row              | commit row               |
//! | Enter          | commit candidate        | commit candidate         |
//! | Tab            | commit candidate if open| commit candidate         |
//! | Escape         | revert                  | revert + cancel edit     |
//! | Up/Down, open  | move highlight          | move highlight           |
//! | arrow, closed  | nothing                 | commit query             |
//! | blur / outside | revert                  | commit query             |

use serde::{Deserialize, Serialize};

use crate::messages::Direction;

/// Which host convention a field follows; fixed for the field's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Form,
    CellEditor,
}

/// Events that may end (or navigate within) an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitEvent {
    /// Mouse selection of a display row
    Select(usize),
    Enter,
    Tab,
    Escape,
    Arrow(Direction),
    Blur,
    ClickOutside,
}

/// What the engine should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Commit the display row at this index
    CommitOption(usize),
    /// Commit the highlighted row, else the trimmed query; nothing if neither
    CommitCandidate,
    /// Commit the trimmed query text as typed
    CommitQuery,
    /// Move the highlight without ending the interaction
    Navigate(Direction),
    /// Restore the committed value
    Revert,
    NoOp,
}

impl Decision {
    /// Whether this decision ends the interaction
    pub fn ends_interaction(self) -> bool {
        !matches!(self, Decision::Navigate(_) | Decision::NoOp)
    }
}

/// Decide how `mode` handles `event` given whether the dropdown is open
pub fn decide(mode: Mode, event: ExitEvent, open: bool) -> Decision {
    match (mode, event) {
        (_, ExitEvent::Select(index)) => Decision::CommitOption(index),
        (_, ExitEvent::Enter) => Decision::CommitCandidate,
        (_, ExitEvent::Escape) => Decision::Revert,

        (Mode::Form, ExitEvent::Tab) if open => Decision::CommitCandidate,
        (Mode::Form, ExitEvent::Tab) => Decision::NoOp,
        (Mode::CellEditor, ExitEvent::Tab) => Decision::CommitCandidate,

        (_, ExitEvent::Arrow(direction @ (Direction::Up | Direction::Down))) if open => {
            Decision::Navigate(direction)
        }
        // Left/Right move the caret inside the input
        (_, ExitEvent::Arrow(_)) if open => Decision::NoOp,
        (Mode::Form, ExitEvent::Arrow(_)) => Decision::NoOp,
        // Save before the grid reads the arrow as cell navigation
        (Mode::CellEditor, ExitEvent::Arrow(_)) => Decision::CommitQuery,

        (Mode::Form, ExitEvent::Blur | ExitEvent::ClickOutside) => Decision::Revert,
        (Mode::CellEditor, ExitEvent::Blur | ExitEvent::ClickOutside) => Decision::CommitQuery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROWS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_select_and_enter_are_mode_independent() {
        for mode in [Mode::Form, Mode::CellEditor] {
            for open in [true, false] {
                assert_eq!(
                    decide(mode, ExitEvent::Select(2), open),
                    Decision::CommitOption(2)
                );
                assert_eq!(decide(mode, ExitEvent::Enter, open), Decision::CommitCandidate);
                assert_eq!(decide(mode, ExitEvent::Escape, open), Decision::Revert);
            }
        }
    }

    #[test]
    fn test_tab_when_closed_differs_by_mode() {
        assert_eq!(decide(Mode::Form, ExitEvent::Tab, true), Decision::CommitCandidate);
        assert_eq!(decide(Mode::Form, ExitEvent::Tab, false), Decision::NoOp);
        assert_eq!(
            decide(Mode::CellEditor, ExitEvent::Tab, false),
            Decision::CommitCandidate
        );
    }

    #[test]
    fn test_arrows_navigate_when_open() {
        for mode in [Mode::Form, Mode::CellEditor] {
            assert_eq!(
                decide(mode, ExitEvent::Arrow(Direction::Down), true),
                Decision::Navigate(Direction::Down)
            );
            assert_eq!(
                decide(mode, ExitEvent::Arrow(Direction::Up), true),
                Decision::Navigate(Direction::Up)
            );
            assert_eq!(decide(mode, ExitEvent::Arrow(Direction::Left), true), Decision::NoOp);
        }
    }

    #[test]
    fn test_arrows_when_closed() {
        for direction in ARROWS {
            assert_eq!(
                decide(Mode::Form, ExitEvent::Arrow(direction), false),
                Decision::NoOp
            );
            assert_eq!(
                decide(Mode::CellEditor, ExitEvent::Arrow(direction), false),
                Decision::CommitQuery
            );
        }
    }

    #[test]
    fn test_leaving_the_field() {
        for event in [ExitEvent::Blur, ExitEvent::ClickOutside] {
            for open in [true, false] {
                assert_eq!(decide(Mode::Form, event, open), Decision::Revert);
                assert_eq!(decide(Mode::CellEditor, event, open), Decision::CommitQuery);
            }
        }
    }

    #[test]
    fn test_ends_interaction() {
        assert!(Decision::Revert.ends_interaction());
        assert!(Decision::CommitQuery.ends_interaction());
        assert!(!Decision::Navigate(Direction::Up).ends_interaction());
        assert!(!Decision::NoOp.ends_interaction());
    }
}
