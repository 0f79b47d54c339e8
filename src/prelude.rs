//! Traits which, typically, may be imported without concern: `use column_report::prelude::*`.
use crate::api::InvalidUpdate;

/// Behaviour for a type to serve as the target of a command line flag.
///
/// A flag value can render itself back to text (for the default shown in the help message), and can be
/// updated from the text of a single flag occurrence.
// Needs to be imported in order to implement a custom flag target.
pub trait FlagValue {
    /// Render the current value as text.
    fn render(&self) -> String;

    /// Update the value from the text of one flag occurrence.
    fn update(&mut self, text: &str) -> Result<(), InvalidUpdate>;
}
