use crate::prelude::FlagValue;

/// A named flag, bound to the variable it updates.
///
/// ### Example
/// ```
/// use column_report::{Flag, FlagParser, UintList};
///
/// let mut indices = UintList::new([0, 4]);
/// let parser = FlagParser::new("program")
///     .add(Flag::new(&mut indices, "report-indices").help("Indices of columns to print."))
///     .build()
///     .unwrap();
///
/// parser.parse_tokens(&["--report-indices", "1,3"]).unwrap();
/// assert_eq!(indices.snapshot(), vec![1, 3]);
/// ```
pub struct Flag<'a> {
    name: String,
    help: Option<String>,
    target: &'a mut (dyn FlagValue + 'a),
}

impl<'a> Flag<'a> {
    /// Create a flag, matched on the Cli via `--name VALUE` or `--name=VALUE`.
    pub fn new(target: &'a mut (dyn FlagValue + 'a), name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
            target,
        }
    }

    /// Document the help message for this flag.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    pub(crate) fn consume(self) -> (String, Option<String>, &'a mut (dyn FlagValue + 'a)) {
        (self.name, self.help, self.target)
    }
}
