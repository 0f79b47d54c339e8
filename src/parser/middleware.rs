use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::{ErrorContext, Printer};

/// The configured flag parser.
/// Built via `FlagParser::build`.
pub struct GeneralParser<'a> {
    program: String,
    parser: Parser<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface + 'a>,
}

impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        program: impl Into<String>,
        parser: Parser<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface + 'a>,
    ) -> Self {
        Self {
            program: program.into(),
            parser,
            printer,
            user_interface,
        }
    }

    pub(crate) fn with_interface(mut self, user_interface: Box<dyn UserInterface + 'a>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// Run the flag parser against the input tokens.
    ///
    /// Parsing happens in three phases:
    /// 1. Token matching aligns the tokens to flags.
    /// All tokens must be matched successfully in order to proceed to the next phase.
    /// 2. If a settings file is given (`--config PATH`), its values are applied to the flags absent from the tokens.
    /// 3. Token capturing updates each flag value, once per occurrence, in command line order.
    /// This phase will actually mutate your program variables.
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, invalid flag value, etc), it will return with `Err(1)`.
    /// Flag values updated before the error keep their updates.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and return with `Err(0)`.
    /// This skips phases #2 and #3.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let GeneralParser {
            program,
            parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Action::Continue) => Ok(()),
            Ok(Action::PrintHelp) => {
                printer.print_help(program, &*user_interface);
                Err(0)
            }
            Err((offset, parse_error)) => {
                user_interface.print_error(&parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }

    /// Run the flag parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except that instead of returning `Err(code)` the process exits with `code` (via `std::process::exit`).
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(exit_code) = self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            std::process::exit(exit_code);
        }
    }
}
