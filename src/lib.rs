//! `column_report` prints selected columns of a tabular range.
//!
//! The interesting part is the column selector: [`UintList`], an accumulating list of unsigned integers that serves as
//! the target of a command line flag.
//! * Before any update, it holds the defaults it was constructed with.
//! * The first update discards the defaults, whether or not that update succeeds.
//! * Every later update appends.
//! * Each update is comma separated text; every token is parsed by [`parse_uint`], which infers the base from the
//! token's prefix (`0x`, `0o`, `0b`, or a leading `0` for octal).
//!
//! A failing update is not atomic: the tokens before the offending one stay appended.
//!
//! # Flags
//! Any type implementing [`prelude::FlagValue`] can be bound to a [`Flag`] and registered on a [`FlagParser`].
//! The parser updates each flag once per occurrence (`--name VALUE` or `--name=VALUE`), and shows each flag's rendered
//! default in its help message.
//!
//! ```
//! use column_report::{Flag, FlagParser, UintList};
//!
//! let mut header = "Name, Major".to_string();
//! let mut indices = UintList::new([0, 4]);
//! let parser = FlagParser::new("program")
//!     .add(Flag::new(&mut header, "report-header").help("Heading to print before data."))
//!     .add(Flag::new(&mut indices, "report-indices").help("Indices of columns to print."))
//!     .build()
//!     .unwrap();
//!
//! parser
//!     .parse_tokens(&["--report-indices", "9,8,7", "--report-indices", "6,5,4"])
//!     .unwrap();
//!
//! assert_eq!(header, "Name, Major");
//! assert_eq!(indices.snapshot(), vec![9, 8, 7, 6, 5, 4]);
//! ```
//!
//! # Report
//! [`ReportConfig`] gathers every flag of the `column-report` program in a single parsing pass, and [`Report`]
//! projects rows onto the selected columns:
//! ```console
//! $ printf 'Alexandra\tFemale\t4. Senior\tCA\tEnglish\n' | column-report --report-indices 4,0
//! Name, Major:
//! English, Alexandra
//!
//! $ column-report --report-indices 0,potato
//! Parse error: Flag 'report-indices' cannot convert 'potato' to an unsigned 32-bit integer: invalid digit found in string.
//! --report-indices 0,potato
//!                  ^
//! ```
#![deny(missing_docs)]
mod api;
mod config;
mod constant;
mod model;
mod parser;
pub mod prelude;
mod report;

pub use api::*;
pub use config::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser};
pub use report::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
