use crate::api::{Flag, FlagParser, UintList};
use crate::parser::{ConsoleInterface, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The default spreadsheet: the public "Class Data" example sheet.
pub const DEFAULT_SPREADSHEET_ID: &str = "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms";
/// The default range of cells to read.
pub const DEFAULT_READ_RANGE: &str = "Class Data!A2:E";
/// The default heading printed before the data.
pub const DEFAULT_REPORT_HEADER: &str = "Name, Major";
/// The default column indices (name and major).
pub const DEFAULT_REPORT_INDICES: [u32; 2] = [0, 4];

/// Everything the report needs, resolved from the command line in a single parsing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Identifier of the spreadsheet to read.
    pub spreadsheet_id: String,
    /// Range of cells to read.
    pub read_range: String,
    /// Heading to print before the data.
    pub report_header: String,
    /// Indices of the columns to print, zero-based relative to `read_range`.
    pub report_indices: Vec<u32>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            read_range: DEFAULT_READ_RANGE.to_string(),
            report_header: DEFAULT_REPORT_HEADER.to_string(),
            report_indices: DEFAULT_REPORT_INDICES.to_vec(),
        }
    }
}

impl ReportConfig {
    /// Resolve the config from the Cli [`std::env::args`].
    ///
    /// Exits the process after printing help (code `0`) or a parse error (code `1`).
    pub fn parse(program: impl Into<String>) -> Self {
        let command_input: Vec<String> = std::env::args().skip(1).collect();
        let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

        match Self::parse_tokens(program, &tokens) {
            Ok(config) => config,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }

    /// Resolve the config from `tokens`.
    ///
    /// Returns `Err(0)` after printing help, and `Err(1)` after printing a parse error.
    ///
    /// ### Example
    /// ```
    /// use column_report::ReportConfig;
    ///
    /// let config = ReportConfig::parse_tokens("program", &["--report-indices", "1,2"]).unwrap();
    /// assert_eq!(config.report_indices, vec![1, 2]);
    /// assert_eq!(config.report_header, "Name, Major");
    /// ```
    pub fn parse_tokens(program: impl Into<String>, tokens: &[&str]) -> Result<Self, i32> {
        Self::parse_tokens_with(program, tokens, &ConsoleInterface::default())
    }

    pub(crate) fn parse_tokens_with(
        program: impl Into<String>,
        tokens: &[&str],
        user_interface: &dyn UserInterface,
    ) -> Result<Self, i32> {
        let ReportConfig {
            mut spreadsheet_id,
            mut read_range,
            mut report_header,
            report_indices,
        } = Self::default();
        let mut report_indices = UintList::new(report_indices);

        match FlagParser::new(program)
            .about("Print selected columns of a spreadsheet range.")
            .settings_file()
            .add(
                Flag::new(&mut spreadsheet_id, "spreadsheet-id")
                    .help("Identifier of spreadsheet to read."),
            )
            .add(Flag::new(&mut read_range, "read-range").help("Range of cells to read."))
            .add(
                Flag::new(&mut report_header, "report-header")
                    .help("Heading to print before data."),
            )
            .add(Flag::new(&mut report_indices, "report-indices").help(
                "Indices of columns to print, zero-based relative to the read range.  \
                 Comma separated; repeat the flag to append more.",
            ))
            .build()
        {
            Ok(parser) => parser
                .with_interface(Box::new(user_interface))
                .parse_tokens(tokens)?,
            Err(error) => {
                user_interface.print_error(&error);
                return Err(1);
            }
        };

        let config = Self {
            spreadsheet_id,
            read_range,
            report_header,
            report_indices: report_indices.into_values(),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resolved {config:?}.");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(tokens: &[&str]) -> (Result<ReportConfig, i32>, InMemoryInterface) {
        let interface = InMemoryInterface::default();
        let result = ReportConfig::parse_tokens_with("column-report", tokens, &interface);
        (result, interface)
    }

    #[test]
    fn defaults() {
        let (result, interface) = parse(&[]);

        assert_eq!(result, Ok(ReportConfig::default()));
        assert_eq!(interface.consume(), (None, None, None));

        let config = ReportConfig::default();
        assert_eq!(config.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
        assert_eq!(config.read_range, "Class Data!A2:E");
        assert_eq!(config.report_header, "Name, Major");
        assert_eq!(config.report_indices, vec![0, 4]);
    }

    #[test]
    fn all_flags() {
        let (result, _) = parse(&[
            "--spreadsheet-id",
            "abc",
            "--read-range=Sheet1!A1:C",
            "--report-header",
            "Name",
            "--report-indices",
            "2,0",
        ]);

        assert_eq!(
            result,
            Ok(ReportConfig {
                spreadsheet_id: "abc".to_string(),
                read_range: "Sheet1!A1:C".to_string(),
                report_header: "Name".to_string(),
                report_indices: vec![2, 0],
            })
        );
    }

    #[rstest]
    #[case(vec!["--report-indices", "1"], vec![1])]
    #[case(vec!["--report-indices", "9,8,7", "--report-indices", "6,5,4"], vec![9, 8, 7, 6, 5, 4])]
    #[case(vec!["--report-indices", "0x1,01,1"], vec![1, 1, 1])]
    #[case(vec!["-report-indices=3"], vec![3])]
    fn report_indices(#[case] tokens: Vec<&str>, #[case] expected: Vec<u32>) {
        let (result, _) = parse(&tokens);
        assert_eq!(result.unwrap().report_indices, expected);
    }

    #[rstest]
    #[case(vec!["--report-indices", ""])]
    #[case(vec!["--report-indices", "-1"])]
    #[case(vec!["--report-indices", "potato"])]
    #[case(vec!["--report-indices", "4294967296"])]
    #[case(vec!["--report-indices", "1,,2"])]
    #[case(vec!["--report-indices"])]
    #[case(vec!["--columns", "1"])]
    #[case(vec!["1"])]
    fn invalid(#[case] tokens: Vec<&str>) {
        let (result, interface) = parse(&tokens);

        assert_eq!(result, Err(1));
        let (error, _) = interface.consume_error();
        assert_contains!(error, "Parse error: ");
    }

    #[test]
    fn invalid_reports_token() {
        let (result, interface) = parse(&["--report-indices", "0,potato"]);

        assert_eq!(result, Err(1));
        let (error, context) = interface.consume_error();
        assert_contains!(error, "'potato'");
        assert_eq!(context, "--report-indices 0,potato\n                 ^");
    }

    #[test]
    fn help() {
        let (result, interface) = parse(&["-h"]);

        assert_eq!(result, Err(0));
        let message = interface.consume_message();
        assert_contains!(message, "usage: column-report [-h] [--config CONFIG] [--read-range READ_RANGE] [--report-header REPORT_HEADER] [--report-indices REPORT_INDICES] [--spreadsheet-id SPREADSHEET_ID]");
        assert_contains!(message, "(default: Class Data!A2:E)");
        assert_contains!(message, "Heading to print before data. (default: Name, Major)");
    }

    #[test]
    fn settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[report]\nreport-header = \"Name, Home State\"\nreport-indices = 0,2\nread-range = Other!A2:F\n"
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let (result, _) = parse(&["--config", path, "--read-range", "Mine!A1:B"]);

        let config = result.unwrap();
        assert_eq!(config.report_header, "Name, Home State");
        assert_eq!(config.report_indices, vec![0, 2]);
        assert_eq!(config.read_range, "Mine!A1:B");
        assert_eq!(config.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
    }

    #[test]
    fn settings_file_trailing_comment() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "report-indices = 0,2 # name and state").unwrap();
        let path = file.path().to_str().unwrap();

        let (result, interface) = parse(&["--config", path]);

        assert_eq!(result.map(|config| config.report_indices), Ok(vec![0, 2]));
        assert_eq!(interface.consume(), (None, None, None));
    }

    #[test]
    fn settings_file_yields_to_cli_indices() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "report-indices = 7").unwrap();
        let path = file.path().to_str().unwrap();

        let (result, _) = parse(&["--report-indices", "1", "--config", path, "--report-indices", "2"]);

        assert_eq!(result.unwrap().report_indices, vec![1, 2]);
    }
}
