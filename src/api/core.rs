use crate::api::flag::Flag;
use crate::parser::{
    ConfigError, ConsoleInterface, FlagCapture, GeneralParser, OptionParameter, Parser, Printer,
};

/// The base flag parser.
///
/// ### Example
/// ```
/// use column_report::FlagParser;
///
/// let parser = FlagParser::new("program")
///     // Configure with FlagParser::add.
///     .build()
///     .unwrap();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct FlagParser<'a> {
    program: String,
    about: Option<String>,
    settings: bool,
    option_parameters: Vec<OptionParameter>,
    captures: Vec<FlagCapture<'a>>,
}

impl<'a> FlagParser<'a> {
    /// Create a flag parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            settings: false,
            option_parameters: Vec::default(),
            captures: Vec::default(),
        }
    }

    /// Document the about message for this flag parser.
    /// If repeated, only the final about message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Accept `--config PATH`, naming an ini style settings file.
    ///
    /// Each `name = value` line of the file updates the flag `name`, unless that flag also appears on the command line.
    /// Blank lines, `#`/`;` comments and `[section]` headers are ignored.
    pub fn settings_file(mut self) -> Self {
        self.settings = true;
        self
    }

    /// Add a flag to the flag parser.
    ///
    /// The flag's current value is rendered now, and shown as its default in the help message.
    pub fn add(mut self, flag: Flag<'a>) -> Self {
        let (name, help, target) = flag.consume();
        self.option_parameters
            .push(OptionParameter::new(name.clone(), help, target.render()));
        self.captures.push((name, target));
        self
    }

    /// Build the flag parser.
    ///
    /// Fails when a flag name is empty, duplicated, reserved (`help`, `h`, and `config` under [`FlagParser::settings_file`]),
    /// or contains `=`/whitespace/a leading `-`.
    pub fn build(self) -> Result<GeneralParser<'a>, ConfigError> {
        let FlagParser {
            program,
            about,
            settings,
            option_parameters,
            captures,
        } = self;
        let parser = Parser::new(captures, settings)?;
        let printer = Printer::new(about, option_parameters, settings);

        Ok(GeneralParser::new(
            program,
            parser,
            printer,
            Box::new(ConsoleInterface::default()),
        ))
    }
}
