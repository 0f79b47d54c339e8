use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::constant::*;
use crate::parser::settings::{read_settings, SettingsError};
use crate::prelude::FlagValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn ..) here in order to put all the flag targets of varying types under one collection.
pub(crate) type FlagCapture<'a> = (String, &'a mut (dyn FlagValue + 'a));

/// An invalid flag parser configuration.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub(crate) struct ParseError(pub(crate) String);

impl From<SettingsError> for ParseError {
    fn from(error: SettingsError) -> Self {
        ParseError(error.to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Continue,
    PrintHelp,
}

/// A single flag occurrence on the command line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Occurrence {
    pub(crate) name: String,
    pub(crate) offset: usize,
    pub(crate) value: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Matches {
    pub(crate) occurrences: Vec<Occurrence>,
    pub(crate) settings: Option<(usize, String)>,
    pub(crate) help: bool,
}

pub(crate) struct Parser<'a> {
    captures: HashMap<String, &'a mut (dyn FlagValue + 'a)>,
    settings: bool,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

pub(crate) fn validate_name(name: &str, settings: bool) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError("Flag names must not be empty.".to_string()));
    }

    if name.starts_with('-') || name.contains('=') || name.contains(char::is_whitespace) {
        return Err(ConfigError(format!(
            "Flag name '{name}' must not start with '-', or contain '=' or whitespace."
        )));
    }

    if name == HELP_NAME || name == HELP_SHORT.to_string() || (settings && name == SETTINGS_NAME) {
        return Err(ConfigError(format!("Flag name '{name}' is reserved.")));
    }

    Ok(())
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), false).unwrap()
    }

    pub(crate) fn new(flags: Vec<FlagCapture<'a>>, settings: bool) -> Result<Self, ConfigError> {
        let mut captures: HashMap<String, &'a mut (dyn FlagValue + 'a)> = HashMap::default();

        for (name, target) in flags.into_iter() {
            validate_name(&name, settings)?;

            if captures.insert(name.clone(), target).is_some() {
                return Err(ConfigError(format!("Cannot duplicate the flag '{name}'.")));
            }
        }

        Ok(Self { captures, settings })
    }

    /// Align the tokens to flags, without touching any flag values.
    pub(crate) fn matches(&self, tokens: &[&str]) -> Result<Matches, (usize, ParseError)> {
        let mut matches = Matches::default();
        let mut offset = 0;

        while offset < tokens.len() {
            let token = tokens[offset];
            let body = match token.strip_prefix("--").or_else(|| token.strip_prefix('-')) {
                Some(body) if !body.is_empty() => body,
                _ => {
                    return Err((
                        offset,
                        ParseError(format!("Unexpected positional token '{token}'.")),
                    ));
                }
            };
            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };

            if inline.is_none() && (name == HELP_NAME || name == HELP_SHORT.to_string()) {
                matches.help = true;
                return Ok(matches);
            }

            let is_settings = self.settings && name == SETTINGS_NAME;

            if !is_settings && !self.captures.contains_key(name) {
                return Err((offset, ParseError(format!("Unknown flag '{token}'."))));
            }

            let (value_offset, value) = match inline {
                Some(value) => (offset, value.to_string()),
                None => match tokens.get(offset + 1) {
                    Some(value) => (offset + 1, value.to_string()),
                    None => {
                        return Err((
                            offset,
                            ParseError(format!("Flag '{name}' requires a value.")),
                        ));
                    }
                },
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched flag '{name}' to '{value}' (offset {value_offset}).");
            }

            if is_settings {
                matches.settings.replace((value_offset, value));
            } else {
                matches.occurrences.push(Occurrence {
                    name: name.to_string(),
                    offset: value_offset,
                    value,
                });
            }

            offset = value_offset + 1;
        }

        Ok(matches)
    }

    /// Run the matching phase, then apply the settings file, then capture into the flag values.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let Matches {
            occurrences,
            settings,
            help,
        } = self.matches(tokens)?;

        if help {
            return Ok(Action::PrintHelp);
        }

        if let Some((offset, path)) = settings {
            let explicit: HashSet<&str> = occurrences.iter().map(|o| o.name.as_str()).collect();
            self.apply_settings(&path, &explicit)
                .map_err(|error| (offset, ParseError::from(error)))?;
        }

        for Occurrence {
            name,
            offset,
            value,
        } in occurrences
        {
            let target = self.captures.get_mut(&name).unwrap_or_else(|| {
                unreachable!("internal error - matched flag '{name}' must have a capture")
            });
            target
                .update(&value)
                .map_err(|error| (offset, ParseError(format!("Flag '{name}' {error}"))))?;
        }

        Ok(Action::Continue)
    }

    fn apply_settings(
        &mut self,
        path: &str,
        explicit: &HashSet<&str>,
    ) -> Result<(), SettingsError> {
        for setting in read_settings(path)? {
            if explicit.contains(setting.name.as_str()) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping setting '{}', given on the command line.", setting.name);
                }

                continue;
            }

            let target = self.captures.get_mut(&setting.name).ok_or_else(|| {
                SettingsError::UnknownFlag {
                    path: path.to_string(),
                    line: setting.line,
                    name: setting.name.clone(),
                }
            })?;
            target
                .update(&setting.value)
                .map_err(|source| SettingsError::InvalidValue {
                    path: path.to_string(),
                    line: setting.line,
                    source,
                })?;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test::Recorder;
    use super::*;
    use crate::api::UintList;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn flag<'a>(name: &str, target: &'a mut (dyn FlagValue + 'a)) -> FlagCapture<'a> {
        (name.to_string(), target)
    }

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parser_empty() {
        let parser = Parser::empty();
        assert_eq!(parser.consume(&[]), Ok(Action::Continue));
    }

    #[test]
    fn parser_duplicate_flag() {
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        let result = Parser::new(vec![flag("flag", &mut a), flag("flag", &mut b)], false);
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[rstest]
    #[case("", false)]
    #[case("-flag", false)]
    #[case("a=b", false)]
    #[case("a b", false)]
    #[case("help", false)]
    #[case("h", false)]
    #[case("config", true)]
    fn parser_invalid_name(#[case] name: &str, #[case] settings: bool) {
        let mut a = Recorder::default();
        let result = Parser::new(vec![flag(name, &mut a)], settings);
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn parser_config_name_without_settings() {
        let mut a = Recorder::default();
        let result = Parser::new(vec![flag("config", &mut a)], false);
        assert_matches!(result, Ok(_));
    }

    #[rstest]
    #[case(vec!["--flag", "1"])]
    #[case(vec!["--flag=1"])]
    #[case(vec!["-flag", "1"])]
    #[case(vec!["-flag=1"])]
    fn match_shapes(#[case] tokens: Vec<&str>) {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], false).unwrap();

        let matches = parser.matches(&tokens).unwrap();

        assert_eq!(
            matches.occurrences,
            vec![Occurrence {
                name: "flag".to_string(),
                offset: tokens.len() - 1,
                value: "1".to_string(),
            }]
        );
        assert!(!matches.help);
        assert_eq!(matches.settings, None);
    }

    #[test]
    fn match_value_looks_like_flag() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], false).unwrap();

        let matches = parser.matches(&["--flag", "-1"]).unwrap();

        assert_eq!(matches.occurrences[0].value, "-1");
    }

    #[test]
    fn match_inline_empty() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], false).unwrap();

        let matches = parser.matches(&["--flag="]).unwrap();

        assert_eq!(matches.occurrences[0].value, "");
    }

    #[test]
    fn match_settings() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], true).unwrap();

        let matches = parser.matches(&["--flag", "1", "--config", "a.ini"]).unwrap();

        assert_eq!(matches.occurrences.len(), 1);
        assert_eq!(matches.settings, Some((3, "a.ini".to_string())));
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["-h"])]
    #[case(vec!["--flag", "1", "-h", "--unknown"])]
    fn match_help(#[case] tokens: Vec<&str>) {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], false).unwrap();

        let matches = parser.matches(&tokens).unwrap();

        assert!(matches.help);
    }

    #[rstest]
    #[case(vec!["positional"], 0)]
    #[case(vec!["-"], 0)]
    #[case(vec!["--"], 0)]
    #[case(vec!["--flag", "1", "--unknown", "2"], 2)]
    #[case(vec!["--flag"], 0)]
    #[case(vec!["--flag", "1", "--flag"], 2)]
    #[case(vec!["--flag", "1", "2"], 2)]
    #[case(vec!["--config", "settings.ini"], 0)]
    fn match_invalid(#[case] tokens: Vec<&str>, #[case] expected_offset: usize) {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("flag", &mut a)], false).unwrap();

        let (offset, _) = parser.matches(&tokens).unwrap_err();

        assert_eq!(offset, expected_offset);
    }

    #[test]
    fn consume_in_order() {
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a), flag("b", &mut b)], false).unwrap();

        let result = parser.consume(&["--a", "1", "--b=2", "--a", "3"]);

        assert_eq!(result, Ok(Action::Continue));
        assert_eq!(a.updates, vec!["1", "3"]);
        assert_eq!(b.updates, vec!["2"]);
    }

    #[test]
    fn consume_help_skips_capture() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a)], false).unwrap();

        let result = parser.consume(&["--a", "1", "--help"]);

        assert_eq!(result, Ok(Action::PrintHelp));
        assert!(a.updates.is_empty());
    }

    #[test]
    fn consume_match_error_skips_capture() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a)], false).unwrap();

        let result = parser.consume(&["--a", "1", "--b", "2"]);

        assert_matches!(result, Err((2, _)));
        assert!(a.updates.is_empty());
    }

    #[test]
    fn consume_invalid_value() {
        let mut indices = UintList::new([0, 4]);
        let parser = Parser::new(vec![flag("indices", &mut indices)], false).unwrap();

        let result = parser.consume(&["--indices", "1,2", "--indices", "3,potato"]);

        let (offset, ParseError(message)) = result.unwrap_err();
        assert_eq!(offset, 3);
        assert_eq!(
            message,
            "Flag 'indices' cannot convert 'potato' to an unsigned 32-bit integer: invalid digit found in string."
        );
        assert_eq!(indices.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn consume_settings() {
        let file = settings_file("# comment\na = 1\nb = 2\n");
        let path = file.path().to_str().unwrap();
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a), flag("b", &mut b)], true).unwrap();

        let result = parser.consume(&["--config", path, "--b", "3"]);

        assert_eq!(result, Ok(Action::Continue));
        assert_eq!(a.updates, vec!["1"]);
        // The command line takes precedence over the settings file.
        assert_eq!(b.updates, vec!["3"]);
    }

    #[test]
    fn consume_settings_unknown_flag() {
        let file = settings_file("c = 1\n");
        let path = file.path().to_str().unwrap();
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a)], true).unwrap();

        let result = parser.consume(&["--a", "0", "--config", path]);

        let (offset, ParseError(message)) = result.unwrap_err();
        assert_eq!(offset, 3);
        assert!(message.contains("unknown flag 'c' on line 1"), "{message}");
        assert!(a.updates.is_empty());
    }

    #[test]
    fn consume_settings_invalid_value() {
        let file = settings_file("\nindices = 1,-1\n");
        let token = format!("--config={}", file.path().to_str().unwrap());
        let mut indices = UintList::new([0, 4]);
        let parser = Parser::new(vec![flag("indices", &mut indices)], true).unwrap();

        let result = parser.consume(&[token.as_str()]);

        let (offset, ParseError(message)) = result.unwrap_err();
        assert_eq!(offset, 0);
        assert!(message.contains("line 2"), "{message}");
        assert_eq!(indices.snapshot(), vec![1]);
    }

    #[test]
    fn consume_settings_missing_file() {
        let mut a = Recorder::default();
        let parser = Parser::new(vec![flag("a", &mut a)], true).unwrap();

        let result = parser.consume(&["--config", "/definitely/not/a/settings.ini"]);

        assert_matches!(result, Err((1, _)));
    }
}
