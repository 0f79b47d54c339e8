use std::fs;
use thiserror::Error;

use crate::api::InvalidUpdate;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("cannot read settings file '{path}': {source}.")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed line {line} in settings file '{path}' (expected 'name = value'): '{text}'.")]
    Malformed {
        path: String,
        line: usize,
        text: String,
    },

    #[error("unknown flag '{name}' on line {line} of settings file '{path}'.")]
    UnknownFlag {
        path: String,
        line: usize,
        name: String,
    },

    #[error("invalid value on line {line} of settings file '{path}': {source}")]
    InvalidValue {
        path: String,
        line: usize,
        source: InvalidUpdate,
    },
}

/// A `name = value` line from a settings file.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Setting {
    pub(crate) line: usize,
    pub(crate) name: String,
    pub(crate) value: String,
}

pub(crate) fn read_settings(path: &str) -> Result<Vec<Setting>, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_settings(path, &content)
}

/// Parse ini style settings.
/// Blank lines, `#`/`;` comments and `[section]` headers are skipped.
pub(crate) fn parse_settings(path: &str, content: &str) -> Result<Vec<Setting>, SettingsError> {
    let mut settings = Vec::default();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let text = raw.trim();

        if text.is_empty()
            || is_comment(text)
            || (text.starts_with('[') && text.ends_with(']'))
        {
            continue;
        }

        let (name, value) = match text.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => (name.trim(), value.trim()),
            _ => {
                return Err(SettingsError::Malformed {
                    path: path.to_string(),
                    line,
                    text: text.to_string(),
                });
            }
        };

        settings.push(Setting {
            line,
            name: name.to_string(),
            value: unquote(value).to_string(),
        });
    }

    Ok(settings)
}

// A quoted value keeps everything between its quotes.
// Otherwise, a trailing `#`/`;` comment (preceded by whitespace) is dropped.
fn unquote(value: &str) -> &str {
    if let Some(rest) = value.strip_prefix('"') {
        if let Some(end) = rest.find('"') {
            let tail = rest[end + 1..].trim_start();

            if tail.is_empty() || is_comment(tail) {
                return &rest[..end];
            }
        }
    }

    let end = value
        .char_indices()
        .find(|(i, c)| (*c == '#' || *c == ';') && value[..*i].ends_with(char::is_whitespace))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].trim_end()
}

fn is_comment(text: &str) -> bool {
    text.starts_with('#') || text.starts_with(';')
}
