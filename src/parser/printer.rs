use crate::constant::*;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How a single flag is documented in the help message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionParameter {
    name: String,
    help: Option<String>,
    default: String,
}

impl OptionParameter {
    pub(crate) fn new(name: impl Into<String>, help: Option<String>, default: String) -> Self {
        Self {
            name: name.into(),
            help,
            default,
        }
    }

    fn meta(&self) -> String {
        self.name.to_ascii_uppercase().replace('-', "_")
    }
}

pub(crate) struct Printer {
    about: Option<String>,
    options: Vec<OptionParameter>,
    settings: bool,
}

// Used when the terminal width cannot be determined.
const DEFAULT_TOTAL_WIDTH: usize = 100;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, Vec::default(), false)
    }

    pub(crate) fn new(
        about: Option<String>,
        mut options: Vec<OptionParameter>,
        settings: bool,
    ) -> Self {
        options.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            about,
            options,
            settings,
        }
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let mut summary = vec![format!("[-{HELP_SHORT}]")];
        let mut rows = vec![(
            format!("-{HELP_SHORT}, --{HELP_NAME}"),
            HELP_MESSAGE.to_string(),
        )];

        if self.settings {
            let meta = SETTINGS_NAME.to_ascii_uppercase();
            summary.push(format!("[--{SETTINGS_NAME} {meta}]"));
            rows.push((
                format!("--{SETTINGS_NAME} {meta}"),
                SETTINGS_MESSAGE.to_string(),
            ));
        }

        for option in &self.options {
            let flag = format!("--{} {}", option.name, option.meta());
            summary.push(format!("[{flag}]"));
            let mut description = option.help.clone().unwrap_or_default();

            if !option.default.is_empty() {
                if !description.is_empty() {
                    description.push(' ');
                }

                description.push_str(&format!("(default: {})", option.default));
            }

            rows.push((flag, description));
        }

        let total_width = user_interface
            .terminal_width()
            .unwrap_or(DEFAULT_TOTAL_WIDTH);
        let left_width = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let non_middle = MAIN_INDENT + left_width + PADDING_WIDTH;
        let middle_width = std::cmp::max(
            total_width.saturating_sub(non_middle),
            MINIMUM_MIDDLE_WIDTH,
        );

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help columns: left {left_width}, middle {middle_width} (total {total_width}).");
        }

        user_interface.print(format!("usage: {} {}", program.into(), summary.join(" ")));

        if let Some(about) = &self.about {
            for line in wrap(about, std::cmp::max(total_width, MINIMUM_MIDDLE_WIDTH)) {
                user_interface.print(line);
            }
        }

        user_interface.print(String::default());
        user_interface.print("options:".to_string());
        let padding = format!("{:PADDING_WIDTH$}", "");

        for (left, middle) in rows {
            let parts = wrap(&middle, middle_width);

            if parts.is_empty() {
                user_interface.print(format!("{:MAIN_INDENT$}{left}", ""));
            }

            for (i, part) in parts.iter().enumerate() {
                let left = if i == 0 { left.as_str() } else { "" };
                user_interface.print(format!(
                    "{:MAIN_INDENT$}{left:left_width$}{padding}{part}",
                    ""
                ));
            }
        }
    }
}

/// Break a paragraph into lines of at most `width` characters.
/// Words longer than the width are hyphenated.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    assert!(width >= 2, "internal error - cannot wrap below 2 columns");
    let mut lines = Vec::default();
    let mut current = String::default();
    let mut current_width = 0;

    for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
        let word_width = word.chars().count();

        if current.is_empty() {
            current_width = hyphenate(width, &mut lines, &mut current, word);
        } else if current_width + word_width + 1 <= width {
            current.push(' ');
            current.push_str(word);
            current_width += word_width + 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current_width = hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) -> usize {
    let mut chars: Vec<char> = word.chars().collect();

    while chars.len() > width {
        let rest = chars.split_off(width - 1);
        lines.push(format!("{}-", chars.iter().collect::<String>()));
        chars = rest;
    }

    current.extend(chars.iter());
    chars.len()
}

/// The tokens of a failed parse, with a caret under the offending one.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position: usize = self
            .tokens
            .iter()
            .take(self.offset)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{}\n{:position$}^", self.tokens.join(" "), "")
    }
}
