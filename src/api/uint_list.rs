use crate::api::capture::InvalidUpdate;
use crate::api::uint::parse_uint;
use crate::model::ListState;
use crate::prelude::FlagValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An accumulating list of unsigned integers, updated from comma separated text.
///
/// The list starts out holding its defaults.
/// The first update discards the defaults (even if that update fails), and every update after that appends.
///
/// A failing update is not atomic: tokens parsed before the offending one stay appended.
///
/// ### Example
/// ```
/// use column_report::UintList;
///
/// let mut indices = UintList::new([0, 4]);
/// assert_eq!(indices.render(), "0,4");
///
/// indices.update("9,8,7").unwrap();
/// indices.update("6,5,4").unwrap();
/// assert_eq!(indices.snapshot(), vec![9, 8, 7, 6, 5, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UintList {
    values: Vec<u32>,
    state: ListState,
}

impl UintList {
    /// Create a list holding `defaults`.
    pub fn new(defaults: impl Into<Vec<u32>>) -> Self {
        Self {
            values: defaults.into(),
            state: ListState::Fresh,
        }
    }

    /// Render the values in base 10, joined by `,`.
    pub fn render(&self) -> String {
        self.values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Append the comma separated integers in `text`.
    ///
    /// Each token is parsed by [`parse_uint`], so `0x`, `0o`, `0b` and leading `0` prefixes select the base.
    /// Stops at the first token that fails to parse.
    pub fn update(&mut self, text: &str) -> Result<(), InvalidUpdate> {
        if self.state.advance() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Discarding defaults [{}].", self.render());
            }

            self.values.clear();
        }

        for token in text.split(',') {
            let value = parse_uint(token).map_err(|source| InvalidUpdate::InvalidUint {
                token: token.to_string(),
                source,
            })?;
            self.values.push(value);
        }

        Ok(())
    }

    /// An independent copy of the values.
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.clone()
    }

    /// Whether the list still holds its defaults.
    pub fn state(&self) -> ListState {
        self.state
    }

    /// Consume the list, yielding its values.
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}

impl From<Vec<u32>> for UintList {
    fn from(defaults: Vec<u32>) -> Self {
        Self::new(defaults)
    }
}

impl std::fmt::Display for UintList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FlagValue for UintList {
    fn render(&self) -> String {
        UintList::render(self)
    }

    fn update(&mut self, text: &str) -> Result<(), InvalidUpdate> {
        UintList::update(self, text)
    }
}
