/// The lifecycle state of an accumulating flag value.
///
/// A value starts out `Fresh`, holding its constructor defaults.
/// The first update moves it to `Accumulating`, whether or not that update succeeds.
/// There is no way back to `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// Still holding the defaults supplied at construction.
    #[default]
    Fresh,
    /// Has received at least one update; further updates append.
    Accumulating,
}

impl ListState {
    /// Move to `Accumulating`.
    /// Returns `true` when this call performed the transition, meaning the defaults must be discarded.
    pub fn advance(&mut self) -> bool {
        match self {
            ListState::Fresh => {
                *self = ListState::Accumulating;
                true
            }
            ListState::Accumulating => false,
        }
    }
}

impl std::fmt::Display for ListState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
