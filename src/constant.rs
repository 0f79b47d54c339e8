pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
pub(crate) const SETTINGS_NAME: &str = "config";
pub(crate) const SETTINGS_MESSAGE: &str =
    "Read flag values from an ini style file of 'name = value' lines.  Flags given on the command line take precedence.";
