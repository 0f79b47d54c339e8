use terminal_size::{terminal_size, Width};

use crate::parser::ErrorContext;

pub(crate) trait UserInterface {
    /// The width available for the help message, if known.
    fn terminal_width(&self) -> Option<usize>;
    fn print(&self, message: String);
    fn print_error(&self, error: &dyn std::error::Error);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn terminal_width(&self) -> Option<usize> {
        if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        }
    }

    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &dyn std::error::Error) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

impl<T: UserInterface + ?Sized> UserInterface for &T {
    fn terminal_width(&self) -> Option<usize> {
        (**self).terminal_width()
    }

    fn print(&self, message: String) {
        (**self).print(message);
    }

    fn print_error(&self, error: &dyn std::error::Error) {
        (**self).print_error(error);
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        (**self).print_error_context(error_context);
    }
}
