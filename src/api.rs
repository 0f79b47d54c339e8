mod capture;
mod core;
mod flag;
mod text;
mod uint;
mod uint_list;

pub use self::core::*;
pub use capture::*;
pub use flag::*;
pub use uint::*;
pub use uint_list::*;
