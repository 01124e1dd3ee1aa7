//! Reusable catalog components.

mod card_item;
mod category_list;
mod readout;
mod search_input;

pub use card_item::*;
pub use category_list::*;
pub use readout::*;
pub use search_input::*;
