//! Home screen: the main menu and the inline search section.

mod intent;
mod reducer;
mod state;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{HomeState, SearchFocus, MENU_ITEMS};
