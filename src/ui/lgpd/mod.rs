//! LGPD consent form screen.

mod intent;
mod reducer;
mod state;

pub use intent::LgpdIntent;
pub use reducer::LgpdReducer;
pub use state::{LgpdField, LgpdState, LGPD_FIELDS};
