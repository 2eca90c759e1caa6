//! Persisted user preferences.
//!
//! A small string key-value store kept in a TOML file under the user
//! config dir. Narration is entirely driven by it: screens read a
//! [`NarrationPrefs`] snapshot on entry and build their announcement
//! plans from it. A store failure is never surfaced to the user; the
//! caller falls back to defaults and narration is simply absent.

mod store;
mod types;

pub use store::{PrefStore, PrefsError};
pub use types::{keys, NarrationPrefs, SettingsSnapshot, DEFAULT_FONT_SIZE};
