/// Keys in the preference file. Kept as plain strings so the store can
/// also stash screen-to-screen values (the burial-site handoff).
pub mod keys {
    /// Screen-reader mode: gates all automatic narration.
    pub const SCREEN_READER: &str = "modo_leitura";
    /// Announce menu names on the home screen.
    pub const SPEAK_MENUS: &str = "falar_menus";
    /// Burial site stashed by the detail screen for the lookup screen.
    pub const BURIAL_SITE: &str = "localsep";
    pub const FONT_SIZE: &str = "font_size";
    pub const NOTIFICATIONS: &str = "notifications_enabled";
    pub const AUDIO: &str = "audio_enabled";

    /// Keys cleared by "reset to defaults". The burial-site handoff is
    /// transient state, not a setting, and survives the reset.
    pub const RESETTABLE: &[&str] = &[
        NOTIFICATIONS,
        FONT_SIZE,
        SCREEN_READER,
        AUDIO,
        SPEAK_MENUS,
    ];
}

pub const DEFAULT_FONT_SIZE: u16 = 16;

/// What the narration layer needs to know, read once per screen entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationPrefs {
    pub screen_reader: bool,
    pub speak_menus: bool,
    pub locale: String,
}

impl Default for NarrationPrefs {
    fn default() -> Self {
        Self {
            screen_reader: false,
            speak_menus: false,
            locale: "pt-BR".to_string(),
        }
    }
}

/// Everything the settings screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSnapshot {
    pub notifications: bool,
    pub font_size: u16,
    pub screen_reader: bool,
    pub audio: bool,
    pub speak_menus: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            notifications: false,
            font_size: DEFAULT_FONT_SIZE,
            screen_reader: false,
            audio: true,
            speak_menus: false,
        }
    }
}
