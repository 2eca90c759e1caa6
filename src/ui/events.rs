//! The single event stream feeding the UI loop.

use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::api::{Address, BurialEntry, DeceasedFields};
use crate::prefs::{NarrationPrefs, SettingsSnapshot};
use crate::speech::SpeechEvent;
use crate::ui::nav::ScreenId;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// Speech engine completion, fed into the sequencer.
    Speech(SpeechEvent),
    /// Narration preferences read on screen entry. `stored_site` is
    /// only populated for the detail screen.
    PrefsLoaded {
        screen: ScreenId,
        prefs: NarrationPrefs,
        stored_site: Option<String>,
    },
    SearchFinished {
        result: Result<Vec<DeceasedFields>, String>,
    },
    DetailLoaded {
        id: String,
        result: Result<DeceasedFields, String>,
    },
    VisitCounted {
        id: String,
        count: u64,
    },
    BurialsLoaded {
        result: Result<Vec<BurialEntry>, String>,
    },
    /// Ambient track bytes arrived for the detail screen.
    AmbientReady {
        bytes: Vec<u8>,
    },
    /// viacep answer for the LGPD form; `None` covers both an unknown
    /// CEP and a transport failure.
    AddressResolved {
        result: Option<Address>,
    },
    ConsentSaved {
        result: Result<String, String>,
    },
    SettingsLoaded {
        snapshot: SettingsSnapshot,
    },
}

/// Reads terminal input on a dedicated thread and forwards it into the
/// async loop, with a coarse tick driving transient status expiry.
pub fn spawn_input_thread(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    thread::spawn(move || loop {
        match crossterm::event::poll(tick_rate) {
            Ok(true) => match crossterm::event::read() {
                Ok(Event::Key(key)) => {
                    // Release/repeat events would double keystrokes.
                    if key.kind == KeyEventKind::Press && tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("terminal input error: {}", err);
                    break;
                }
            },
            Ok(false) => {
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!("terminal poll error: {}", err);
                break;
            }
        }
    });
}
