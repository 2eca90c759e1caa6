//! Terminal client for the Memorial Eternum lookup service.
//!
//! The service owns every piece of business logic — search, records,
//! visit counting. This crate is the presentation layer: screens over
//! the service's endpoints, preference-gated text-to-speech narration,
//! and the client-side validators of the LGPD consent form.

pub mod api;
pub mod audio;
pub mod cli;
pub mod forms;
pub mod opener;
pub mod prefs;
pub mod speech;
pub mod textfmt;
pub mod trace;
pub mod ui;
