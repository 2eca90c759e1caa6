//! Command-line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    /// espeak-ng child process (default).
    Espeak,
    /// No narration backend.
    Null,
}

#[derive(Debug, Parser)]
#[command(name = "eternum", about = "Terminal client for the Memorial Eternum lookup service")]
pub struct Cli {
    /// Base URL of the memorial web service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Speech backend for the narration.
    #[arg(long, value_enum, default_value_t = EngineChoice::Espeak)]
    pub engine: EngineChoice,

    /// Synthesizer binary to spawn for the espeak backend.
    #[arg(long, default_value = "espeak-ng")]
    pub espeak_program: String,

    /// Preference file override (defaults to the user config dir).
    #[arg(long)]
    pub prefs: Option<PathBuf>,
}
