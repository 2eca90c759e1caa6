//! Terminal setup and the event loop.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::api::MemorialClient;
use crate::prefs::PrefStore;
use crate::speech::{EspeakEngine, NullEngine, SpeechEngine};
use crate::ui::app::App;
use crate::ui::events::{spawn_input_thread, AppEvent};
use crate::ui::render::draw;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Which synthesizer backend to run.
pub enum EngineKind {
    Espeak { program: String },
    /// No narration; utterances complete immediately.
    Null,
}

/// Restores the terminal even when the loop errors out.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, TerminalGuard))
}

pub async fn run(
    client: MemorialClient,
    store: PrefStore,
    engine_kind: EngineKind,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    // Engine completions come in on their own channel and are folded
    // into the app stream.
    let (speech_tx, mut speech_rx) = mpsc::unbounded_channel();
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Some(event) = speech_rx.recv().await {
                if tx.send(AppEvent::Speech(event)).is_err() {
                    break;
                }
            }
        });
    }

    let engine: Arc<dyn SpeechEngine> = match engine_kind {
        EngineKind::Espeak { program } => Arc::new(EspeakEngine::new(program, speech_tx)),
        EngineKind::Null => Arc::new(NullEngine::new(speech_tx)),
    };

    let (mut terminal, guard) = setup_terminal()?;
    spawn_input_thread(tx.clone(), TICK_RATE);

    let mut app = App::new(engine, tx, client, store);
    app.start();

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &app))?;
        match rx.recv().await {
            Some(event) => app.on_event(event),
            None => break,
        }
        // Drain whatever queued up before paying for another draw.
        while let Ok(event) = rx.try_recv() {
            app.on_event(event);
            if app.should_quit() {
                break;
            }
        }
    }

    drop(guard);
    Ok(())
}
