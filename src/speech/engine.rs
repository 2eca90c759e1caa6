//! The synthesizer seam.
//!
//! Engines are fire-and-forget: `speak` returns immediately and the
//! completion comes back as a [`SpeechEvent`] on the channel the engine
//! was built with. `stop` is idempotent and safe while idle. An engine
//! failure is logged and swallowed; the utterance is reported done so a
//! sequential plan keeps moving instead of stalling.

use std::process::Stdio;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use crate::speech::plan::{PlanId, Utterance};

/// Identity of one spoken step, carried through the engine and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId {
    pub plan: PlanId,
    pub step: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    Done(UtteranceId),
}

pub trait SpeechEngine: Send + Sync {
    /// Start synthesizing; must not block. Completion is reported on
    /// the engine's event channel unless `stop` intervened first.
    fn speak(&self, id: UtteranceId, utterance: &Utterance);

    /// Silence everything in flight. Safe at any time, including idle.
    /// Stopped utterances report no completion.
    fn stop(&self);
}

/// `espeak-ng` child-process backend, one process per utterance.
///
/// Stops are broadcast through a watch channel; every in-flight speak
/// task races its child against the stop signal and kills the child
/// when the signal wins.
pub struct EspeakEngine {
    program: String,
    events: mpsc::UnboundedSender<SpeechEvent>,
    stop_tx: watch::Sender<u64>,
}

/// espeak-ng's default speaking rate, scaled by the utterance rate.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;
/// espeak-ng's neutral pitch on its 0-99 scale.
const BASE_PITCH: f32 = 50.0;

impl EspeakEngine {
    pub fn new(program: impl Into<String>, events: mpsc::UnboundedSender<SpeechEvent>) -> Self {
        let (stop_tx, _) = watch::channel(0u64);
        Self {
            program: program.into(),
            events,
            stop_tx,
        }
    }
}

impl SpeechEngine for EspeakEngine {
    fn speak(&self, id: UtteranceId, utterance: &Utterance) {
        let program = self.program.clone();
        let events = self.events.clone();
        let mut stop_rx = self.stop_tx.subscribe();
        let utterance = utterance.clone();

        tokio::spawn(async move {
            let voice = utterance.locale.to_lowercase();
            let wpm = (BASE_WORDS_PER_MINUTE * utterance.rate).round().max(80.0) as i64;
            let pitch = (BASE_PITCH * utterance.pitch).round().clamp(0.0, 99.0) as i64;

            let spawned = tokio::process::Command::new(&program)
                .arg("-v")
                .arg(&voice)
                .arg("-s")
                .arg(wpm.to_string())
                .arg("-p")
                .arg(pitch.to_string())
                .arg("--")
                .arg(&utterance.text)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(err) => {
                    tracing::warn!("speech engine '{}' unavailable: {}", program, err);
                    let _ = events.send(SpeechEvent::Done(id));
                    return;
                }
            };

            let finished = tokio::select! {
                _ = stop_rx.changed() => None,
                status = child.wait() => Some(status),
            };
            match finished {
                // Stopped: kill the synthesis, report no completion.
                None => {
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                }
                Some(status) => {
                    if let Err(err) = status {
                        tracing::warn!("speech process failed: {}", err);
                    }
                    let _ = events.send(SpeechEvent::Done(id));
                }
            }
        });
    }

    fn stop(&self) {
        self.stop_tx.send_modify(|generation| *generation += 1);
    }
}

/// Backend for running without narration: completes every utterance
/// immediately so plans still drive to their end state.
pub struct NullEngine {
    events: mpsc::UnboundedSender<SpeechEvent>,
}

impl NullEngine {
    pub fn new(events: mpsc::UnboundedSender<SpeechEvent>) -> Self {
        Self { events }
    }
}

impl SpeechEngine for NullEngine {
    fn speak(&self, id: UtteranceId, _utterance: &Utterance) {
        let _ = self.events.send(SpeechEvent::Done(id));
    }

    fn stop(&self) {}
}

/// What a [`RecordingEngine`] saw, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Stop,
    Speak { id: UtteranceId, text: String },
}

/// Test double: records every call; optionally completes utterances on
/// the spot so sequential plans run through without a real backend.
#[derive(Clone)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    events: mpsc::UnboundedSender<SpeechEvent>,
    auto_complete: bool,
}

impl RecordingEngine {
    pub fn new(events: mpsc::UnboundedSender<SpeechEvent>, auto_complete: bool) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            events,
            auto_complete,
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    pub fn spoken_texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                EngineCall::Speak { text, .. } => Some(text.clone()),
                EngineCall::Stop => None,
            })
            .collect()
    }
}

impl SpeechEngine for RecordingEngine {
    fn speak(&self, id: UtteranceId, utterance: &Utterance) {
        self.calls.lock().push(EngineCall::Speak {
            id,
            text: utterance.text.clone(),
        });
        if self.auto_complete {
            let _ = self.events.send(SpeechEvent::Done(id));
        }
    }

    fn stop(&self) {
        self.calls.lock().push(EngineCall::Stop);
    }
}
