//! Narration: ordered, interruptible spoken announcements.
//!
//! The pieces, leaf first:
//! - [`plan`]: utterances and the two plan shapes (sequential and
//!   offset-scheduled).
//! - [`engine`]: the synthesizer seam. Engines are fire-and-forget and
//!   report completions over a channel; the shipped backend drives
//!   `espeak-ng` as a child process.
//! - [`script`]: pure text assembly — screen kind + display data +
//!   preferences in, plan out.
//! - [`sequencer`]: owns the engine handle, runs one plan at a time,
//!   cancels the previous one before starting, and ducks the ambient
//!   audio channel while a plan that asks for it is speaking.
//!
//! No failure in this subsystem may block navigation or data fetch;
//! everything here degrades to "narration absent".

pub mod engine;
pub mod plan;
pub mod script;
pub mod sequencer;

pub use engine::{EngineCall, EspeakEngine, NullEngine, RecordingEngine, SpeechEngine, SpeechEvent, UtteranceId};
pub use plan::{NarrationPlan, PlanId, PlanMode, PlanStep, Utterance};
pub use script::{
    build_plan, gender_forms, GenderForms, ScreenNarration, NO_RESULTS_DELAY, RESULT_INTERVAL,
    SEARCH_SETTLE_DELAY,
};
pub use sequencer::{AmbientChannel, Sequencer, SequencerState, DUCKED_VOLUME, FULL_VOLUME};
