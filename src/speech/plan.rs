//! Utterances and narration plans.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_PLAN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique plan identity. Completions carry it so late events
/// from a replaced plan can be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanId(u64);

impl PlanId {
    fn next() -> Self {
        Self(NEXT_PLAN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One unit of synthesized speech with its voice parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, locale: &str) -> Self {
        Self {
            text: text.into(),
            locale: locale.to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// How a plan's steps are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Step n+1 starts only when step n reports completion.
    Sequential,
    /// Every step is scheduled at its own offset from plan start,
    /// regardless of whether earlier steps finished.
    Delayed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    pub utterance: Utterance,
    /// Offset from plan start; only meaningful in delayed mode.
    pub offset: Duration,
}

/// An ordered announcement for one screen visit. Owned by the screen
/// that built it; dies with that screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationPlan {
    id: PlanId,
    mode: PlanMode,
    start_delay: Duration,
    steps: Vec<PlanStep>,
    duck_audio: bool,
}

impl NarrationPlan {
    pub fn empty() -> Self {
        Self::sequential(Vec::new())
    }

    pub fn sequential(utterances: Vec<Utterance>) -> Self {
        Self {
            id: PlanId::next(),
            mode: PlanMode::Sequential,
            start_delay: Duration::ZERO,
            steps: utterances
                .into_iter()
                .map(|utterance| PlanStep {
                    utterance,
                    offset: Duration::ZERO,
                })
                .collect(),
            duck_audio: false,
        }
    }

    pub fn delayed(steps: Vec<(Duration, Utterance)>) -> Self {
        Self {
            id: PlanId::next(),
            mode: PlanMode::Delayed,
            start_delay: Duration::ZERO,
            steps: steps
                .into_iter()
                .map(|(offset, utterance)| PlanStep { utterance, offset })
                .collect(),
            duck_audio: false,
        }
    }

    /// Settle delay before the first sequential step; lets the screen
    /// transition land before the narration starts.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Duck the ambient audio channel while this plan is speaking.
    pub fn with_audio_duck(mut self) -> Self {
        self.duck_audio = true;
        self
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn ducks_audio(&self) -> bool {
        self.duck_audio
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn utterance(&self, step: usize) -> Option<&Utterance> {
        self.steps.get(step).map(|s| &s.utterance)
    }
}
