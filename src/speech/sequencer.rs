//! Drives one narration plan at a time through the speech engine.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::speech::engine::{SpeechEngine, UtteranceId};
use crate::speech::plan::{NarrationPlan, PlanId, PlanMode};

/// Ambient-audio volume while a ducking plan is speaking.
pub const DUCKED_VOLUME: f32 = 0.2;
pub const FULL_VOLUME: f32 = 1.0;

/// The one thing the sequencer needs from the background audio: its
/// volume. The detail screen hands its channel over for the duration of
/// the biography plan.
pub trait AmbientChannel: Send + Sync {
    fn set_volume(&self, volume: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Speaking { step: usize },
    Done,
    Canceled,
}

/// Exclusive driver of the speech engine.
///
/// Starting a plan always stops whatever was in flight first, so at
/// most one plan ever speaks. Cancellation aborts the retained timer
/// handles, silences the engine, and restores any ducked audio; a
/// canceled plan produces nothing further.
pub struct Sequencer {
    engine: Arc<dyn SpeechEngine>,
    state: SequencerState,
    plan: Option<NarrationPlan>,
    timers: Vec<JoinHandle<()>>,
    audio: Option<Arc<dyn AmbientChannel>>,
}

impl Sequencer {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            state: SequencerState::Idle,
            plan: None,
            timers: Vec::new(),
            audio: None,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn current_plan(&self) -> Option<PlanId> {
        self.plan.as_ref().map(|p| p.id())
    }

    /// Starts a plan. Any previous plan is canceled first — exactly one
    /// engine stop precedes the new plan's first speak. An empty plan
    /// leaves the sequencer idle and reports no id.
    pub fn run(
        &mut self,
        plan: NarrationPlan,
        audio: Option<Arc<dyn AmbientChannel>>,
    ) -> Option<PlanId> {
        self.cancel();

        if plan.is_empty() {
            return None;
        }

        if plan.ducks_audio() {
            if let Some(channel) = audio {
                channel.set_volume(DUCKED_VOLUME);
                self.audio = Some(channel);
            }
        }

        let id = plan.id();
        match plan.mode() {
            PlanMode::Sequential => {
                let first = UtteranceId { plan: id, step: 0 };
                let utterance = plan.utterance(0).expect("non-empty plan").clone();
                if plan.start_delay().is_zero() {
                    self.engine.speak(first, &utterance);
                } else {
                    let engine = Arc::clone(&self.engine);
                    let delay = plan.start_delay();
                    self.timers.push(tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        engine.speak(first, &utterance);
                    }));
                }
            }
            PlanMode::Delayed => {
                for (step, plan_step) in plan.steps().iter().enumerate() {
                    let engine = Arc::clone(&self.engine);
                    let utterance = plan_step.utterance.clone();
                    let offset = plan_step.offset;
                    let utterance_id = UtteranceId { plan: id, step };
                    self.timers.push(tokio::spawn(async move {
                        if !offset.is_zero() {
                            tokio::time::sleep(offset).await;
                        }
                        engine.speak(utterance_id, &utterance);
                    }));
                }
            }
        }

        self.state = SequencerState::Speaking { step: 0 };
        self.plan = Some(plan);
        Some(id)
    }

    /// Adopts an audio channel that appeared after the plan started.
    /// If the running plan ducks audio the channel is ducked now and
    /// restored with the plan; otherwise it is left alone.
    pub fn attach_audio(&mut self, channel: Arc<dyn AmbientChannel>) {
        let speaking_duck = matches!(self.state, SequencerState::Speaking { .. })
            && self.plan.as_ref().is_some_and(|p| p.ducks_audio());
        if speaking_duck {
            channel.set_volume(DUCKED_VOLUME);
            self.audio = Some(channel);
        }
    }

    /// Stops the engine, aborts every pending timer, and restores any
    /// ducked audio. A no-op beyond the idempotent engine stop when
    /// nothing is running.
    pub fn cancel(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        self.engine.stop();
        self.restore_audio();
        self.state = match self.state {
            SequencerState::Speaking { .. } => SequencerState::Canceled,
            _ => SequencerState::Idle,
        };
        self.plan = None;
    }

    /// Feeds an engine completion back in. Returns the plan id when
    /// this completion finished the whole plan, so the caller can run
    /// anything it deferred to the end of the narration.
    pub fn on_speech_done(&mut self, id: UtteranceId) -> Option<PlanId> {
        let plan = self.plan.as_ref()?;
        if id.plan != plan.id() {
            // Late completion from a replaced plan.
            return None;
        }

        match plan.mode() {
            PlanMode::Sequential => {
                let SequencerState::Speaking { step } = self.state else {
                    return None;
                };
                if id.step != step {
                    return None;
                }
                let next = step + 1;
                if let Some(utterance) = plan.utterance(next) {
                    let utterance = utterance.clone();
                    let next_id = UtteranceId {
                        plan: plan.id(),
                        step: next,
                    };
                    self.state = SequencerState::Speaking { step: next };
                    self.engine.speak(next_id, &utterance);
                    None
                } else {
                    self.finish()
                }
            }
            PlanMode::Delayed => {
                // Offset-scheduled steps are not ordered by completion;
                // the plan is over when its last step reports in.
                if id.step + 1 == plan.len() {
                    self.finish()
                } else {
                    None
                }
            }
        }
    }

    fn finish(&mut self) -> Option<PlanId> {
        let finished = self.plan.take().map(|p| p.id());
        self.state = SequencerState::Done;
        self.restore_audio();
        self.timers.clear();
        finished
    }

    fn restore_audio(&mut self) {
        if let Some(channel) = self.audio.take() {
            channel.set_volume(FULL_VOLUME);
        }
    }
}
