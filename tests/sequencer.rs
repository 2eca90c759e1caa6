use std::sync::Arc;
use std::time::Duration;

use eternum::speech::{
    EngineCall, NarrationPlan, RecordingEngine, Sequencer, SequencerState, SpeechEvent,
    Utterance, UtteranceId,
};
use tokio::sync::mpsc;

fn utterance(text: &str) -> Utterance {
    Utterance::new(text, "pt-BR")
}

fn setup(auto_complete: bool) -> (Sequencer, RecordingEngine, mpsc::UnboundedReceiver<SpeechEvent>)
{
    let (tx, rx) = mpsc::unbounded_channel();
    let engine = RecordingEngine::new(tx, auto_complete);
    let sequencer = Sequencer::new(Arc::new(engine.clone()));
    (sequencer, engine, rx)
}

#[tokio::test]
async fn cancel_while_idle_is_a_noop() {
    let (mut sequencer, engine, _rx) = setup(false);
    sequencer.cancel();
    sequencer.cancel();
    assert_eq!(sequencer.state(), SequencerState::Idle);
    assert!(engine.spoken_texts().is_empty());
}

#[tokio::test]
async fn run_stops_exactly_once_before_speaking() {
    let (mut sequencer, engine, _rx) = setup(false);
    let plan = NarrationPlan::sequential(vec![utterance("olá")]);
    sequencer.run(plan, None);

    let calls = engine.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], EngineCall::Stop);
    assert!(matches!(&calls[1], EngineCall::Speak { text, .. } if text == "olá"));
}

#[tokio::test]
async fn empty_plan_leaves_the_sequencer_idle() {
    let (mut sequencer, engine, _rx) = setup(false);
    assert_eq!(sequencer.run(NarrationPlan::empty(), None), None);
    assert_eq!(sequencer.state(), SequencerState::Idle);
    assert!(engine.spoken_texts().is_empty());
}

#[tokio::test]
async fn sequential_steps_advance_on_completion() {
    let (mut sequencer, engine, mut rx) = setup(true);
    let plan = NarrationPlan::sequential(vec![utterance("um"), utterance("dois")]);
    let id = sequencer.run(plan, None).unwrap();

    // The recording engine completes on the spot: feed the events back
    // the way the runtime would.
    let mut finished = None;
    while let Ok(SpeechEvent::Done(done)) = rx.try_recv() {
        finished = sequencer.on_speech_done(done);
    }
    assert_eq!(finished, Some(id));
    assert_eq!(sequencer.state(), SequencerState::Done);
    assert_eq!(engine.spoken_texts(), vec!["um".to_string(), "dois".to_string()]);
}

#[tokio::test]
async fn replacing_a_plan_ignores_stale_completions() {
    let (mut sequencer, engine, _rx) = setup(false);
    let first = NarrationPlan::sequential(vec![utterance("antigo"), utterance("nunca")]);
    let first_id = sequencer.run(first, None).unwrap();

    let second = NarrationPlan::sequential(vec![utterance("novo")]);
    sequencer.run(second, None).unwrap();

    // A completion from the replaced plan must not advance anything.
    assert_eq!(
        sequencer.on_speech_done(UtteranceId {
            plan: first_id,
            step: 0
        }),
        None
    );
    assert_eq!(engine.spoken_texts(), vec!["antigo".to_string(), "novo".to_string()]);
}

#[tokio::test]
async fn cancel_while_speaking_marks_the_plan_canceled() {
    let (mut sequencer, _engine, _rx) = setup(false);
    let plan = NarrationPlan::sequential(vec![utterance("um"), utterance("dois")]);
    let id = sequencer.run(plan, None).unwrap();

    sequencer.cancel();
    assert_eq!(sequencer.state(), SequencerState::Canceled);
    assert_eq!(sequencer.current_plan(), None);

    // Even the in-flight step's completion is dead after the cancel.
    assert_eq!(sequencer.on_speech_done(UtteranceId { plan: id, step: 0 }), None);
}

#[tokio::test(start_paused = true)]
async fn canceled_delayed_plan_never_speaks() {
    let (mut sequencer, engine, _rx) = setup(false);
    let plan = NarrationPlan::delayed(vec![
        (Duration::from_millis(2500), utterance("item um")),
        (Duration::from_millis(5000), utterance("item dois")),
    ]);
    sequencer.run(plan, None).unwrap();
    sequencer.cancel();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(engine.spoken_texts().is_empty());
    assert_eq!(engine.calls().iter().filter(|c| **c == EngineCall::Stop).count(), 2);
}

#[tokio::test(start_paused = true)]
async fn delayed_steps_fire_in_offset_order() {
    let (mut sequencer, engine, _rx) = setup(false);
    let plan = NarrationPlan::delayed(vec![
        (Duration::ZERO, utterance("cabeçalho")),
        (Duration::from_millis(2500), utterance("primeiro")),
        (Duration::from_millis(5000), utterance("segundo")),
    ]);
    sequencer.run(plan, None).unwrap();

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(engine.spoken_texts(), vec!["cabeçalho".to_string()]);

    tokio::time::sleep(Duration::from_millis(2600)).await;
    assert_eq!(
        engine.spoken_texts(),
        vec!["cabeçalho".to_string(), "primeiro".to_string()]
    );

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(
        engine.spoken_texts(),
        vec![
            "cabeçalho".to_string(),
            "primeiro".to_string(),
            "segundo".to_string()
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn settle_delay_defers_the_first_sequential_step() {
    let (mut sequencer, engine, _rx) = setup(false);
    let plan = NarrationPlan::sequential(vec![utterance("intro")])
        .with_start_delay(Duration::from_millis(500));
    sequencer.run(plan, None).unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(engine.spoken_texts().is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(engine.spoken_texts(), vec!["intro".to_string()]);
}

struct FakeAudio {
    volumes: parking_lot::Mutex<Vec<f32>>,
}

impl eternum::speech::AmbientChannel for FakeAudio {
    fn set_volume(&self, volume: f32) {
        self.volumes.lock().push(volume);
    }
}

#[tokio::test]
async fn ducking_plan_restores_volume_on_completion() {
    let (mut sequencer, _engine, mut rx) = setup(true);
    let audio = Arc::new(FakeAudio {
        volumes: parking_lot::Mutex::new(Vec::new()),
    });

    let plan = NarrationPlan::sequential(vec![utterance("biografia")]).with_audio_duck();
    sequencer.run(plan, Some(audio.clone())).unwrap();
    assert_eq!(*audio.volumes.lock(), vec![0.2]);

    while let Ok(SpeechEvent::Done(done)) = rx.try_recv() {
        sequencer.on_speech_done(done);
    }
    assert_eq!(*audio.volumes.lock(), vec![0.2, 1.0]);
}

#[tokio::test]
async fn late_audio_channel_is_ducked_mid_plan() {
    let (mut sequencer, _engine, mut rx) = setup(true);
    let plan = NarrationPlan::sequential(vec![utterance("biografia")]).with_audio_duck();
    sequencer.run(plan, None).unwrap();

    let audio = Arc::new(FakeAudio {
        volumes: parking_lot::Mutex::new(Vec::new()),
    });
    sequencer.attach_audio(audio.clone());
    assert_eq!(*audio.volumes.lock(), vec![0.2]);

    while let Ok(SpeechEvent::Done(done)) = rx.try_recv() {
        sequencer.on_speech_done(done);
    }
    assert_eq!(*audio.volumes.lock(), vec![0.2, 1.0]);
}

#[tokio::test]
async fn late_audio_is_left_alone_without_a_ducking_plan() {
    let (mut sequencer, _engine, _rx) = setup(false);
    let plan = NarrationPlan::sequential(vec![utterance("menu")]);
    sequencer.run(plan, None).unwrap();

    let audio = Arc::new(FakeAudio {
        volumes: parking_lot::Mutex::new(Vec::new()),
    });
    sequencer.attach_audio(audio.clone());
    assert!(audio.volumes.lock().is_empty());
}

#[tokio::test]
async fn ducking_plan_restores_volume_on_cancel() {
    let (mut sequencer, _engine, _rx) = setup(false);
    let audio = Arc::new(FakeAudio {
        volumes: parking_lot::Mutex::new(Vec::new()),
    });

    let plan = NarrationPlan::sequential(vec![utterance("biografia")]).with_audio_duck();
    sequencer.run(plan, Some(audio.clone())).unwrap();
    sequencer.cancel();
    assert_eq!(*audio.volumes.lock(), vec![0.2, 1.0]);
}
