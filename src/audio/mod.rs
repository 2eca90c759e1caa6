//! Ambient music for the memorial detail screen.
//!
//! The track is downloaded by the screen and looped here. The only
//! thing anyone else touches is the volume: the narration sequencer
//! ducks it while the biography is spoken and restores it afterwards.

use std::io::Cursor;
use std::sync::Arc;

use rodio::Source;
use thiserror::Error;

use crate::speech::sequencer::{AmbientChannel, FULL_VOLUME};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Failed to open the audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Failed to decode the ambient track: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Looping playback of one encoded track. Dropping the player stops
/// the sound.
pub struct AmbientPlayer {
    _stream: rodio::OutputStream,
    sink: Arc<rodio::Sink>,
}

impl AmbientPlayer {
    pub fn start(bytes: Vec<u8>) -> Result<Self, AudioError> {
        let stream = rodio::OutputStreamBuilder::open_default_stream()?;
        let sink = rodio::Sink::connect_new(stream.mixer());
        let source = rodio::Decoder::new(Cursor::new(bytes))?;
        sink.append(source.repeat_infinite());
        sink.set_volume(FULL_VOLUME);
        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    /// Volume handle for the sequencer.
    pub fn channel(&self) -> Arc<dyn AmbientChannel> {
        Arc::new(SinkChannel(Arc::clone(&self.sink)))
    }
}

struct SinkChannel(Arc<rodio::Sink>);

impl AmbientChannel for SinkChannel {
    fn set_volume(&self, volume: f32) {
        self.0.set_volume(volume);
    }
}
