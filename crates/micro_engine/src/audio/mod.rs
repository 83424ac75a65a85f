//! One-shot audio playback
//!
//! Clips are registered by name during game object `start` hooks and
//! triggered fire-and-forget during play. Registration is validated (an
//! unreadable source is a hard error); playback never surfaces failures to
//! the frame loop — an unknown clip name or a decode error is logged at
//! `warn` and dropped.
//!
//! On hosts without an audio output device (CI, headless servers) the
//! engine degrades to a disabled state where every trigger is a logged
//! no-op, so game logic keeps running.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// Playback was requested for a name that was never registered
    #[error("Unknown audio clip '{0}'")]
    UnknownClip(String),

    /// The clip's source file could not be opened at registration time
    #[error("Audio clip source '{path}' is unreadable: {source}")]
    ClipUnreadable {
        /// Path passed to `add_clip`
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// No audio output device is available
    #[error("Audio output unavailable: {0}")]
    DeviceUnavailable(String),

    /// Decoding or sink creation failed at playback time
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Fire-and-forget audio playback keyed by clip name
pub struct AudioEngine {
    clips: HashMap<String, PathBuf>,
    // The stream must stay alive for its handle to keep working
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioEngine {
    /// Create an audio engine backed by the default output device
    ///
    /// Falls back to the disabled state with a logged warning when no
    /// device can be opened, so headless hosts still run.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                clips: HashMap::new(),
                output: Some((stream, handle)),
            },
            Err(e) => {
                log::warn!("No audio output device, sound disabled: {e}");
                Self::disabled()
            }
        }
    }

    /// Create an audio engine that accepts clip registrations but plays
    /// nothing
    pub fn disabled() -> Self {
        Self {
            clips: HashMap::new(),
            output: None,
        }
    }

    /// Whether an output device is available
    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Register a named clip backed by an audio file
    ///
    /// The source must be readable at registration time; re-registering a
    /// name replaces its source. Callable from `start` hooks.
    pub fn add_clip(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<(), AudioError> {
        let name = name.into();
        let path = path.into();
        File::open(&path).map_err(|source| AudioError::ClipUnreadable {
            path: path.clone(),
            source,
        })?;
        log::debug!("Registered audio clip '{name}' -> {}", path.display());
        self.clips.insert(name, path);
        Ok(())
    }

    /// Whether a clip name is registered
    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Trigger a registered clip, fire-and-forget
    ///
    /// Playback proceeds asynchronously on the audio thread; completion is
    /// never reported. Unknown names and playback failures are logged and
    /// dropped so a bad trigger can never stall the frame loop.
    pub fn play_one_shot(&self, name: &str) {
        let Some((_, handle)) = &self.output else {
            log::debug!("Audio disabled, dropping one-shot '{name}'");
            return;
        };
        let Some(path) = self.clips.get(name) else {
            log::warn!("{}", AudioError::UnknownClip(name.to_string()));
            return;
        };
        if let Err(e) = Self::play_detached(handle, path) {
            log::warn!("One-shot '{name}' failed: {e}");
        }
    }

    fn play_detached(handle: &OutputStreamHandle, path: &Path) -> Result<(), AudioError> {
        let file = File::open(path).map_err(|source| AudioError::ClipUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {e}")))?;
        let sink = Sink::try_new(handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {e}")))?;
        sink.append(source);
        // Detach so the sound outlives this call and failures stay local to
        // the audio thread
        sink.detach();
        Ok(())
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Any readable file will do; clips are only opened, not decoded, at
    // registration time
    const READABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

    #[test]
    fn test_add_clip_rejects_unreadable_source() {
        let mut audio = AudioEngine::disabled();
        let result = audio.add_clip("blip", "does/not/exist.wav");
        assert!(matches!(result, Err(AudioError::ClipUnreadable { .. })));
        assert!(!audio.has_clip("blip"));
    }

    #[test]
    fn test_add_clip_accepts_readable_source() {
        let mut audio = AudioEngine::disabled();
        audio.add_clip("clip", READABLE).unwrap();
        assert!(audio.has_clip("clip"));
    }

    #[test]
    fn test_unknown_clip_is_dropped_silently() {
        let audio = AudioEngine::disabled();
        // Must not panic or block
        audio.play_one_shot("never-registered");
    }

    #[test]
    fn test_disabled_engine_registers_but_does_not_play() {
        let mut audio = AudioEngine::disabled();
        assert!(!audio.is_enabled());
        audio.add_clip("clip", READABLE).unwrap();
        audio.play_one_shot("clip");
    }
}
