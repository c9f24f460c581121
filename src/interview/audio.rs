//! Audio capture port for voice answers.
//!
//! Nothing is transcribed. A finished recording only tells the session to
//! append a marker to the answer text.

use log::{debug, info};
use std::time::Instant;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("Microphone access denied")]
    PermissionDenied,

    #[error("No recording in progress")]
    NotRecording,
}

#[cfg_attr(test, automock)]
pub trait AudioCapture: Send {
    /// Acquires the capture stream and starts recording.
    fn start(&mut self) -> Result<(), AudioError>;

    /// Stops recording and releases the stream.
    fn stop(&mut self) -> Result<(), AudioError>;
}

/// Capture device that grants access (unless told otherwise) and records
/// nothing.
#[derive(Debug, Default)]
pub struct SimulatedMicrophone {
    deny_access: bool,
    started_at: Option<Instant>,
}

impl SimulatedMicrophone {
    pub fn new() -> Self {
        Self::default()
    }

    /// A microphone whose permission prompt is always declined.
    #[cfg(test)]
    pub fn denied() -> Self {
        Self {
            deny_access: true,
            started_at: None,
        }
    }

    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.started_at.is_some()
    }
}

impl AudioCapture for SimulatedMicrophone {
    fn start(&mut self) -> Result<(), AudioError> {
        if self.deny_access {
            return Err(AudioError::PermissionDenied);
        }
        self.started_at = Some(Instant::now());
        debug!("Microphone stream acquired");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        let started_at = self.started_at.take().ok_or(AudioError::NotRecording)?;
        info!(
            "Microphone stream released after {:.1}s",
            started_at.elapsed().as_secs_f64()
        );
        Ok(())
    }
}
