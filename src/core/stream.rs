use crate::core::error::CaptureError;

/// Anything holding live media tracks that can be shut down.
pub trait TrackSet {
    /// Stop every track; returns how many were stopped.
    fn stop_tracks(&self) -> usize;
}

/// Identifies one camera start request. Only the newest token may bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns at most one bound camera stream.
///
/// Every start request and every release bumps the generation, so a request
/// that resolves after a newer start (or a stop) is recognised as stale and
/// its stream is shut down instead of bound. Dropping the slot releases the
/// bound stream.
pub struct StreamSlot<S: TrackSet> {
    current: Option<S>,
    generation: u64,
}

impl<S: TrackSet> StreamSlot<S> {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Release whatever is bound and hand out a token for a fresh request.
    pub fn begin_request(&mut self) -> RequestToken {
        self.release();
        RequestToken(self.generation)
    }

    /// Bind the stream a request resolved with. A stale token stops the
    /// stream and reports [`CaptureError::Superseded`].
    pub fn bind(&mut self, token: RequestToken, stream: S) -> Result<(), CaptureError> {
        if token.0 != self.generation {
            stream.stop_tracks();
            return Err(CaptureError::Superseded);
        }
        if let Some(previous) = self.current.replace(stream) {
            previous.stop_tracks();
        }
        Ok(())
    }

    /// Stop all tracks of the bound stream and invalidate pending requests.
    /// Safe to call when nothing is bound.
    pub fn release(&mut self) -> usize {
        self.generation = self.generation.wrapping_add(1);
        self.current.take().map_or(0, |s| s.stop_tracks())
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}

impl<S: TrackSet> Default for StreamSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TrackSet> Drop for StreamSlot<S> {
    fn drop(&mut self) {
        if let Some(stream) = self.current.take() {
            stream.stop_tracks();
        }
    }
}
