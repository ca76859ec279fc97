// Copyright 2026 the rackview authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The self-rescheduling render loop over a host-supplied frame clock.
//!
//! The host (a browser shell, a windowing layer, a test harness) owns the
//! actual timing source; this module only tracks which frame request is the
//! live one so stale callbacks can never double-drive the view.

/// A token identifying one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's frame timing source.
///
/// Each [`request_frame`] schedules exactly one future callback and returns
/// the token the callback will carry. A request is either fired once or
/// cancelled once, never both.
///
/// [`request_frame`]: FrameClock::request_frame
pub trait FrameClock {
    /// Schedules one frame callback and returns its token.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending request. Unknown or already-fired tokens are
    /// ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Stopped,
    Running { pending: FrameHandle },
}

/// The loop state machine: stopped, or running with exactly one pending
/// frame request.
///
/// `start` and `stop` are idempotent, and a tick is honored only if it
/// carries the token of the one pending request. Ticks that race a stop, or
/// that belong to an older run, are dropped.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
}

impl RenderLoop {
    /// Creates a stopped loop.
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    /// Whether a frame request is currently pending.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Starts the loop by requesting the first frame. A no-op while running.
    pub fn start(&mut self, clock: &mut dyn FrameClock) {
        if self.is_running() {
            return;
        }
        let pending = clock.request_frame();
        self.state = LoopState::Running { pending };
        log::debug!("render loop started ({pending:?})");
    }

    /// Stops the loop, cancelling the pending request. A no-op while
    /// stopped.
    pub fn stop(&mut self, clock: &mut dyn FrameClock) {
        if let LoopState::Running { pending } = self.state {
            clock.cancel_frame(pending);
            self.state = LoopState::Stopped;
            log::debug!("render loop stopped");
        }
    }

    /// Accepts or rejects a frame callback.
    ///
    /// Returns `true` and schedules the next frame if `handle` is the live
    /// pending request; returns `false` for stale tokens and when stopped,
    /// in which case the caller must do no frame work.
    pub fn on_frame(&mut self, clock: &mut dyn FrameClock, handle: FrameHandle) -> bool {
        match self.state {
            LoopState::Running { pending } if pending == handle => {
                let next = clock.request_frame();
                self.state = LoopState::Running { pending: next };
                true
            }
            _ => {
                log::trace!("stale frame callback {handle:?} ignored");
                false
            }
        }
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`FrameClock`] driven by hand. Used by the test suites and the
/// headless demo; a real host adapts its own timer instead.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    next: u64,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrameClock {
    /// Creates a clock with no pending request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the pending request, handing its token to the caller to feed
    /// back into the loop. Returns `None` if nothing is scheduled.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Total requests made so far.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total requests cancelled before firing.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameClock for ManualFrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;
        self.requested += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_requests_one_frame() {
        let mut clock = ManualFrameClock::new();
        let mut render_loop = RenderLoop::new();
        assert!(!render_loop.is_running());

        render_loop.start(&mut clock);
        assert!(render_loop.is_running());
        assert_eq!(clock.requested(), 1);

        // Starting again changes nothing.
        render_loop.start(&mut clock);
        assert_eq!(clock.requested(), 1);
    }

    #[test]
    fn ticks_reschedule_themselves() {
        let mut clock = ManualFrameClock::new();
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut clock);

        for _ in 0..3 {
            let handle = clock.fire().unwrap();
            assert!(render_loop.on_frame(&mut clock, handle));
        }
        assert_eq!(clock.requested(), 4);
        assert!(render_loop.is_running());
    }

    #[test]
    fn stop_cancels_the_pending_request() {
        let mut clock = ManualFrameClock::new();
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut clock);

        render_loop.stop(&mut clock);
        assert!(!render_loop.is_running());
        assert_eq!(clock.cancelled(), 1);
        assert!(clock.fire().is_none());

        // Stopping again is a no-op.
        render_loop.stop(&mut clock);
        assert_eq!(clock.cancelled(), 1);
    }

    #[test]
    fn stale_ticks_are_rejected() {
        let mut clock = ManualFrameClock::new();
        let mut render_loop = RenderLoop::new();
        render_loop.start(&mut clock);

        let stale = clock.fire().unwrap();
        assert!(render_loop.on_frame(&mut clock, stale));
        // The same token a second time is no longer live.
        assert!(!render_loop.on_frame(&mut clock, stale));

        // A token that arrives after stop does no work either.
        let handle = clock.fire().unwrap();
        render_loop.stop(&mut clock);
        assert!(!render_loop.on_frame(&mut clock, handle));
        assert!(!render_loop.is_running());
    }
}
