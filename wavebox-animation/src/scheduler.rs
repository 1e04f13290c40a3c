//! Frame scheduling with explicit cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use wavebox_core::{CameraController, Error, RenderSurface, Result};

use crate::session::AnimationSession;

/// Source of display-refresh ticks
///
/// `next_frame` blocks until the next frame is due and returns `false` once
/// the source is exhausted.
pub trait FrameSource {
    fn next_frame(&mut self) -> bool;
}

impl<F: FrameSource + ?Sized> FrameSource for &mut F {
    fn next_frame(&mut self) -> bool {
        (**self).next_frame()
    }
}

/// Yields a fixed number of frames without waiting
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameSource for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Paces frames to a target rate, optionally stopping after a frame limit
#[derive(Debug, Clone)]
pub struct FixedRateFrames {
    interval: Duration,
    last: Option<Instant>,
    limit: Option<u64>,
    produced: u64,
}

impl FixedRateFrames {
    /// Create a source running at `fps` frames per second
    pub fn new(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "frame rate must be positive, got {}",
                fps
            )));
        }
        let interval = Duration::try_from_secs_f64(1.0 / fps).map_err(|e| {
            Error::InvalidArgument(format!("frame rate {} gives no usable interval: {}", fps, e))
        })?;
        Ok(Self {
            interval,
            last: None,
            limit: None,
            produced: 0,
        })
    }

    /// Stop after `frames` frames
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn produced(&self) -> u64 {
        self.produced
    }
}

impl FrameSource for FixedRateFrames {
    fn next_frame(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return false;
        }
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
        self.produced += 1;
        true
    }
}

/// Cloneable stop signal shared between a scheduler and its owner
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the scheduler to stop before its next frame
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Why a scheduler run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    SourceExhausted,
}

/// Outcome of [`FrameScheduler::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub frames: u64,
    pub reason: StopReason,
}

/// Drives an [`AnimationSession`] one frame per tick of a [`FrameSource`]
///
/// Frames never overlap: each tick runs to completion before the source is
/// asked for the next one.
pub struct FrameScheduler<F: FrameSource> {
    source: F,
}

impl<F: FrameSource> FrameScheduler<F> {
    pub fn new(source: F) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &F {
        &self.source
    }

    /// Run until the token is cancelled or the source is exhausted
    ///
    /// The surface is configured with the session style before the first
    /// frame. A surface error stops the run and is returned.
    pub fn run<S, C>(
        &mut self,
        session: &mut AnimationSession,
        surface: &mut S,
        camera: &mut C,
        token: &CancellationToken,
    ) -> Result<RunReport>
    where
        S: RenderSurface + ?Sized,
        C: CameraController + ?Sized,
    {
        surface.configure(session.style())?;
        log::info!("Frame scheduler started");

        let mut frames = 0;
        let reason = loop {
            if token.is_cancelled() {
                break StopReason::Cancelled;
            }
            if !self.source.next_frame() {
                break StopReason::SourceExhausted;
            }
            // Cancellation may arrive while the source was waiting
            if token.is_cancelled() {
                break StopReason::Cancelled;
            }
            session.tick(surface, camera)?;
            frames += 1;
        };

        log::info!("Frame scheduler stopped after {} frames ({:?})", frames, reason);
        Ok(RunReport { frames, reason })
    }
}
