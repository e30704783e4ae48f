//! Repeating timer that drives a gesture.
//!
//! [`Animator`] only tracks whether the timer is running; the actual
//! scheduling is delegated to a [`Ticker`] backend. In the browser that is
//! `setInterval`, whose callback calls `Renderer::tick`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("failed to schedule timer: {0}")]
    Schedule(String),
}

/// Periodic timer backend.
pub trait Ticker {
    /// Start firing every `period_ms` milliseconds. On error nothing fires.
    fn begin(&mut self, period_ms: u32) -> Result<(), TimerError>;
    /// Cancel the running timer. The next tick never fires.
    fn cancel(&mut self);
}

pub struct Animator<T: Ticker> {
    ticker: T,
    period_ms: u32,
    running: bool,
}

impl<T: Ticker> Animator<T> {
    pub fn new(ticker: T, period_ms: u32) -> Self {
        Self {
            ticker,
            period_ms,
            running: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Returns `Ok(false)` if already running; the existing timer is kept.
    /// The animator stays stopped if the ticker fails to begin.
    pub fn start(&mut self) -> Result<bool, TimerError> {
        if self.running {
            return Ok(false);
        }
        self.ticker.begin(self.period_ms)?;
        self.running = true;
        log::debug!("[animator] start period={}ms", self.period_ms);
        Ok(true)
    }

    /// Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.ticker.cancel();
        log::debug!("[animator] stop");
        true
    }
}
