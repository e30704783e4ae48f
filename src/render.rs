//! Composition root: sequence + animator behind the host's render/tap calls.

use crate::animator::{Animator, Ticker};
use crate::config::{validate_size, ConfigError, SceneConfig};
use crate::core::{Sequence, SequenceStep};
use crate::draw::{self, Surface};

pub struct Renderer<T: Ticker> {
    config: SceneConfig,
    sequence: Sequence,
    animator: Animator<T>,
}

impl<T: Ticker> Renderer<T> {
    pub fn new(config: SceneConfig, ticker: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let sequence = Sequence::new(config.palette.len());
        let animator = Animator::new(ticker, config.period_ms);
        Ok(Self {
            config,
            sequence,
            animator,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn animator(&self) -> &Animator<T> {
        &self.animator
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Paint the background and the current frame.
    pub fn render(&self, surface: &mut impl Surface) {
        draw::fill_background(surface, &self.config);
        self.sequence.draw(surface, &self.config);
    }

    /// Forward a trigger gesture. Ignored while a gesture is running.
    ///
    /// If the timer cannot be started the node is settled again, so a later
    /// tap can retry.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequence.start_updating() {
            return false;
        }
        log::debug!("[tap] start node {}", self.sequence.current());
        if let Err(e) = self.animator.start() {
            log::error!("[tap] {}", e);
            self.sequence.cancel_updating();
            return false;
        }
        true
    }

    /// Timer callback: redraw, advance one step and stop at the boundary.
    pub fn tick(&mut self, surface: &mut impl Surface) -> SequenceStep {
        self.render(surface);
        let step = self.sequence.update(self.config.step);
        if step.is_boundary() {
            self.animator.stop();
            self.render(surface);
        }
        step
    }

    /// Adopt a new surface size. Invalid sizes are rejected and the current
    /// size is kept.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        validate_size(width, height)?;
        self.config.width = width;
        self.config.height = height;
        Ok(())
    }
}
