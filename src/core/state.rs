//! Per-node progress state.

/// Travel direction of a progress value or of the chain cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Outcome of a single [`AnimationState::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateStep {
    /// Nothing to do; the state is at rest.
    Settled,
    /// Progress moved but has not reached the next boundary.
    Animating,
    /// Progress reached the boundary, was clamped to it and the state settled.
    Boundary,
}

/// Progress value that travels between 0 and 1 one gesture at a time.
///
/// `dir == None` means settled. Each gesture goes the opposite way of the
/// previous one: 0 → 1, then 1 → 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    scale: f32,
    dir: Option<Direction>,
    prev_scale: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    #[inline]
    pub fn dir(&self) -> Option<Direction> {
        self.dir
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.dir.is_none()
    }

    /// Advance by `step` in the current direction, clamping at the boundary.
    pub fn update(&mut self, step: f32) -> StateStep {
        let Some(dir) = self.dir else {
            return StateStep::Settled;
        };
        self.scale += step * dir.sign();
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + dir.sign();
            self.dir = None;
            self.prev_scale = self.scale;
            return StateStep::Boundary;
        }
        StateStep::Animating
    }

    /// Abort a gesture that has not been driven yet. Progress is kept; the
    /// next `start_updating` picks the direction from `prev_scale` again.
    pub fn cancel(&mut self) {
        self.dir = None;
    }

    /// Begin a gesture if at rest. Returns `false` while a gesture is running.
    pub fn start_updating(&mut self) -> bool {
        if self.dir.is_some() {
            return false;
        }
        // 1 - 2 * prev_scale: forward from 0, backward from 1
        self.dir = Some(if self.prev_scale < 0.5 {
            Direction::Forward
        } else {
            Direction::Backward
        });
        true
    }
}
