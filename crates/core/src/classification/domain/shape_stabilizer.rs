use std::collections::VecDeque;

use crate::classification::domain::face_shape::FaceShape;
use crate::shared::constants::STABILIZER_WINDOW;

/// Outcome of the majority vote over the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Fewer raw labels than the window size have been observed.
    NotReady,
    Stable(FaceShape),
}

/// Sliding-window majority vote over per-frame shape labels.
///
/// One instance per tracked face. Observations must arrive in frame order;
/// the window is a strict FIFO, so reordering changes the vote.
pub struct ShapeStabilizer {
    window: VecDeque<FaceShape>,
    capacity: usize,
}

impl ShapeStabilizer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn observe(&mut self, shape: FaceShape) {
        self.window.push_back(shape);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// Most frequent label once the window is full.
    ///
    /// Ties go to the shape that comes first in [`FaceShape::ALL`].
    pub fn current_decision(&self) -> Decision {
        if !self.is_full() {
            return Decision::NotReady;
        }

        let mut counts = [0usize; FaceShape::ALL.len()];
        for shape in &self.window {
            counts[shape.ordinal()] += 1;
        }

        let mut best = FaceShape::ALL[0];
        for shape in FaceShape::ALL {
            if counts[shape.ordinal()] > counts[best.ordinal()] {
                best = shape;
            }
        }
        Decision::Stable(best)
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Fill level in `[0, 1]`, for "analyzing" indicators.
    pub fn progress(&self) -> f64 {
        self.window.len() as f64 / self.capacity as f64
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }
}

impl Default for ShapeStabilizer {
    fn default() -> Self {
        Self::new(STABILIZER_WINDOW)
    }
}
