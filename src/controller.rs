use log::debug;

use crate::constants::*;
use crate::deck::Deck;
use crate::slide::Slide;
use crate::state::{Direction, NavState};

/// A step navigation that was requested but has not committed yet. The index
/// changes only when `elapsed` passes the flash delay, so the renderer gets a
/// short window to play the flash before the slide actually swaps.
#[derive(Debug)]
struct PendingStep {
    target: usize,
    intense: bool,
    elapsed: f32,
}

/// Owns the current slide index and the only legal ways to change it.
///
/// Two states: `Idle` and `Transitioning`. A step request at a boundary is a
/// silent no-op. A step request while a transition is in flight cancels the
/// pending commit and schedules a fresh one against the committed index, so
/// rapid input can never double-step or walk past a boundary.
pub struct DeckController {
    deck: Deck,
    current_index: usize,
    direction: Direction,
    pending: Option<PendingStep>,
    // Fade-out bookkeeping for the flash overlay after a commit.
    settle_left: f32,
    settle_total: f32,
    settle_intense: bool,
}

impl DeckController {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            current_index: 0,
            direction: Direction::Forward,
            pending: None,
            settle_left: 0.0,
            settle_total: 0.0,
            settle_intense: false,
        }
    }

    pub fn go_to_previous(&mut self) {
        if self.current_index == 0 {
            debug!("previous ignored at first slide");
            return;
        }
        let target = self.current_index - 1;
        // Stepping back onto the opening slide gets the intense variant.
        let intense = self.current_index == 1;
        self.begin_step(target, Direction::Backward, intense);
    }

    pub fn go_to_next(&mut self) {
        if self.current_index + 1 >= self.deck.len() {
            debug!("next ignored at last slide");
            return;
        }
        let target = self.current_index + 1;
        // Leaving the opening slide gets the intense variant.
        let intense = self.current_index == 0;
        self.begin_step(target, Direction::Forward, intense);
    }

    /// Direct jump, used by the indicator dots. Commits immediately with no
    /// flash; out-of-range and same-index targets are silent no-ops.
    pub fn go_to_index(&mut self, target: usize) {
        if target >= self.deck.len() {
            debug!("jump to {target} ignored, deck has {} slides", self.deck.len());
            return;
        }
        if target == self.current_index {
            return;
        }
        if self.pending.take().is_some() {
            debug!("pending step cancelled by direct jump");
        }
        self.direction = if target > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        debug!("jump {} -> {}", self.current_index, target);
        self.current_index = target;
    }

    fn begin_step(&mut self, target: usize, direction: Direction, intense: bool) {
        if self.pending.take().is_some() {
            debug!("pending step cancelled and rescheduled");
        }
        self.direction = direction;
        self.pending = Some(PendingStep {
            target,
            intense,
            elapsed: 0.0,
        });
    }

    /// Advances the transition clock. Called once per frame; commits the
    /// pending index change when the flash delay has elapsed.
    pub fn update(&mut self, dt: f32) {
        if let Some(pending) = &mut self.pending {
            pending.elapsed += dt;
            if pending.elapsed >= FLASH_DELAY {
                debug!("step {} -> {}", self.current_index, pending.target);
                self.current_index = pending.target;
                self.settle_total = if pending.intense {
                    INTENSE_FLASH_FADE
                } else {
                    FLASH_FADE
                };
                self.settle_left = self.settle_total;
                self.settle_intense = pending.intense;
                self.pending = None;
            }
        } else if self.settle_left > 0.0 {
            self.settle_left = (self.settle_left - dt).max(0.0);
        }
    }

    pub fn nav_state(&self) -> NavState {
        if self.pending.is_some() {
            NavState::Transitioning
        } else {
            NavState::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        // The index invariant makes this infallible.
        &self.deck.slides()[self.current_index]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn at_last(&self) -> bool {
        self.current_index + 1 == self.deck.len()
    }

    /// Opacity of the flash overlay in [0, 1]: ramps up while a step is
    /// pending, then fades back down after the commit.
    pub fn flash_alpha(&self) -> f32 {
        if let Some(pending) = &self.pending {
            (pending.elapsed / FLASH_DELAY).min(1.0)
        } else if self.settle_total > 0.0 {
            self.settle_left / self.settle_total
        } else {
            0.0
        }
    }

    pub fn flash_intense(&self) -> bool {
        match &self.pending {
            Some(pending) => pending.intense,
            None => self.settle_intense && self.settle_left > 0.0,
        }
    }
}
