#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavState {
    Idle,          // Showing the current slide, no commit scheduled
    Transitioning, // A step was requested, index commits when the flash delay elapses
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // Toward higher slide indices
    Backward, // Toward lower slide indices
}
