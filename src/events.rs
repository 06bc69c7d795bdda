/// Input the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Flip between paused and running
    TogglePause,

    /// Pause and save the frame on screen. Ignored while paused.
    StepAndCapture,

    /// Exit the application
    Exit,
}
