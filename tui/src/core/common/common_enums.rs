// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Control flow signal for the main event loop.
///
/// Returned by [`crate::EditorSession::handle_event`] so the launcher knows whether to
/// read the next input event or tear down the terminal and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Continue to the next iteration.
    #[default]
    Continue,

    /// Stop processing and exit the loop.
    Stop,
}

/// Whether a history push actually stored a snapshot. Capacity overflow is absorbed
/// silently, but callers and tests can still observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushResult {
    #[default]
    Stored,
    DroppedFull,
}
