// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEFAULT_UNDO_STACK_SIZE, EditorContent, LineBuffer};
use crate::PushResult;

/// # Undo/Redo Algorithm
///
/// Two bounded stacks of full [`EditorContent`] snapshots. Snapshots are cheap since
/// lines are shared between them (see [`crate::LineBuffer`]).
///
/// ## Snapshot ([`EditorHistory::snapshot`])
///
/// Called before every destructive edit.
/// 1. A copy of the current content is pushed onto the undo stack.
/// 2. The redo stack is cleared. This is the only way it gets cleared (apart from
///    [`EditorHistory::clear`]).
///
/// ## Undo ([`EditorHistory::undo`])
///
/// 1. Nothing happens if the undo stack is empty.
/// 2. The current content is pushed onto the redo stack.
/// 3. The popped content replaces the buffer's content, and every line is marked dirty.
///
/// ## Redo ([`EditorHistory::redo`])
///
/// The mirror image of undo.
///
/// ## Notes
///
/// - Both stacks hold at most `capacity` entries. Once a stack is full, further pushes
///   are dropped. The oldest entries are never evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorHistory {
    undo_stack: Vec<EditorContent>,
    redo_stack: Vec<EditorContent>,
    capacity: usize,
}

impl Default for EditorHistory {
    fn default() -> Self { Self::new(DEFAULT_UNDO_STACK_SIZE) }
}

fn push_bounded(
    stack: &mut Vec<EditorContent>,
    capacity: usize,
    content: EditorContent,
) -> PushResult {
    if stack.len() >= capacity {
        tracing::debug!(
            message = "history stack is full, dropping snapshot",
            capacity = capacity
        );
        return PushResult::DroppedFull;
    }
    stack.push(content);
    PushResult::Stored
}

impl EditorHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(capacity.min(DEFAULT_UNDO_STACK_SIZE)),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn undo_len(&self) -> usize { self.undo_stack.len() }

    #[must_use]
    pub fn redo_len(&self) -> usize { self.redo_stack.len() }

    #[must_use]
    pub fn can_undo(&self) -> bool { !self.undo_stack.is_empty() }

    #[must_use]
    pub fn can_redo(&self) -> bool { !self.redo_stack.is_empty() }

    /// Push `content` onto the undo stack and forget everything that could be redone.
    pub fn push(&mut self, content: EditorContent) -> PushResult {
        self.redo_stack.clear();
        push_bounded(&mut self.undo_stack, self.capacity, content)
    }

    /// Record the state of `buffer` before it gets mutated.
    pub fn snapshot(&mut self, buffer: &LineBuffer) -> PushResult {
        self.push(buffer.content().clone())
    }

    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        push_bounded(&mut self.redo_stack, self.capacity, buffer.content().clone());
        buffer.set_content(previous);
        true
    }

    /// Returns false if there was nothing to redo.
    pub fn redo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        push_bounded(&mut self.undo_stack, self.capacity, buffer.content().clone());
        buffer.set_content(next);
        true
    }

    /// A freshly loaded file starts with no history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
