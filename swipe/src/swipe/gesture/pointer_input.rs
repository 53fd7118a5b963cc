// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::{Pos, col, row};

/// A pointer event in the terminal, the raw input the
/// [`DragTracker`](crate::DragTracker) interprets into drags and taps.
///
/// This is the crate's own vocabulary rather than [`crossterm::event::MouseEvent`]
/// so the gesture layer stays testable without a terminal, and so embedders on a
/// different event source only have to produce this one type.
///
/// # Example
///
/// ```rust
/// use r3bl_swipe::{PointerButton, PointerInput, PointerInputKind, col, row};
///
/// let press = PointerInput {
///     pos: col(10) + row(5),
///     kind: PointerInputKind::Down(PointerButton::Left),
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct PointerInput {
    /// The position in the terminal where the pointer event occurred.
    pub pos: Pos,
    /// The specific type of pointer event (press, drag, scroll, etc.).
    pub kind: PointerInputKind,
}

/// The kinds of pointer events the gesture layer cares about.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PointerInputKind {
    /// Button pressed down at a position.
    Down(PointerButton),
    /// Button released at a position.
    Up(PointerButton),
    /// Pointer moved without any buttons pressed.
    Move,
    /// Pointer moved while a button is held down (dragging).
    Drag(PointerButton),
    /// Scroll wheel moved up (away from user).
    ScrollUp,
    /// Scroll wheel moved down (toward user).
    ScrollDown,
    /// Horizontal scroll to the left.
    ScrollLeft,
    /// Horizontal scroll to the right.
    ScrollRight,
}

/// Pointer buttons, as terminals report them. Only [`PointerButton::Left`]
/// drives the swipe gesture.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl From<MouseEvent> for PointerInput {
    fn from(mouse_event: MouseEvent) -> Self {
        let pos = col(mouse_event.column) + row(mouse_event.row);
        let kind: PointerInputKind = mouse_event.kind.into();
        PointerInput { pos, kind }
    }
}

impl From<MouseEventKind> for PointerInputKind {
    fn from(mouse_event_kind: MouseEventKind) -> Self {
        match mouse_event_kind {
            MouseEventKind::Down(button) => PointerInputKind::Down(button.into()),
            MouseEventKind::Up(button) => PointerInputKind::Up(button.into()),
            MouseEventKind::Moved => PointerInputKind::Move,
            MouseEventKind::Drag(button) => PointerInputKind::Drag(button.into()),
            MouseEventKind::ScrollUp => PointerInputKind::ScrollUp,
            MouseEventKind::ScrollDown => PointerInputKind::ScrollDown,
            MouseEventKind::ScrollLeft => PointerInputKind::ScrollLeft,
            MouseEventKind::ScrollRight => PointerInputKind::ScrollRight,
        }
    }
}

impl From<MouseButton> for PointerButton {
    fn from(mouse_button: MouseButton) -> Self {
        match mouse_button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}
