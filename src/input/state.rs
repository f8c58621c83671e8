//! Input state management
//!
//! Polls keyboard, mouse/touch (macroquad) and gamepad, combining them
//! into a per-frame [`FrameInput`] snapshot.

use macroquad::prelude::*;
use crate::ui::PointerState;
use crate::viewport::Viewport;
use super::{button, Action, ActionSet, Gamepad};

/// Stick deflection that counts as holding a direction
const STICK_DIGITAL_THRESHOLD: f32 = 0.5;

/// One frame of input, in game coordinates.
///
/// Scenes read only this, so scene logic can be driven by tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    /// Actions held this frame
    pub down: ActionSet,
    /// Actions that started this frame
    pub pressed: ActionSet,
}

impl FrameInput {
    /// No buttons, pointer parked at the origin
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }

    /// Mark an action as held
    pub fn with_down(mut self, action: Action) -> Self {
        self.down.insert(action);
        self
    }

    /// Mark an action as pressed this frame (implies held)
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.down.insert(action);
        self.pressed.insert(action);
        self
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.down.contains(action)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }
}

/// Unified input state that handles keyboard/mouse/touch and gamepad
pub struct InputState {
    gamepad: Gamepad,
    prev_down: ActionSet,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            prev_down: ActionSet::default(),
        }
    }

    /// Sample every device once; call at the top of the frame
    pub fn snapshot(&mut self, viewport: &Viewport) -> FrameInput {
        self.gamepad.poll();

        let (mx, my) = mouse_position();
        let pointer = PointerState {
            pos: viewport.to_game(vec2(mx, my)),
            pressed: is_mouse_button_pressed(MouseButton::Left),
        };

        let mut down = ActionSet::default();
        let mut pressed = ActionSet::default();
        for action in Action::ALL {
            if self.keyboard_down(action) || self.gamepad_down(action) {
                down.insert(action);
            }
            // Stick directions have no "pressed" event of their own
            if self.keyboard_pressed(action)
                || self.gamepad_pressed(action)
                || (down.contains(action) && !self.prev_down.contains(action))
            {
                pressed.insert(action);
            }
        }
        self.prev_down = down;

        FrameInput { pointer, down, pressed }
    }

    fn keys(action: Action) -> &'static [KeyCode] {
        match action {
            Action::MoveUp => &[KeyCode::Up, KeyCode::W],
            Action::MoveDown => &[KeyCode::Down, KeyCode::S],
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Confirm => &[KeyCode::Enter, KeyCode::KpEnter, KeyCode::Space],
            Action::Cancel => &[KeyCode::Escape],
            Action::ToggleDebug => &[KeyCode::F3],
        }
    }

    fn keyboard_down(&self, action: Action) -> bool {
        Self::keys(action).iter().any(|k| is_key_down(*k))
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        Self::keys(action).iter().any(|k| is_key_pressed(*k))
    }

    fn gamepad_button(action: Action) -> Option<u32> {
        match action {
            Action::MoveUp => Some(button::DPAD_UP),
            Action::MoveDown => Some(button::DPAD_DOWN),
            Action::MoveLeft => Some(button::DPAD_LEFT),
            Action::MoveRight => Some(button::DPAD_RIGHT),
            Action::Confirm => Some(button::A),
            Action::Cancel => Some(button::B),
            Action::ToggleDebug => Some(button::SELECT),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        let stick = self.gamepad.left_stick();
        let by_stick = match action {
            Action::MoveUp => stick.y < -STICK_DIGITAL_THRESHOLD,
            Action::MoveDown => stick.y > STICK_DIGITAL_THRESHOLD,
            Action::MoveLeft => stick.x < -STICK_DIGITAL_THRESHOLD,
            Action::MoveRight => stick.x > STICK_DIGITAL_THRESHOLD,
            _ => false,
        };
        by_stick
            || Self::gamepad_button(action).is_some_and(|b| self.gamepad.is_button_down(b))
            || (action == Action::Confirm && self.gamepad.is_button_down(button::START))
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        Self::gamepad_button(action).is_some_and(|b| self.gamepad.is_button_pressed(b))
            || (action == Action::Confirm && self.gamepad.is_button_pressed(button::START))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_pressed_implies_down() {
        let input = FrameInput::idle().with_pressed(Action::Confirm).with_down(Action::MoveLeft);
        assert!(input.is_pressed(Action::Confirm));
        assert!(input.is_down(Action::Confirm));
        assert!(input.is_down(Action::MoveLeft));
        assert!(!input.is_pressed(Action::MoveLeft));
    }
}
