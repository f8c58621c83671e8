//! Unified gamepad support for native and WASM
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses custom Web Gamepad API bindings via JavaScript plugin
//!
//! Both sides produce a button bitmask once per `poll`; "pressed" is the
//! difference against the previous poll, so it is stable for the whole
//! frame no matter how often it is queried.

use macroquad::prelude::Vec2;

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const B: u32 = 1;           // East
    pub const SELECT: u32 = 8;      // Back/Select
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Stick values inside this radius read as zero
const STICK_DEADZONE: f32 = 0.15;

// ============================================================================
// WASM Implementation (Web Gamepad API)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    // FFI bindings to JavaScript functions in web/index.html
    extern "C" {
        fn north_haven_gamepad_has_gamepad() -> i32;
        fn north_haven_gamepad_get_button_mask() -> u32;
        fn north_haven_gamepad_get_left_stick_x() -> i32;
        fn north_haven_gamepad_get_left_stick_y() -> i32;
    }

    pub struct Backend;

    impl Backend {
        pub fn new() -> Self {
            Backend
        }

        pub fn connected(&mut self) -> bool {
            unsafe { north_haven_gamepad_has_gamepad() != 0 }
        }

        pub fn button_mask(&mut self) -> u32 {
            unsafe { north_haven_gamepad_get_button_mask() }
        }

        /// Raw stick, y pointing down (screen convention)
        pub fn left_stick(&mut self) -> (f32, f32) {
            let x = unsafe { north_haven_gamepad_get_left_stick_x() } as f32 / 10000.0;
            let y = unsafe { north_haven_gamepad_get_left_stick_y() } as f32 / 10000.0;
            (x, y)
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button as GilrsButton, Gilrs};
    use macroquad::logging::warn;

    pub struct Backend {
        gilrs: Option<Gilrs>,
    }

    impl Backend {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        fn active(&mut self) -> Option<gilrs::Gamepad<'_>> {
            let gilrs = self.gilrs.as_mut()?;
            // Drain events so gilrs updates its cached state
            while gilrs.next_event().is_some() {}
            gilrs.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn connected(&mut self) -> bool {
            self.active().is_some()
        }

        pub fn button_mask(&mut self) -> u32 {
            let Some(gp) = self.active() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << super::button::B; }
            if gp.is_pressed(GilrsButton::Select) { mask |= 1 << super::button::SELECT; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << super::button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadDown) { mask |= 1 << super::button::DPAD_DOWN; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << super::button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << super::button::DPAD_RIGHT; }

            mask
        }

        /// Raw stick, y pointing down (screen convention)
        pub fn left_stick(&mut self) -> (f32, f32) {
            let Some(gp) = self.active() else { return (0.0, 0.0) };
            // gilrs reports y up; flip to match the Web API
            (gp.value(Axis::LeftStickX), -gp.value(Axis::LeftStickY))
        }
    }
}

// ============================================================================
// Shared front end
// ============================================================================

pub struct Gamepad {
    backend: platform::Backend,
    connected: bool,
    buttons: u32,
    prev_buttons: u32,
    stick: Vec2,
}

impl Gamepad {
    pub fn new() -> Self {
        Self {
            backend: platform::Backend::new(),
            connected: false,
            buttons: 0,
            prev_buttons: 0,
            stick: Vec2::ZERO,
        }
    }

    /// Sample the device; call once per frame
    pub fn poll(&mut self) {
        self.connected = self.backend.connected();
        self.prev_buttons = self.buttons;
        if self.connected {
            self.buttons = self.backend.button_mask();
            let (x, y) = self.backend.left_stick();
            self.stick = apply_deadzone(x, y, STICK_DEADZONE);
        } else {
            self.buttons = 0;
            self.stick = Vec2::ZERO;
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.connected
    }

    pub fn is_button_down(&self, button: u32) -> bool {
        self.buttons & (1 << button) != 0
    }

    pub fn is_button_pressed(&self, button: u32) -> bool {
        pressed_since(self.prev_buttons, self.buttons, button)
    }

    /// Left stick after deadzone, y pointing down
    pub fn left_stick(&self) -> Vec2 {
        self.stick
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Button went from up to down between two masks
fn pressed_since(prev: u32, current: u32, button: u32) -> bool {
    let bit = 1 << button;
    current & bit != 0 && prev & bit == 0
}

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone || len == 0.0 {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = ((len - deadzone) / (1.0 - deadzone)).min(1.0) / len;
    Vec2::new(x * scale, y * scale)
}
