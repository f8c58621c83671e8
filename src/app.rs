//! Application state and scene management
//!
//! One scene is alive at a time. A scene asks for a switch through its
//! `SceneUpdate`; the next scene is always built fresh.

use macroquad::logging::info;
use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::input::{Action, FrameInput, InputState};
use crate::scenes::{CursorHint, PreloaderScene, Scene, SceneRequest};
use crate::sprites::SpriteLibrary;
use crate::ui::{draw_label, rgba, TextStyle, FONT_SMALL, ORIGIN_TOP_LEFT};
use crate::viewport::Viewport;

/// Main application state
pub struct AppState {
    pub config: GameConfig,
    pub scene: Scene,
    pub sprites: SpriteLibrary,
    pub input: InputState,
    /// Debug overlay (F3)
    pub show_debug: bool,
    /// Last cursor pushed to the window, to avoid resetting it every frame
    cursor: CursorHint,
    /// Pointer of the last frame, for the overlay
    last_pointer: Vec2,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        let show_debug = config.show_debug;
        Self {
            config,
            scene: Scene::Preloader(PreloaderScene::new()),
            sprites: SpriteLibrary::new(),
            input: InputState::new(),
            show_debug,
            cursor: CursorHint::Default,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Name of the active scene
    pub fn scene_name(&self) -> &'static str {
        self.scene.name()
    }

    /// Drop the active scene and start the requested one
    pub fn switch_scene(&mut self, request: SceneRequest) {
        self.scene = Scene::start(request, &self.config);
        info!("Starting scene {}", self.scene.name());
    }

    /// Poll devices and advance one frame
    pub fn update(&mut self, viewport: &Viewport, dt: f32) {
        let input = self.input.snapshot(viewport);
        self.step(&input, dt);
    }

    /// Advance the active scene with an already-sampled frame of input
    pub fn step(&mut self, input: &FrameInput, dt: f32) {
        self.last_pointer = input.pointer.pos;
        if input.is_pressed(Action::ToggleDebug) {
            self.show_debug = !self.show_debug;
        }

        let update = self.scene.update(input, dt, &mut self.sprites);
        self.apply_cursor(update.cursor);
        if let Some(request) = update.request {
            self.switch_scene(request);
        }
    }

    fn apply_cursor(&mut self, cursor: CursorHint) {
        if cursor == self.cursor {
            return;
        }
        self.cursor = cursor;
        // Unit tests never open a window
        #[cfg(not(test))]
        {
            use macroquad::miniquad::{window::set_mouse_cursor, CursorIcon};
            set_mouse_cursor(match cursor {
                CursorHint::Default => CursorIcon::Default,
                CursorHint::Pointer => CursorIcon::Pointer,
            });
        }
    }

    /// Draw the active scene, plus the overlay when enabled
    pub fn draw(&self) {
        self.scene.draw(&self.sprites);
        if self.show_debug {
            self.draw_debug_overlay();
        }
    }

    fn draw_debug_overlay(&self) {
        let text = format!(
            "FPS: {}\nScene: {}\nPointer: {:.0}, {:.0}",
            get_fps(),
            self.scene_name(),
            self.last_pointer.x,
            self.last_pointer.y,
        );
        draw_rectangle(4.0, 64.0, 180.0, 56.0, rgba(0x000000, 0.6));
        draw_label(&text, 10.0, 68.0, ORIGIN_TOP_LEFT, &TextStyle::new(FONT_SMALL, GREEN));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::Character;

    fn app_at(request: SceneRequest) -> AppState {
        let mut app = AppState::new(GameConfig::default());
        app.switch_scene(request);
        app
    }

    #[test]
    fn test_starts_in_preloader() {
        let app = AppState::new(GameConfig::default());
        assert_eq!(app.scene_name(), "Preloader");
        assert!(!app.show_debug);
    }

    #[test]
    fn test_debug_toggle() {
        let mut app = app_at(SceneRequest::CharacterSelect);
        app.step(&FrameInput::idle().with_pressed(Action::ToggleDebug), 0.016);
        assert!(app.show_debug);
        app.step(&FrameInput::idle().with_pressed(Action::ToggleDebug), 0.016);
        assert!(!app.show_debug);
    }

    #[test]
    fn test_cancel_walks_back_through_scenes() {
        let mut app = app_at(SceneRequest::Town { character: Some(Character::Parker) });
        let cancel = FrameInput::idle().with_pressed(Action::Cancel);

        app.step(&cancel, 0.016);
        assert_eq!(app.scene_name(), "CharacterSelect");
        app.step(&cancel, 0.016);
        assert_eq!(app.scene_name(), "Title");
    }

    #[test]
    fn test_select_then_enter_town() {
        let mut app = app_at(SceneRequest::CharacterSelect);
        app.step(&FrameInput::idle().with_pressed(Action::MoveRight), 0.016);
        app.step(&FrameInput::idle().with_pressed(Action::Confirm), 0.016);
        match &app.scene {
            Scene::Town(town) => assert_eq!(town.character(), Character::Jaxon),
            other => panic!("expected town, got {}", other.name()),
        }
    }
}
