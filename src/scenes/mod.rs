//! Scenes
//!
//! Fixed set of screens, one active at a time:
//! Preloader -> Title -> CharacterSelect -> Town.
//!
//! Every scene splits into `update` (pure state machine over a
//! [`FrameInput`], tested headless) and `draw` (macroquad calls only).
//! Switching scenes always builds the next one from scratch; nothing
//! carries over except what the [`SceneRequest`] holds.

mod preloader;
mod title;
mod character_select;
mod town;

pub use preloader::PreloaderScene;
pub use title::TitleScene;
pub use character_select::CharacterSelectScene;
pub use town::TownScene;

use crate::characters::Character;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::sprites::SpriteLibrary;

/// Ask the app to start another scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    Title,
    CharacterSelect,
    /// `None` falls back to the configured default character
    Town { character: Option<Character> },
}

/// Mouse cursor a scene wants this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorHint {
    #[default]
    Default,
    /// Hand cursor over something clickable
    Pointer,
}

/// Outcome of one scene update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneUpdate {
    pub request: Option<SceneRequest>,
    pub cursor: CursorHint,
}

impl SceneUpdate {
    pub fn go(request: SceneRequest) -> Self {
        Self { request: Some(request), ..Default::default() }
    }

    pub fn pointer_if(mut self, hovering: bool) -> Self {
        if hovering {
            self.cursor = CursorHint::Pointer;
        }
        self
    }
}

/// The active scene
pub enum Scene {
    Preloader(PreloaderScene),
    Title(TitleScene),
    CharacterSelect(CharacterSelectScene),
    Town(TownScene),
}

impl Scene {
    /// Build a fresh scene for a request
    pub fn start(request: SceneRequest, config: &GameConfig) -> Self {
        match request {
            SceneRequest::Title => Scene::Title(TitleScene::new(config)),
            SceneRequest::CharacterSelect => Scene::CharacterSelect(CharacterSelectScene::new()),
            SceneRequest::Town { character } => {
                Scene::Town(TownScene::new(character.unwrap_or(config.default_character), config))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Preloader(_) => "Preloader",
            Scene::Title(_) => "Title",
            Scene::CharacterSelect(_) => "CharacterSelect",
            Scene::Town(_) => "Town",
        }
    }

    pub fn update(&mut self, input: &FrameInput, dt: f32, sprites: &mut SpriteLibrary) -> SceneUpdate {
        match self {
            Scene::Preloader(s) => s.update(sprites),
            Scene::Title(s) => s.update(input, dt),
            Scene::CharacterSelect(s) => s.update(input),
            Scene::Town(s) => s.update(input, dt),
        }
    }

    pub fn draw(&self, sprites: &SpriteLibrary) {
        match self {
            Scene::Preloader(s) => s.draw(),
            Scene::Title(s) => s.draw(sprites),
            Scene::CharacterSelect(s) => s.draw(sprites),
            Scene::Town(s) => s.draw(sprites),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_town_request_uses_default_character() {
        let config = GameConfig { default_character: Character::Rocco, ..GameConfig::default() };
        match Scene::start(SceneRequest::Town { character: None }, &config) {
            Scene::Town(town) => assert_eq!(town.character(), Character::Rocco),
            other => panic!("expected town, got {}", other.name()),
        }
        match Scene::start(SceneRequest::Town { character: Some(Character::Parker) }, &config) {
            Scene::Town(town) => assert_eq!(town.character(), Character::Parker),
            other => panic!("expected town, got {}", other.name()),
        }
    }

    #[test]
    fn test_start_names() {
        let config = GameConfig::default();
        assert_eq!(Scene::start(SceneRequest::Title, &config).name(), "Title");
        assert_eq!(Scene::start(SceneRequest::CharacterSelect, &config).name(), "CharacterSelect");
    }
}
