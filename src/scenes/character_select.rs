//! Character select
//!
//! Four cards in a row; pick one, then START GAME enters the town as that
//! character. Mouse, keyboard and gamepad all drive the same selection.

use macroquad::prelude::*;
use crate::characters::Character;
use crate::input::{Action, FrameInput};
use crate::sprites::{SpriteKind, SpriteLibrary};
use crate::ui::{
    draw_boxed_rect, draw_label, draw_ringed_circle, draw_texture_centered, hex, Rect, TextStyle,
    BUTTON_GREEN, CARD_MUSIC, CARD_SPECIAL, DISABLED_FILL, DISABLED_TEXT, FONT_HEADING,
    FONT_LARGE, FONT_SMALL, ORIGIN_CENTER,
};
use super::{SceneRequest, SceneUpdate};

const CARD_SIZE: Vec2 = Vec2::new(180.0, 240.0);
const CARD_Y: f32 = 334.0;
const CARD_FIRST_X: f32 = 212.0;
const CARD_SPACING: f32 = 200.0;

const HOVER_SCALE: f32 = 1.05;
const SELECTED_SCALE: f32 = 1.1;

const SPRITE_RADIUS: f32 = 50.0;

const START_BUTTON: Rect = Rect::new(512.0 - 125.0, 584.0 - 30.0, 250.0, 60.0);

fn card_center(i: usize) -> Vec2 {
    vec2(CARD_FIRST_X + i as f32 * CARD_SPACING, CARD_Y)
}

fn card_rect(i: usize) -> Rect {
    let c = card_center(i);
    Rect::from_center(c.x, c.y, CARD_SIZE.x, CARD_SIZE.y)
}

pub struct CharacterSelectScene {
    hovered: Option<usize>,
    selected: Option<Character>,
    start_hovered: bool,
}

impl CharacterSelectScene {
    pub fn new() -> Self {
        Self { hovered: None, selected: None, start_hovered: false }
    }

    pub fn selected(&self) -> Option<Character> {
        self.selected
    }

    /// Selected wins over hovered
    fn card_scale(&self, i: usize) -> f32 {
        if self.selected.map(|c| c.index()) == Some(i) {
            SELECTED_SCALE
        } else if self.hovered == Some(i) {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    /// The sprite keeps its hover size while its card is selected
    fn sprite_scale(&self, i: usize) -> f32 {
        let selected = self.selected.map(|c| c.index()) == Some(i);
        if selected || self.hovered == Some(i) { HOVER_SCALE } else { 1.0 }
    }

    /// Card under `p`, hit-tested at its drawn size
    fn card_at(&self, p: Vec2) -> Option<usize> {
        (0..Character::ALL.len()).find(|&i| card_rect(i).scaled(self.card_scale(i)).contains(p))
    }

    /// Step the selection by `delta`, wrapping. With nothing selected,
    /// forward picks the first card and backward the last.
    fn cycle(&mut self, delta: isize) {
        let n = Character::ALL.len() as isize;
        let next = match self.selected {
            Some(c) => (c.index() as isize + delta).rem_euclid(n),
            None if delta > 0 => 0,
            None => n - 1,
        };
        self.selected = Character::from_index(next as usize);
    }

    pub fn update(&mut self, input: &FrameInput) -> SceneUpdate {
        if input.is_pressed(Action::Cancel) {
            return SceneUpdate::go(SceneRequest::Title);
        }

        let pointer = &input.pointer;
        self.hovered = self.card_at(pointer.pos);
        self.start_hovered = pointer.hovering(&START_BUTTON);

        if pointer.pressed {
            if let Some(i) = self.hovered {
                self.selected = Character::from_index(i);
            }
        }
        if input.is_pressed(Action::MoveRight) {
            self.cycle(1);
        }
        if input.is_pressed(Action::MoveLeft) {
            self.cycle(-1);
        }

        let update = SceneUpdate::default()
            .pointer_if(self.hovered.is_some() || (self.start_hovered && self.selected.is_some()));

        let start = pointer.clicked(&START_BUTTON) || input.is_pressed(Action::Confirm);
        match self.selected {
            Some(character) if start => SceneUpdate {
                request: Some(SceneRequest::Town { character: Some(character) }),
                ..update
            },
            _ => update,
        }
    }

    pub fn draw(&self, sprites: &SpriteLibrary) {
        draw_label(
            "CHOOSE YOUR CHARACTER",
            512.0,
            80.0,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_HEADING, WHITE).stroke(BLACK, 6.0),
        );

        for (i, character) in Character::ALL.iter().enumerate() {
            self.draw_card(i, *character, sprites);
        }

        let (fill, text) = if self.selected.is_some() {
            (hex(BUTTON_GREEN), WHITE)
        } else {
            (hex(DISABLED_FILL), hex(DISABLED_TEXT))
        };
        draw_rectangle(START_BUTTON.x, START_BUTTON.y, START_BUTTON.w, START_BUTTON.h, fill);
        let c = START_BUTTON.center();
        draw_label("START GAME", c.x, c.y, ORIGIN_CENTER, &TextStyle::new(28.0, text));
    }

    fn draw_card(&self, i: usize, character: Character, sprites: &SpriteLibrary) {
        let scale = self.card_scale(i);
        let is_selected = self.selected == Some(character);
        let (stroke, thickness) = if is_selected { (character.color(), 6.0) } else { (BLACK, 4.0) };
        draw_boxed_rect(card_rect(i).scaled(scale), WHITE, stroke, thickness);

        // Only the card and sprite grow; the text stays put
        let c = card_center(i);
        let sprite_center = vec2(c.x, c.y - 30.0);
        let r = SPRITE_RADIUS * self.sprite_scale(i);
        draw_ringed_circle(sprite_center, r, character.color(), BLACK, 3.0);
        if let Some(face) = sprites.get(SpriteKind::Character(character)) {
            draw_texture_centered(face, sprite_center, Vec2::splat(r * 2.0), WHITE);
        }

        draw_label(character.name(), c.x, c.y + 50.0, ORIGIN_CENTER, &TextStyle::new(FONT_LARGE, BLACK));
        draw_label(
            character.special(),
            c.x,
            c.y + 80.0,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_SMALL, hex(CARD_SPECIAL)),
        );
        draw_label(
            &format!("~ {}", character.music()),
            c.x,
            c.y + 100.0,
            ORIGIN_CENTER,
            &TextStyle::new(12.0, hex(CARD_MUSIC)),
        );
    }
}

impl Default for CharacterSelectScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::CursorHint;
    use crate::ui::PointerState;

    fn click(p: Vec2) -> FrameInput {
        FrameInput::idle().with_pointer(PointerState::press(p))
    }

    #[test]
    fn test_start_disabled_without_selection() {
        let mut scene = CharacterSelectScene::new();
        let update = scene.update(&click(START_BUTTON.center()));
        assert_eq!(update.request, None);
        assert_eq!(update.cursor, CursorHint::Default);
        assert_eq!(scene.update(&FrameInput::idle().with_pressed(Action::Confirm)).request, None);
    }

    #[test]
    fn test_click_card_then_start() {
        let mut scene = CharacterSelectScene::new();
        scene.update(&click(card_center(2)));
        assert_eq!(scene.selected(), Some(Character::Vinny));
        assert_eq!(scene.card_scale(2), SELECTED_SCALE);

        let update = scene.update(&click(START_BUTTON.center()));
        assert_eq!(update.request, Some(SceneRequest::Town { character: Some(Character::Vinny) }));
    }

    #[test]
    fn test_selected_sprite_keeps_hover_size_after_pointer_leaves() {
        let mut scene = CharacterSelectScene::new();
        scene.update(&click(card_center(2)));
        scene.update(&FrameInput::idle().with_pointer(PointerState::at(vec2(5.0, 5.0))));
        assert_eq!(scene.card_scale(2), SELECTED_SCALE);
        assert_eq!(scene.sprite_scale(2), HOVER_SCALE);
        assert_eq!(scene.sprite_scale(1), 1.0);
    }

    #[test]
    fn test_selecting_another_card_resets_the_first() {
        let mut scene = CharacterSelectScene::new();
        scene.update(&click(card_center(0)));
        scene.update(&click(card_center(3)));
        assert_eq!(scene.selected(), Some(Character::Rocco));
        assert_eq!(scene.card_scale(0), 1.0);
        assert_eq!(scene.sprite_scale(0), 1.0);
    }

    #[test]
    fn test_hover_scale() {
        let mut scene = CharacterSelectScene::new();
        let hover = FrameInput::idle().with_pointer(PointerState::at(card_center(1)));
        let update = scene.update(&hover);
        assert_eq!(update.cursor, CursorHint::Pointer);
        assert_eq!(scene.card_scale(1), HOVER_SCALE);
        assert_eq!(scene.sprite_scale(1), HOVER_SCALE);

        scene.update(&FrameInput::idle().with_pointer(PointerState::at(vec2(5.0, 5.0))));
        assert_eq!(scene.card_scale(1), 1.0);
    }

    #[test]
    fn test_keyboard_cycles_with_wrap() {
        let mut scene = CharacterSelectScene::new();
        let left = FrameInput::idle().with_pressed(Action::MoveLeft);
        let right = FrameInput::idle().with_pressed(Action::MoveRight);

        scene.update(&left);
        assert_eq!(scene.selected(), Some(Character::Rocco));
        scene.update(&right);
        assert_eq!(scene.selected(), Some(Character::Jaxon));
        scene.update(&left);
        assert_eq!(scene.selected(), Some(Character::Rocco));

        let mut fresh = CharacterSelectScene::new();
        fresh.update(&right);
        assert_eq!(fresh.selected(), Some(Character::Jaxon));

        let go = fresh.update(&FrameInput::idle().with_pressed(Action::Confirm));
        assert_eq!(go.request, Some(SceneRequest::Town { character: Some(Character::Jaxon) }));
    }

    #[test]
    fn test_cancel_returns_to_title() {
        let mut scene = CharacterSelectScene::new();
        let update = scene.update(&FrameInput::idle().with_pressed(Action::Cancel));
        assert_eq!(update.request, Some(SceneRequest::Title));
    }

    #[test]
    fn test_start_button_does_not_overlap_cards() {
        for i in 0..4 {
            assert!(card_rect(i).scaled(SELECTED_SCALE).bottom() < START_BUTTON.y);
        }
    }
}
