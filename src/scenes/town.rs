//! Town - the main game
//!
//! - Walk around North Haven with the arrow keys/WASD, d-pad, or by tapping
//! - Click a location for its info popup
//! - Esc (or B) closes the popup, or goes back to character select

use macroquad::prelude::*;
use macroquad::logging::info;
use crate::anim::Timer;
use crate::characters::Character;
use crate::config::GameConfig;
use crate::input::{Action, FrameInput};
use crate::physics::{velocity_towards, ArcadeBody};
use crate::sprites::{SpriteKind, SpriteLibrary};
use crate::ui::{
    draw_boxed_rect, draw_label, draw_ringed_circle, draw_tag, draw_texture_centered, hex, rgba,
    Rect, TextStyle, CLOSE_RED, FONT_BUTTON, FONT_LARGE, FONT_MEDIUM, FONT_SMALL, ORIGIN_CENTER,
    ORIGIN_LEFT_MIDDLE, ORIGIN_RIGHT_MIDDLE, ORIGIN_TOP_LEFT, ROAD,
};
use crate::viewport::GAME_WIDTH;
use crate::world::{Location, TownMap, PLAYER_SPAWN, ROAD_WIDTH};
use super::{SceneRequest, SceneUpdate};

const PLAYER_RADIUS: f32 = 20.0;
const LOCATION_HOVER_SCALE: f32 = 1.1;

const TOP_BAR_HEIGHT: f32 = 60.0;

const POPUP: Rect = Rect::new(512.0 - 300.0, 384.0 - 200.0, 600.0, 400.0);
const POPUP_CLOSE: Rect = Rect::new(512.0 - 75.0, 470.0 - 25.0, 150.0, 50.0);
const POPUP_MESSAGE: &str = "Coming soon!\nNew adventures await...";

/// Tag padding (x, y)
const TAG_PADDING: Vec2 = Vec2::new(4.0, 2.0);

pub struct TownScene {
    character: Character,
    map: TownMap,
    player: ArcadeBody,
    speed: f32,
    tap_move_duration: f32,
    /// Stops a tap-to-move walk when it fires
    tap_stop: Option<Timer>,
    hovered: Option<usize>,
    /// Index of the location whose popup is open
    popup: Option<usize>,
    close_hovered: bool,
}

impl TownScene {
    pub fn new(character: Character, config: &GameConfig) -> Self {
        let map = TownMap::north_haven();
        let player = ArcadeBody::circle(PLAYER_SPAWN, PLAYER_RADIUS, map.world_bounds()).with_world_bounds(true);
        Self {
            character,
            map,
            player,
            speed: config.player_speed,
            tap_move_duration: config.tap_move_duration,
            tap_stop: None,
            hovered: None,
            popup: None,
            close_hovered: false,
        }
    }

    pub fn character(&self) -> Character {
        self.character
    }

    pub fn player_position(&self) -> Vec2 {
        self.player.position
    }

    pub fn open_popup(&self) -> Option<&Location> {
        self.popup.and_then(|i| self.map.locations.get(i))
    }

    fn location_scale(&self, i: usize) -> f32 {
        if self.hovered == Some(i) { LOCATION_HOVER_SCALE } else { 1.0 }
    }

    /// Velocity from held direction keys, `None` when none is held.
    /// Left beats right and up beats down; axes are independent.
    fn keyboard_velocity(&self, input: &FrameInput) -> Option<Vec2> {
        let axis = |neg: Action, pos: Action| {
            if input.is_down(neg) {
                -self.speed
            } else if input.is_down(pos) {
                self.speed
            } else {
                0.0
            }
        };
        let held = [Action::MoveLeft, Action::MoveRight, Action::MoveUp, Action::MoveDown]
            .into_iter()
            .any(|a| input.is_down(a));
        held.then(|| vec2(axis(Action::MoveLeft, Action::MoveRight), axis(Action::MoveUp, Action::MoveDown)))
    }

    pub fn update(&mut self, input: &FrameInput, dt: f32) -> SceneUpdate {
        let pointer = &input.pointer;
        let mut update = SceneUpdate::default();

        if self.popup.is_some() {
            // Modal: only the close button sees the pointer
            self.hovered = None;
            self.close_hovered = pointer.hovering(&POPUP_CLOSE);
            update = update.pointer_if(self.close_hovered);
            if pointer.clicked(&POPUP_CLOSE) || input.is_pressed(Action::Cancel) {
                self.popup = None;
                self.close_hovered = false;
            }
        } else {
            if input.is_pressed(Action::Cancel) {
                return SceneUpdate::go(SceneRequest::CharacterSelect);
            }

            self.hovered = self.map.location_at(pointer.pos, self.hovered, LOCATION_HOVER_SCALE);
            update = update.pointer_if(self.hovered.is_some());

            if pointer.pressed {
                match self.hovered {
                    Some(i) => {
                        info!("Visiting {}", self.map.locations[i].name);
                        self.popup = Some(i);
                    }
                    None => {
                        let v = velocity_towards(self.player.position, pointer.pos, self.speed);
                        self.player.set_velocity(v.x, v.y);
                        self.tap_stop = Some(Timer::once(self.tap_move_duration));
                    }
                }
            }
        }

        match self.keyboard_velocity(input) {
            Some(v) => {
                self.tap_stop = None;
                self.player.set_velocity_x(v.x);
                self.player.set_velocity_y(v.y);
            }
            None => match &mut self.tap_stop {
                Some(timer) => {
                    if timer.tick(dt) > 0 {
                        self.tap_stop = None;
                        self.player.stop();
                    }
                }
                None => self.player.stop(),
            },
        }

        self.player.step(dt);
        update
    }

    pub fn draw(&self, sprites: &SpriteLibrary) {
        for road in &self.map.roads {
            draw_line(road.from.x, road.from.y, road.to.x, road.to.y, ROAD_WIDTH, hex(ROAD));
        }
        let sign_style = TextStyle::new(16.0, WHITE);
        for sign in &self.map.signs {
            draw_tag(sign.text, sign.pos.x, sign.pos.y, ORIGIN_TOP_LEFT, &sign_style, BLACK, TAG_PADDING);
        }

        for (i, location) in self.map.locations.iter().enumerate() {
            self.draw_location(location, self.location_scale(i), sprites);
        }

        self.draw_player(sprites);
        self.draw_top_bar();

        if let Some(location) = self.open_popup() {
            self.draw_popup(location);
        }
    }

    fn draw_location(&self, location: &Location, scale: f32, sprites: &SpriteLibrary) {
        let rect = location.rect().scaled(scale);
        draw_boxed_rect(rect, hex(location.color), BLACK, 3.0);
        if let Some(emblem) = sprites.get(location.building) {
            let (w, h) = location.building.size();
            draw_texture_centered(emblem, location.center, vec2(w as f32, h as f32) * scale, WHITE);
        }
        let label = location.label_pos();
        draw_tag(
            location.name,
            label.x,
            label.y,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_SMALL, BLACK).scale(scale),
            WHITE,
            TAG_PADDING,
        );
    }

    fn draw_player(&self, sprites: &SpriteLibrary) {
        let pos = self.player.position;
        draw_ringed_circle(pos, PLAYER_RADIUS, self.character.color(), BLACK, 3.0);
        if let Some(face) = sprites.get(SpriteKind::Character(self.character)) {
            draw_texture_centered(face, pos, Vec2::splat(PLAYER_RADIUS * 2.0), WHITE);
        }
        draw_tag(
            self.character.name(),
            pos.x,
            pos.y - 30.0,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_SMALL, BLACK),
            WHITE,
            TAG_PADDING,
        );
    }

    fn draw_top_bar(&self) {
        draw_rectangle(0.0, 0.0, GAME_WIDTH, TOP_BAR_HEIGHT, rgba(0x000000, 0.7));
        let mid = TOP_BAR_HEIGHT * 0.5;
        draw_label(
            &format!("Playing as: {}", self.character.name()),
            20.0,
            mid,
            ORIGIN_LEFT_MIDDLE,
            &TextStyle::new(FONT_LARGE, WHITE),
        );
        draw_label(
            "Arrow keys or tap to move",
            GAME_WIDTH - 20.0,
            mid,
            ORIGIN_RIGHT_MIDDLE,
            &TextStyle::new(FONT_MEDIUM, WHITE),
        );
    }

    fn draw_popup(&self, location: &Location) {
        draw_rectangle(POPUP.x, POPUP.y, POPUP.w, POPUP.h, rgba(0x000000, 0.9));
        draw_label(location.name, 512.0, 250.0, ORIGIN_CENTER, &TextStyle::new(FONT_BUTTON, WHITE));
        draw_label(POPUP_MESSAGE, 512.0, 350.0, ORIGIN_CENTER, &TextStyle::new(FONT_LARGE, WHITE));

        draw_rectangle(POPUP_CLOSE.x, POPUP_CLOSE.y, POPUP_CLOSE.w, POPUP_CLOSE.h, hex(CLOSE_RED));
        let c = POPUP_CLOSE.center();
        draw_label("CLOSE", c.x, c.y, ORIGIN_CENTER, &TextStyle::new(FONT_LARGE, WHITE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::CursorHint;
    use crate::ui::PointerState;

    fn town() -> TownScene {
        TownScene::new(Character::Jaxon, &GameConfig::default())
    }

    fn tap(p: Vec2) -> FrameInput {
        FrameInput::idle().with_pointer(PointerState::press(p))
    }

    /// Open ground: no location, no road sign
    const GRASS: Vec2 = Vec2::new(400.0, 650.0);

    #[test]
    fn test_spawns_at_house() {
        let t = town();
        assert_eq!(t.player_position(), PLAYER_SPAWN);
        assert_eq!(t.character(), Character::Jaxon);
    }

    #[test]
    fn test_keyboard_moves_at_speed() {
        let mut t = town();
        t.update(&FrameInput::idle().with_down(Action::MoveRight), 0.5);
        assert_eq!(t.player_position(), PLAYER_SPAWN + vec2(100.0, 0.0));

        // Diagonals are not normalised
        t.update(&FrameInput::idle().with_down(Action::MoveLeft).with_down(Action::MoveDown), 0.1);
        assert_eq!(t.player.velocity, vec2(-200.0, 200.0));
    }

    #[test]
    fn test_left_beats_right() {
        let t = town();
        let input = FrameInput::idle()
            .with_down(Action::MoveLeft)
            .with_down(Action::MoveRight)
            .with_down(Action::MoveUp)
            .with_down(Action::MoveDown);
        assert_eq!(t.keyboard_velocity(&input), Some(vec2(-200.0, -200.0)));
        assert_eq!(t.keyboard_velocity(&FrameInput::idle()), None);
    }

    #[test]
    fn test_releasing_keys_stops() {
        let mut t = town();
        t.update(&FrameInput::idle().with_down(Action::MoveDown), 0.1);
        t.update(&FrameInput::idle(), 0.1);
        assert_eq!(t.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_tap_moves_then_stops() {
        let mut t = town();
        t.update(&tap(GRASS), 0.1);
        assert!((t.player.velocity.length() - 200.0).abs() < 1e-3);
        let dir = (GRASS - PLAYER_SPAWN).normalize();
        assert!(t.player.velocity.normalize().dot(dir) > 0.999);

        t.update(&FrameInput::idle(), 0.3);
        assert_ne!(t.player.velocity, Vec2::ZERO);
        t.update(&FrameInput::idle(), 0.3);
        assert_eq!(t.player.velocity, Vec2::ZERO);
        let rest = t.player_position();
        t.update(&FrameInput::idle(), 0.5);
        assert_eq!(t.player_position(), rest);
    }

    #[test]
    fn test_second_tap_rearms_stop_timer() {
        let mut t = town();
        t.update(&tap(GRASS), 0.0);
        t.update(&FrameInput::idle(), 0.4);
        t.update(&tap(GRASS), 0.0);
        t.update(&FrameInput::idle(), 0.4);
        assert_ne!(t.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_keys_replace_tap() {
        let mut t = town();
        t.update(&tap(GRASS), 0.0);
        t.update(&FrameInput::idle().with_down(Action::MoveUp), 0.1);
        assert_eq!(t.player.velocity, vec2(0.0, -200.0));
        t.update(&FrameInput::idle(), 0.1);
        assert_eq!(t.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_player_stays_in_world() {
        let mut t = town();
        t.update(&FrameInput::idle().with_down(Action::MoveLeft).with_down(Action::MoveUp), 5.0);
        assert_eq!(t.player_position(), vec2(PLAYER_RADIUS, PLAYER_RADIUS));
    }

    #[test]
    fn test_click_location_opens_popup_without_moving() {
        let mut t = town();
        let school = t.map.locations[3].center;
        let update = t.update(&tap(school), 0.1);
        assert_eq!(update.cursor, CursorHint::Pointer);
        assert_eq!(t.open_popup().map(|l| l.name), Some("Green Acres School"));
        assert_eq!(t.player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_popup_blocks_pointer() {
        let mut t = town();
        t.update(&tap(t.map.locations[4].center), 0.0);

        // Taps elsewhere neither move the player nor open another popup
        t.update(&tap(GRASS), 0.1);
        assert_eq!(t.player.velocity, Vec2::ZERO);
        t.update(&tap(t.map.locations[0].center), 0.1);
        assert_eq!(t.open_popup().map(|l| l.name), Some("GameStop"));

        t.update(&tap(POPUP_CLOSE.center()), 0.1);
        assert!(t.open_popup().is_none());
    }

    #[test]
    fn test_cancel_closes_popup_before_leaving() {
        let mut t = town();
        t.update(&tap(t.map.locations[2].center), 0.0);
        let cancel = FrameInput::idle().with_pressed(Action::Cancel);
        assert_eq!(t.update(&cancel, 0.1).request, None);
        assert!(t.open_popup().is_none());
        assert_eq!(t.update(&cancel, 0.1).request, Some(SceneRequest::CharacterSelect));
    }

    #[test]
    fn test_hover_grows_location() {
        let mut t = town();
        let park = t.map.locations[2].center;
        t.update(&FrameInput::idle().with_pointer(PointerState::at(park)), 0.0);
        assert_eq!(t.location_scale(2), LOCATION_HOVER_SCALE);
        assert_eq!(t.location_scale(0), 1.0);
    }
}
