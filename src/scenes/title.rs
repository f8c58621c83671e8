//! Title screen
//!
//! Gradient sky with drifting clouds, the floating game title, the four
//! kids bouncing in a row, and a start button that flashes the camera
//! before moving on to character select.

use macroquad::prelude::*;
use macroquad::rand::gen_range;
use crate::anim::{CameraFlash, Ease, Repeat, Timer, Tween};
use crate::characters::Character;
use crate::config::GameConfig;
use crate::input::{Action, FrameInput};
use crate::sprites::{SpriteKind, SpriteLibrary};
use crate::ui::{
    draw_label, draw_ringed_circle, draw_rounded_rect, hex, rgba, Rect, TextStyle,
    BUTTON_GREEN, BUTTON_GREEN_HOVER, FONT_BUTTON, FONT_MEDIUM, FONT_SUBTITLE, FONT_TITLE,
    ORIGIN_CENTER, ORIGIN_TOP_LEFT, SKY, SUBTITLE_FILL, SUBTITLE_STROKE, TITLE_STROKE,
};
use crate::viewport::{GAME_HEIGHT, GAME_WIDTH};
use super::{SceneRequest, SceneUpdate};

pub const VERSION_TEXT: &str = "v1.0 - Summer 2025 Edition";
pub const CREDITS_TEXT: &str = "Made with <3 by Dad for Jaxon, Parker, Vinny & Rocco";

const CLOUD_COUNT: usize = 5;
/// Clouds wrap once their centre passes this x
const CLOUD_EXIT_X: f32 = GAME_WIDTH + 100.0;
const CLOUD_ENTRY_X: f32 = -100.0;

/// Centre of the title block before it starts floating
const TITLE_Y: f32 = GAME_HEIGHT * 0.5 - 100.0;
const TITLE_FLOAT: f32 = 10.0;
const SUBTITLE_OFFSET: f32 = 80.0;

const PREVIEW_Y: f32 = 400.0;
const PREVIEW_BOUNCE_Y: f32 = 380.0;
const PREVIEW_RADIUS: f32 = 25.0;

/// Start button at rest (hit area never grows)
const BUTTON: Rect = Rect::new(362.0, 484.0, 300.0, 80.0);
/// Start button while hovered
const BUTTON_HOVER: Rect = Rect::new(352.0, 479.0, 320.0, 90.0);
const BUTTON_RADIUS: f32 = 20.0;

#[derive(Debug, Clone)]
struct Cloud {
    pos: Vec2,
    radius: f32,
    /// Pixels per second
    speed: f32,
}

impl Cloud {
    fn random() -> Self {
        let crossing = gen_range(20.0, 40.0);
        Self {
            pos: vec2(gen_range(0.0, GAME_WIDTH), gen_range(50.0, 200.0)),
            radius: gen_range(30.0, 60.0),
            speed: (CLOUD_EXIT_X - CLOUD_ENTRY_X) / crossing,
        }
    }

    fn update(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;
        if self.pos.x > CLOUD_EXIT_X {
            self.pos.x = CLOUD_ENTRY_X;
            self.pos.y = gen_range(50.0, 200.0);
        }
    }
}

#[derive(Debug, Clone)]
struct Preview {
    character: Character,
    x: f32,
    bounce: Tween,
}

pub struct TitleScene {
    clouds: Vec<Cloud>,
    title_float: Tween,
    previews: Vec<Preview>,
    heartbeat: Timer,
    pulse: Option<Tween>,
    button_hovered: bool,
    flash_duration: f32,
    flash: Option<CameraFlash>,
    /// Armed once start is clicked; fires the scene change
    leave: Option<Timer>,
}

impl TitleScene {
    pub fn new(config: &GameConfig) -> Self {
        let previews = Character::ALL
            .iter()
            .enumerate()
            .map(|(i, &character)| {
                // Staggered start: 200ms per kid before the tween exists,
                // plus 100ms per kid of tween delay
                let delay = i as f32 * 0.2 + i as f32 * 0.1;
                Preview {
                    character,
                    x: 200.0 + i as f32 * 200.0,
                    bounce: Tween::new(PREVIEW_Y, PREVIEW_BOUNCE_Y, 1.0)
                        .ease(Ease::BounceOut)
                        .yoyo(true)
                        .repeat(Repeat::Forever)
                        .delay(delay),
                }
            })
            .collect();

        Self {
            clouds: (0..CLOUD_COUNT).map(|_| Cloud::random()).collect(),
            title_float: Tween::new(TITLE_Y, TITLE_Y + TITLE_FLOAT, 2.0)
                .ease(Ease::SineInOut)
                .yoyo(true)
                .repeat(Repeat::Forever),
            previews,
            heartbeat: Timer::looping(1.0),
            pulse: None,
            button_hovered: false,
            flash_duration: config.flash_duration,
            flash: None,
            leave: None,
        }
    }

    /// Start was clicked and the scene is on its way out
    pub fn is_leaving(&self) -> bool {
        self.leave.is_some()
    }

    fn credits_scale(&self) -> f32 {
        self.pulse.as_ref().map_or(1.0, |p| p.value())
    }

    pub fn update(&mut self, input: &FrameInput, dt: f32) -> SceneUpdate {
        for cloud in &mut self.clouds {
            cloud.update(dt);
        }
        self.title_float.update(dt);
        for preview in &mut self.previews {
            preview.bounce.update(dt);
        }

        if let Some(pulse) = &mut self.pulse {
            pulse.update(dt);
            if pulse.is_finished() {
                self.pulse = None;
            }
        }
        if self.heartbeat.tick(dt) > 0 {
            self.pulse = Some(Tween::new(1.0, 1.05, 0.2).yoyo(true));
        }

        if let Some(flash) = &mut self.flash {
            flash.update(dt);
        }

        self.button_hovered = input.pointer.hovering(&BUTTON);
        let update = SceneUpdate::default().pointer_if(self.button_hovered);

        if let Some(leave) = &mut self.leave {
            if leave.tick(dt) > 0 {
                return SceneUpdate::go(SceneRequest::CharacterSelect);
            }
            return update;
        }

        if input.pointer.clicked(&BUTTON) || input.is_pressed(Action::Confirm) {
            self.flash = Some(CameraFlash::new(self.flash_duration));
            self.leave = Some(Timer::once(self.flash_duration));
        }

        update
    }

    pub fn draw(&self, sprites: &SpriteLibrary) {
        self.draw_background(sprites);

        // Title block
        let y = self.title_float.value();
        let title = TextStyle::new(FONT_TITLE, WHITE).stroke(hex(TITLE_STROKE), 8.0);
        let shadow = TextStyle::new(FONT_TITLE, Color::new(0.0, 0.0, 0.0, 0.3));
        let subtitle = TextStyle::new(FONT_SUBTITLE, hex(SUBTITLE_FILL)).stroke(hex(SUBTITLE_STROKE), 8.0);
        let cx = GAME_WIDTH * 0.5;
        draw_label("NORTH HAVEN", cx + 3.0, y + 3.0, ORIGIN_CENTER, &shadow);
        draw_label("NORTH HAVEN", cx, y, ORIGIN_CENTER, &title);
        draw_label("ADVENTURES", cx, y + SUBTITLE_OFFSET, ORIGIN_CENTER, &subtitle);

        // Kids
        let name_style = TextStyle::new(FONT_MEDIUM, WHITE);
        for preview in &self.previews {
            let center = vec2(preview.x, preview.bounce.value());
            draw_ringed_circle(center, PREVIEW_RADIUS, preview.character.color(), BLACK, 3.0);
            draw_label(preview.character.name(), preview.x, 440.0, ORIGIN_CENTER, &name_style);
        }

        // Start button
        let (rect, scale, fill) = if self.button_hovered {
            (BUTTON_HOVER, 1.1, BUTTON_GREEN_HOVER)
        } else {
            (BUTTON, 1.0, BUTTON_GREEN)
        };
        draw_rounded_rect(rect, BUTTON_RADIUS, hex(fill));
        let center = BUTTON.center();
        draw_label(
            "START ADVENTURE",
            center.x,
            center.y,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_BUTTON, WHITE).scale(scale),
        );

        // Footer
        let footer_y = GAME_HEIGHT - 30.0;
        draw_label(
            VERSION_TEXT,
            10.0,
            footer_y,
            ORIGIN_TOP_LEFT,
            &TextStyle::new(16.0, Color::new(1.0, 1.0, 1.0, 0.7)),
        );
        draw_label(
            CREDITS_TEXT,
            cx,
            footer_y,
            ORIGIN_CENTER,
            &TextStyle::new(20.0, WHITE).scale(self.credits_scale()),
        );

        if let Some(flash) = &self.flash {
            flash.draw();
        }
    }

    fn draw_background(&self, sprites: &SpriteLibrary) {
        match sprites.get(SpriteKind::Sky) {
            Some(sky) => draw_texture_ex(
                sky,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(GAME_WIDTH, GAME_HEIGHT)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT, hex(SKY)),
        }

        for cloud in &self.clouds {
            draw_circle(cloud.pos.x, cloud.pos.y, cloud.radius, rgba(0xFFFFFF, 0.3));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::CursorHint;
    use crate::ui::PointerState;

    fn scene() -> TitleScene {
        TitleScene::new(&GameConfig::default())
    }

    fn click_start() -> FrameInput {
        FrameInput::idle().with_pointer(PointerState::press(BUTTON.center()))
    }

    #[test]
    fn test_click_flashes_then_leaves() {
        let mut title = scene();
        let first = title.update(&click_start(), 0.016);
        assert_eq!(first.request, None);
        assert!(title.is_leaving());

        // Not yet: flash still running
        assert_eq!(title.update(&FrameInput::idle(), 0.2).request, None);
        let done = title.update(&FrameInput::idle(), 0.1);
        assert_eq!(done.request, Some(SceneRequest::CharacterSelect));
    }

    #[test]
    fn test_clicks_during_flash_are_ignored() {
        let mut title = scene();
        title.update(&click_start(), 0.0);
        title.update(&FrameInput::idle(), 0.2);
        let remaining = title.leave.as_ref().map(|t| t.remaining());

        // A re-armed timer would push the exit back to 0.25s from here
        assert_eq!(title.update(&click_start(), 0.0).request, None);
        assert_eq!(title.leave.as_ref().map(|t| t.remaining()), remaining);
        let confirm = FrameInput::idle().with_pressed(Action::Confirm);
        assert_eq!(title.update(&confirm, 0.0).request, None);

        let done = title.update(&FrameInput::idle(), 0.06);
        assert_eq!(done.request, Some(SceneRequest::CharacterSelect));
    }

    #[test]
    fn test_confirm_key_starts_too() {
        let mut title = scene();
        title.update(&FrameInput::idle().with_pressed(Action::Confirm), 0.016);
        assert!(title.is_leaving());
    }

    #[test]
    fn test_click_outside_button_does_nothing() {
        let mut title = scene();
        let input = FrameInput::idle().with_pointer(PointerState::press(vec2(10.0, 10.0)));
        title.update(&input, 0.016);
        assert!(!title.is_leaving());
    }

    #[test]
    fn test_hover_sets_pointer_cursor() {
        let mut title = scene();
        let hover = FrameInput::idle().with_pointer(PointerState::at(BUTTON.center()));
        assert_eq!(title.update(&hover, 0.016).cursor, CursorHint::Pointer);
        assert!(title.button_hovered);
        let away = FrameInput::idle().with_pointer(PointerState::at(vec2(0.0, 0.0)));
        assert_eq!(title.update(&away, 0.016).cursor, CursorHint::Default);
    }

    #[test]
    fn test_title_floats_within_ten_pixels() {
        let mut title = scene();
        for _ in 0..600 {
            title.update(&FrameInput::idle(), 0.016);
            let y = title.title_float.value();
            assert!((TITLE_Y..=TITLE_Y + TITLE_FLOAT).contains(&y));
        }
    }

    #[test]
    fn test_previews_start_staggered() {
        let mut title = scene();
        title.update(&FrameInput::idle(), 0.1);
        assert!(title.previews[0].bounce.value() < PREVIEW_Y);
        assert_eq!(title.previews[3].bounce.value(), PREVIEW_Y);
    }

    #[test]
    fn test_heartbeat_pulses_credits() {
        let mut title = scene();
        assert_eq!(title.credits_scale(), 1.0);
        title.update(&FrameInput::idle(), 1.0);
        title.update(&FrameInput::idle(), 0.2);
        assert!((title.credits_scale() - 1.05).abs() < 1e-3);
        title.update(&FrameInput::idle(), 0.3);
        assert_eq!(title.credits_scale(), 1.0);
    }

    #[test]
    fn test_clouds_wrap() {
        let mut cloud = Cloud { pos: vec2(CLOUD_EXIT_X - 1.0, 100.0), radius: 40.0, speed: 50.0 };
        cloud.update(0.1);
        assert_eq!(cloud.pos.x, CLOUD_ENTRY_X);
        assert!((50.0..=200.0).contains(&cloud.pos.y));
    }
}
