//! North Haven Adventures: a small exploration game for kids
//!
//! Pick one of four kids and walk around a cartoon version of North Haven:
//! - Title screen with a flash-out start button
//! - Character select cards
//! - Top-down town with clickable locations
//!
//! Every texture is painted procedurally at startup; the only file read at
//! runtime is the optional `assets/config.ron`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod anim;
mod app;
mod characters;
mod config;
mod input;
mod physics;
mod scenes;
mod sprites;
mod ui;
mod viewport;
mod world;

use macroquad::logging::info;
use macroquad::prelude::*;
use app::AppState;
use config::GameConfig;
use ui::{hex, LETTERBOX, SKY};
use viewport::{Viewport, GAME_HEIGHT, GAME_WIDTH};

/// Longest frame step; keeps a stalled tab from teleporting the player
const MAX_FRAME_TIME: f32 = 0.1;

/// RNG seed from wall-clock seconds, at millisecond resolution
fn launch_seed(now: f64) -> u64 {
    (now * 1000.0) as u64
}

fn window_conf() -> Conf {
    Conf {
        window_title: "North Haven Adventures".to_owned(),
        window_width: GAME_WIDTH as i32,
        window_height: GAME_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    info!("=== North Haven Adventures v{} ===", VERSION);

    // Fresh cloud layout every launch
    macroquad::rand::srand(launch_seed(macroquad::miniquad::date::now()));

    let config = GameConfig::load().await;
    let mut app = AppState::new(config);

    loop {
        let viewport = Viewport::current();
        let dt = get_frame_time().min(MAX_FRAME_TIME);

        app.update(&viewport, dt);

        clear_background(hex(LETTERBOX));
        set_camera(&viewport.camera());
        draw_rectangle(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT, hex(SKY));
        app.draw();
        set_default_camera();

        next_frame().await;
    }
}
