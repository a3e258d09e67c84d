use std::time::Duration;

use app::app_loop::AppState;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::settings_file::SettingsFile;
use app::{APP_NAME, format_snapshot_hash};
use core::SceneDirector;
use macroquad::prelude::*;

mod canvas;
mod frame_input;
mod window_config;

use canvas::MazeCanvas;
use frame_input::capture_frame_input;
use window_config::build_window_conf;

/// Floor on the frame interval so the growth stays watchable on fast
/// machines; vsync usually paces us slower anyway.
const MIN_FRAME_TIME: Duration = Duration::from_millis(30);

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(error) => {
            eprintln!("{APP_NAME}: {error}");
            return;
        }
    };

    let config = SettingsFile::load_or_default().to_scene_config();
    let director = match SceneDirector::new(config, seed) {
        Ok(director) => director,
        Err(error) => {
            eprintln!("{APP_NAME}: invalid configuration: {error}");
            return;
        }
    };

    println!("{APP_NAME}: seed {seed}");

    let canvas = MazeCanvas::new(&config, screen_width(), screen_height());
    let mut app = AppState::new(director);

    loop {
        let input = capture_frame_input();
        if input.quit {
            break;
        }

        if let Some(frame) = app.tick(&input) {
            canvas.apply(&frame);
        }

        clear_background(WHITE);
        canvas.present();

        let spent = Duration::from_secs_f32(get_frame_time());
        if spent < MIN_FRAME_TIME {
            std::thread::sleep(MIN_FRAME_TIME - spent);
        }
        next_frame().await;
    }

    println!(
        "{APP_NAME}: stopped after {} ticks, snapshot {}",
        app.director().current_tick(),
        format_snapshot_hash(app.director().snapshot_hash())
    );
}
