//! Keyboard decoding for one rendered frame.

use app::app_loop::FrameInput;
use macroquad::prelude::{KeyCode, is_key_pressed};

pub fn capture_frame_input() -> FrameInput {
    FrameInput {
        quit: is_key_pressed(KeyCode::Escape),
        toggle_pause: is_key_pressed(KeyCode::Space),
        start_maze: is_key_pressed(KeyCode::N),
    }
}
