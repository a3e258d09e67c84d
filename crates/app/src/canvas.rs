//! Persistent off-screen canvas the maze segments accumulate on.
//!
//! macroquad clears the backbuffer every frame, so segments are drawn into a
//! render target once and the target is blitted to the screen each frame.
//! The whole-canvas fade is a translucent white rectangle over the target.

use core::{DrawCommand, FrameOutput, Rgb, SceneConfig};
use macroquad::prelude::*;

const FADE_ALPHA: f32 = 0.5;

pub struct MazeCanvas {
    target: RenderTarget,
    camera: Camera2D,
    size: Vec2,
    /// Pixels per grid unit on each axis.
    cell: Vec2,
}

impl MazeCanvas {
    pub fn new(config: &SceneConfig, width: f32, height: f32) -> Self {
        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Linear);

        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width, height));
        camera.render_target = Some(target.clone());

        let cell = vec2(width / config.grid_width as f32, height / config.grid_height as f32);
        let canvas = Self { target, camera, size: vec2(width, height), cell };
        canvas.blank();
        canvas
    }

    /// Reset the canvas to the plain white background.
    pub fn blank(&self) {
        set_camera(&self.camera);
        draw_rectangle(0.0, 0.0, self.size.x, self.size.y, WHITE);
        set_default_camera();
    }

    /// Composite one frame's segments, then the fade if requested.
    pub fn apply(&self, frame: &FrameOutput) {
        if frame.draws.is_empty() && !frame.fade {
            return;
        }

        set_camera(&self.camera);
        for command in &frame.draws {
            let (from, to) = segment_endpoints(command, self.cell);
            draw_line(from.x, from.y, to.x, to.y, command.stroke_width, rgb_color(command.color));
        }
        if frame.fade {
            draw_rectangle(
                0.0,
                0.0,
                self.size.x,
                self.size.y,
                Color::new(1.0, 1.0, 1.0, FADE_ALPHA),
            );
        }
        set_default_camera();
    }

    /// Blit the accumulated canvas to the screen, stretched to the window.
    pub fn present(&self) {
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}

fn rgb_color(color: Rgb) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Pixel-space endpoints of one segment. The far end is pushed half a stroke
/// width along the carve direction so consecutive strokes join without gaps.
fn segment_endpoints(command: &DrawCommand, cell: Vec2) -> (Vec2, Vec2) {
    let segment = command.segment;
    let direction = vec2(
        (segment.to.x - segment.from.x) as f32,
        (segment.to.y - segment.from.y) as f32,
    );
    let from = vec2(segment.from.x as f32 * cell.x, segment.from.y as f32 * cell.y);
    let to = vec2(segment.to.x as f32 * cell.x, segment.to.y as f32 * cell.y)
        + direction * (command.stroke_width / 2.0);
    (from, to)
}

#[cfg(test)]
mod tests {
    use core::{GridPoint, Segment};

    use super::*;

    fn command(from: (i32, i32), to: (i32, i32), stroke_width: f32) -> DrawCommand {
        DrawCommand {
            segment: Segment {
                from: GridPoint::new(from.0, from.1),
                to: GridPoint::new(to.0, to.1),
            },
            color: Rgb { r: 0, g: 0, b: 0 },
            stroke_width,
        }
    }

    #[test]
    fn endpoints_scale_grid_units_to_pixels() {
        let (from, to) = segment_endpoints(&command((2, 3), (3, 3), 4.0), vec2(16.0, 15.0));
        assert_eq!(from, vec2(32.0, 45.0));
        // 16px cell plus half the 4px stroke along +x.
        assert_eq!(to, vec2(48.0 + 2.0, 45.0));
    }

    #[test]
    fn correction_follows_the_carve_direction() {
        let (_, up) = segment_endpoints(&command((1, 1), (1, 0), 6.0), vec2(10.0, 10.0));
        assert_eq!(up, vec2(10.0, -3.0));

        let (_, diagonal) = segment_endpoints(&command((1, 1), (2, 2), 6.0), vec2(10.0, 10.0));
        assert_eq!(diagonal, vec2(23.0, 23.0));
    }

    #[test]
    fn rgb_maps_to_opaque_color() {
        let color = rgb_color(Rgb { r: 255, g: 0, b: 128 });
        assert_eq!(color.a, 1.0);
        assert_eq!(color.r, 1.0);
    }
}
