//! Frame-by-frame application state, kept free of rendering calls so it can
//! be driven by tests with fabricated input.

use core::{FrameOutput, SceneDirector};

/// Input relevant to one frame, already decoded from raw key events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub toggle_pause: bool,
    /// Manual request to start one extra maze immediately.
    pub start_maze: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Running,
    Paused,
}

pub struct AppState {
    pub mode: AppMode,
    director: SceneDirector,
}

impl AppState {
    pub fn new(director: SceneDirector) -> Self {
        Self { mode: AppMode::Running, director }
    }

    /// Process one frame of input and, unless paused, advance the scene by
    /// one tick. `None` means the canvas is left untouched this frame.
    pub fn tick(&mut self, input: &FrameInput) -> Option<FrameOutput> {
        if input.toggle_pause {
            self.mode = match self.mode {
                AppMode::Running => AppMode::Paused,
                AppMode::Paused => AppMode::Running,
            };
        }
        if input.start_maze {
            self.director.start_maze();
        }

        match self.mode {
            AppMode::Running => Some(self.director.tick()),
            AppMode::Paused => None,
        }
    }

    pub fn director(&self) -> &SceneDirector {
        &self.director
    }
}

#[cfg(test)]
mod tests {
    use core::SceneConfig;

    use super::*;

    fn test_app(seed: u64) -> AppState {
        let director =
            SceneDirector::new(SceneConfig::default(), seed).expect("default config is valid");
        AppState::new(director)
    }

    #[test]
    fn running_app_advances_the_scene_each_frame() {
        let mut app = test_app(1);
        assert!(app.tick(&FrameInput::default()).is_some());
        assert!(app.tick(&FrameInput::default()).is_some());
        assert_eq!(app.director().current_tick(), 2);
    }

    #[test]
    fn pause_freezes_the_scene_until_toggled_back() {
        let mut app = test_app(2);
        let pause = FrameInput { toggle_pause: true, ..FrameInput::default() };

        assert!(app.tick(&pause).is_none());
        assert_eq!(app.mode, AppMode::Paused);
        assert!(app.tick(&FrameInput::default()).is_none());
        assert_eq!(app.director().current_tick(), 0);

        assert!(app.tick(&pause).is_some());
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.director().current_tick(), 1);
    }

    #[test]
    fn manual_start_adds_a_maze_even_while_paused() {
        let mut app = test_app(3);
        let _paused = app.tick(&FrameInput { toggle_pause: true, ..FrameInput::default() });

        let before = app.director().stats().live_mazes;
        let _frame = app.tick(&FrameInput { start_maze: true, ..FrameInput::default() });
        assert_eq!(app.director().stats().live_mazes, before + 1);
    }
}
