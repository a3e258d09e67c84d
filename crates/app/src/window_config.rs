//! Window configuration for the desktop app.

use app::APP_NAME;
use app::settings_file::SettingsFile;
use macroquad::window::Conf;

const DEFAULT_WINDOW_WIDTH: i32 = 1024;
const DEFAULT_WINDOW_HEIGHT: i32 = 720;

pub fn build_window_conf() -> Conf {
    window_conf_from(&SettingsFile::load_or_default())
}

fn window_conf_from(settings: &SettingsFile) -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        fullscreen: settings.fullscreen,
        high_dpi: true,
        ..Default::default()
    }
}
