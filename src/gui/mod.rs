//! Iced front-end for the mixer.
//!
//! The window is a thin shell: every message is handed to the
//! [`MixerController`](crate::controller::MixerController), and the widgets
//! are rebuilt from the controller's view state on each frame.

mod app;
mod messages;
mod style;

pub use app::{MixerApp, MixerFlags};
pub use messages::Message;

use iced::{Application, Settings, Size};
use log::info;

use crate::config::Config;
use crate::model::Preset;

/// Opens the mixer window and blocks until it is closed.
pub fn run(config: Config, preset: Option<Preset>) -> iced::Result {
    let size = Size::new(config.window.width, config.window.height);
    let resizable = config.window.resizable;

    let mut settings = Settings::with_flags(MixerFlags { config, preset });
    settings.window.size = size;
    settings.window.resizable = resizable;
    settings.window.decorations = true;

    info!("Opening mixer window ({}x{})", size.width, size.height);
    MixerApp::run(settings)
}
