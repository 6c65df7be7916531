//! Library exports for the RGBA color mixer.
//!
//! The color model, headless view state and controller carry no GUI
//! dependency and can be driven directly (as the tests do); the [`gui`]
//! module binds them to an iced window.

pub mod config;
pub mod controller;
pub mod gui;
pub mod menu;
pub mod model;
pub mod view;

pub use config::Config;
pub use controller::MixerController;
pub use model::{ColorModel, Rgba};
