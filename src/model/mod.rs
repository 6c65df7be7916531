//! Observable color model.
//!
//! [`ColorModel`] owns four bounded channels and pushes a snapshot of the
//! color to every registered [`Observer`] after each mutation. Observers
//! receive a plain [`Rgba`] value rather than a handle on the model, so a
//! notification callback can never re-enter the model.

pub mod color;

pub use color::{BLACK, Channel, MAX_ALPHA, MAX_RGB, Preset, PresetParseError, Rgba, WHITE};

use log::{debug, warn};

/// Receives the current color after every model mutation.
pub trait Observer {
    fn notify(&mut self, color: Rgba);
}

impl<F> Observer for F
where
    F: FnMut(Rgba),
{
    fn notify(&mut self, color: Rgba) {
        self(color)
    }
}

/// Mutable RGBA value holder with change notification.
///
/// Every setter and preset notifies all observers exactly once, even when the
/// stored value does not change.
pub struct ColorModel {
    color: Rgba,
    observers: Vec<Box<dyn Observer>>,
}

impl ColorModel {
    /// Creates a model holding `color` with no observers attached.
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all future changes.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.channel(channel)
    }

    pub fn red(&self) -> u8 {
        self.color.r
    }

    pub fn green(&self) -> u8 {
        self.color.g
    }

    pub fn blue(&self) -> u8 {
        self.color.b
    }

    pub fn alpha(&self) -> u8 {
        self.color.a
    }

    /// Stores `value` in `channel` and notifies observers.
    ///
    /// Values outside the channel's domain are clamped to the nearest bound
    /// and a warning is logged.
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        let (stored, clamped) = channel.clamp(value);
        if clamped {
            warn!(
                "{} value {} outside 0-{}, clamping to {}",
                channel,
                value,
                channel.max(),
                stored
            );
        }
        self.color.set_channel(channel, stored);
        self.notify_observers();
    }

    pub fn set_red(&mut self, value: i32) {
        self.set_channel(Channel::Red, value);
    }

    pub fn set_green(&mut self, value: i32) {
        self.set_channel(Channel::Green, value);
    }

    pub fn set_blue(&mut self, value: i32) {
        self.set_channel(Channel::Blue, value);
    }

    pub fn set_alpha(&mut self, value: i32) {
        self.set_channel(Channel::Alpha, value);
    }

    /// Sets red, green and blue to the preset's values, keeping alpha.
    ///
    /// Observers are notified once, after all three channels are stored.
    pub fn apply_preset(&mut self, preset: Preset) {
        let [r, g, b] = preset.rgb();
        self.color = Rgba::new(r, g, b, self.color.a);
        debug!("Applied preset {}", preset);
        self.notify_observers();
    }

    pub fn as_black(&mut self) {
        self.apply_preset(Preset::Black);
    }

    pub fn as_red(&mut self) {
        self.apply_preset(Preset::Red);
    }

    pub fn as_green(&mut self) {
        self.apply_preset(Preset::Green);
    }

    pub fn as_blue(&mut self) {
        self.apply_preset(Preset::Blue);
    }

    pub fn as_cyan(&mut self) {
        self.apply_preset(Preset::Cyan);
    }

    pub fn as_magenta(&mut self) {
        self.apply_preset(Preset::Magenta);
    }

    pub fn as_yellow(&mut self) {
        self.apply_preset(Preset::Yellow);
    }

    pub fn as_white(&mut self) {
        self.apply_preset(Preset::White);
    }

    fn notify_observers(&mut self) {
        let color = self.color;
        debug!(
            "Model changed to {:?}, notifying {} observer(s)",
            color,
            self.observers.len()
        );
        for observer in &mut self.observers {
            observer.notify(color);
        }
    }
}

impl Default for ColorModel {
    /// Opaque white, the startup color of the mixer.
    fn default() -> Self {
        Self::new(WHITE)
    }
}

impl std::fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorModel")
            .field("color", &self.color)
            .field("observers", &self.observers.len())
            .finish()
    }
}
