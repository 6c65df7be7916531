//! Headless view state bound to the color model.
//!
//! [`ColorView`] holds what the window displays: four range controls and the
//! swatch. A refresh always re-syncs every field from the color it is given.
//! Control movements caused by a refresh are queued as
//! [`ChangeOrigin::Program`] events, the same way a platform slider reports
//! programmatic position changes, so the controller can see and drop them.

pub mod control;
pub mod swatch;

pub use control::{ChangeOrigin, ProgressChange, RangeControl};
pub use swatch::{CONTRAST_THRESHOLD, Swatch, contrast_text_color, label_text};

use crate::model::{Channel, Rgba};

#[derive(Debug, Clone)]
pub struct ColorView {
    controls: [RangeControl; 4],
    swatch: Swatch,
    pending: Vec<ProgressChange>,
    refresh_count: usize,
}

impl ColorView {
    /// Creates a view with all controls at zero, not yet synced to any model.
    pub fn new() -> Self {
        Self {
            controls: Channel::ALL.map(RangeControl::new),
            swatch: Swatch::new(Rgba::new(0, 0, 0, 0)),
            pending: Vec::new(),
            refresh_count: 0,
        }
    }

    /// Re-renders the swatch and re-syncs all four controls from `color`.
    pub fn refresh(&mut self, color: Rgba) {
        self.swatch.update(color);
        for control in &mut self.controls {
            let value = color.channel(control.channel());
            if let Some(change) = control.set_progress(value, ChangeOrigin::Program) {
                self.pending.push(change);
            }
        }
        self.refresh_count += 1;
    }

    /// Applies a user drag to the channel's control.
    pub fn drag(&mut self, channel: Channel, value: u8) -> Option<ProgressChange> {
        self.control_mut(channel)
            .set_progress(value, ChangeOrigin::User)
    }

    /// Drains control changes produced by refreshes since the last call.
    pub fn take_pending(&mut self) -> Vec<ProgressChange> {
        std::mem::take(&mut self.pending)
    }

    pub fn control(&self, channel: Channel) -> &RangeControl {
        &self.controls[index_of(channel)]
    }

    fn control_mut(&mut self, channel: Channel) -> &mut RangeControl {
        &mut self.controls[index_of(channel)]
    }

    pub fn controls(&self) -> &[RangeControl; 4] {
        &self.controls
    }

    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// Number of full refreshes performed so far.
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }
}

impl Default for ColorView {
    fn default() -> Self {
        Self::new()
    }
}

fn index_of(channel: Channel) -> usize {
    match channel {
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
        Channel::Alpha => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_syncs_controls_and_swatch() {
        let mut view = ColorView::new();
        view.refresh(Rgba::new(10, 20, 30, 40));

        assert_eq!(view.control(Channel::Red).progress(), 10);
        assert_eq!(view.control(Channel::Green).progress(), 20);
        assert_eq!(view.control(Channel::Blue).progress(), 30);
        assert_eq!(view.control(Channel::Alpha).progress(), 40);
        assert_eq!(view.swatch().label(), "RGBA(10, 20, 30, 40)");
        assert_eq!(view.refresh_count(), 1);
    }

    #[test]
    fn refresh_queues_programmatic_changes_only_for_moved_controls() {
        let mut view = ColorView::new();
        view.refresh(Rgba::new(0, 5, 0, 0));

        let pending = view.take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].channel, Channel::Green);
        assert_eq!(pending[0].origin, ChangeOrigin::Program);
        assert!(view.take_pending().is_empty());
    }

    #[test]
    fn drag_reports_user_origin() {
        let mut view = ColorView::new();
        let change = view.drag(Channel::Blue, 99).unwrap();
        assert!(change.from_user());
        assert_eq!(view.control(Channel::Blue).progress(), 99);
        assert!(view.take_pending().is_empty());
    }

    #[test]
    fn controls_follow_channel_order() {
        let view = ColorView::new();
        let channels: Vec<Channel> = view.controls().iter().map(|c| c.channel()).collect();
        assert_eq!(channels, Channel::ALL.to_vec());
    }
}
