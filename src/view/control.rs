//! Range control state for a single color channel.

use crate::model::Channel;

/// Who caused a range control's position to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The user dragged the control
    User,
    /// The view re-synced the control from the model
    Program,
}

/// Emitted whenever a range control's position actually moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressChange {
    pub channel: Channel,
    pub progress: u8,
    pub origin: ChangeOrigin,
}

impl ProgressChange {
    pub fn from_user(&self) -> bool {
        self.origin == ChangeOrigin::User
    }
}

/// A slider bound to one channel, with a fixed `0..=max` domain.
#[derive(Debug, Clone)]
pub struct RangeControl {
    channel: Channel,
    progress: u8,
    max: u8,
}

impl RangeControl {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            progress: 0,
            max: channel.max(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Moves the control, capping at `max`.
    ///
    /// Returns `None` when the position is unchanged; a control only reports
    /// actual movement.
    pub fn set_progress(&mut self, value: u8, origin: ChangeOrigin) -> Option<ProgressChange> {
        let value = value.min(self.max);
        if value == self.progress {
            return None;
        }
        self.progress = value;
        Some(ProgressChange {
            channel: self.channel,
            progress: value,
            origin,
        })
    }
}
