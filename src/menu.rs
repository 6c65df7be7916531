//! Options menu entries.

use crate::model::Preset;

/// One entry of the options menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    About,
    Preset(Preset),
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 9] = [
        MenuAction::About,
        MenuAction::Preset(Preset::Black),
        MenuAction::Preset(Preset::Blue),
        MenuAction::Preset(Preset::Cyan),
        MenuAction::Preset(Preset::Green),
        MenuAction::Preset(Preset::Magenta),
        MenuAction::Preset(Preset::Red),
        MenuAction::Preset(Preset::White),
        MenuAction::Preset(Preset::Yellow),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::About => "About",
            MenuAction::Preset(preset) => preset.label(),
        }
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_about_then_every_preset_once() {
        assert_eq!(MenuAction::ALL[0], MenuAction::About);
        for preset in Preset::ALL {
            let count = MenuAction::ALL
                .iter()
                .filter(|action| **action == MenuAction::Preset(preset))
                .count();
            assert_eq!(count, 1, "{preset} should appear once");
        }
    }

    #[test]
    fn labels_are_alphabetical_after_about() {
        let labels: Vec<&str> = MenuAction::ALL[1..].iter().map(|a| a.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }
}
