//! Mixer controller.
//!
//! The controller is the event handler for the view and wires the view up as
//! an observer of the model. User gestures (slider drags, menu entries, key
//! presses) become model mutations; the model's notification then re-syncs
//! the whole view. Slider movements the view makes on its own during that
//! re-sync come back as programmatic changes and are dropped here, which is
//! what keeps the two from feeding each other.


use crate::config::{Action, KeyBinding};
use crate::menu::MenuAction;
use crate::model::{Channel, ColorModel, Rgba};
use crate::view::{ColorView, ProgressChange};
use log::{debug, trace};
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A key press as reported by the window, reduced to what keybindings match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyInput {
    /// A key press with no modifiers held.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            shift: false,
            alt: false,
        }
    }
}

pub struct MixerController {
    model: ColorModel,
    view: Rc<RefCell<ColorView>>,
    action_map: HashMap<KeyBinding, Action>,
    show_about: bool,
    should_exit: bool,
}

impl MixerController {
    /// Takes ownership of `model`, registers the view as its observer and
    /// performs the initial sync of the view.
    pub fn new(mut model: ColorModel, action_map: HashMap<KeyBinding, Action>) -> Self {
        let view = Rc::new(RefCell::new(ColorView::new()));
        let observer = Rc::clone(&view);
        model.add_observer(move |color: Rgba| observer.borrow_mut().refresh(color));
        view.borrow_mut().refresh(model.color());

        let mut controller = Self {
            model,
            view,
            action_map,
            show_about: false,
            should_exit: false,
        };
        controller.dispatch_pending();
        controller
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    /// Borrows the current view state.
    pub fn view(&self) -> Ref<'_, ColorView> {
        self.view.borrow()
    }

    pub fn show_about(&self) -> bool {
        self.show_about
    }

    /// Whether an exit action has been triggered.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Handles the user dragging the slider for `channel` to `value`.
    pub fn slider_moved(&mut self, channel: Channel, value: u8) {
        let change = self.view.borrow_mut().drag(channel, value);
        if let Some(change) = change {
            self.on_progress_changed(change);
        }
    }

    /// Forwards a slider change into the model if the user caused it.
    ///
    /// Returns `false` for programmatic changes, which are ignored.
    pub fn on_progress_changed(&mut self, change: ProgressChange) -> bool {
        if !change.from_user() {
            trace!(
                "Ignoring programmatic {} change to {}",
                change.channel, change.progress
            );
            return false;
        }

        self.model
            .set_channel(change.channel, i32::from(change.progress));
        self.dispatch_pending();
        true
    }

    /// Dispatches an options menu entry.
    pub fn on_menu_action(&mut self, action: MenuAction) {
        debug!("Menu action: {}", action);
        match action {
            MenuAction::About => self.show_about = true,
            MenuAction::Preset(preset) => {
                self.model.apply_preset(preset);
                self.dispatch_pending();
            }
        }
    }

    pub fn dismiss_about(&mut self) {
        self.show_about = false;
    }

    /// Looks up the key press in the keybinding table and runs the bound
    /// action, returning it.
    pub fn on_key(&mut self, input: &KeyInput) -> Option<Action> {
        let action = self.find_action(input)?;
        self.handle_action(action);
        Some(action)
    }

    pub fn handle_action(&mut self, action: Action) {
        debug!("Key action: {:?}", action);
        match action {
            Action::Exit => self.should_exit = true,
            Action::ToggleAbout => self.show_about = !self.show_about,
            color_action => {
                if let Some(preset) = color_action.preset() {
                    self.on_menu_action(MenuAction::Preset(preset));
                }
            }
        }
    }

    fn find_action(&self, input: &KeyInput) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches(&input.key, input.ctrl, input.shift, input.alt))
            .map(|(_, action)| *action)
    }

    /// Routes control changes produced by the last view refresh back through
    /// the change handler, where they are recognised as programmatic.
    fn dispatch_pending(&mut self) {
        let pending = self.view.borrow_mut().take_pending();
        for change in pending {
            self.on_progress_changed(change);
        }
    }
}

impl std::fmt::Debug for MixerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixerController")
            .field("model", &self.model)
            .field("show_about", &self.show_about)
            .field("should_exit", &self.should_exit)
            .finish_non_exhaustive()
    }
}
