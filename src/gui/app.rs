use std::collections::HashMap;

use iced::alignment::Horizontal;
use iced::executor;
use iced::keyboard;
use iced::theme::{self, Theme};
use iced::widget::{Column, Row, button, column, container, horizontal_rule, row, slider, text};
use iced::window;
use iced::{Alignment, Application, Command, Element, Length, Subscription};
use log::{error, info};

use super::messages::Message;
use super::style::{SwatchStyle, to_iced_color};
use crate::config::{Config, ThemeChoice};
use crate::controller::{KeyInput, MixerController};
use crate::menu::MenuAction;
use crate::model::{ColorModel, Preset};

const ABOUT_BODY: &str = "Drag the sliders to mix red, green, blue and alpha. \
The preset buttons (or their keys) jump straight to a named color and keep the current alpha.";

/// Startup parameters handed to the window.
#[derive(Debug, Clone, Default)]
pub struct MixerFlags {
    pub config: Config,
    /// Preset applied after the configured startup color
    pub preset: Option<Preset>,
}

#[derive(Debug)]
pub struct MixerApp {
    controller: MixerController,
    theme: ThemeChoice,
}

impl MixerApp {
    pub fn from_flags(flags: MixerFlags) -> Self {
        let MixerFlags { mut config, preset } = flags;
        config.validate_and_clamp();

        let action_map = match config.keybindings.build_action_map() {
            Ok(map) => map,
            Err(err) => {
                error!("Default keybindings rejected ({err}), keyboard shortcuts disabled");
                HashMap::new()
            }
        };

        let model = ColorModel::new(config.startup.rgba());
        let mut controller = MixerController::new(model, action_map);

        if let Some(preset) = preset.or(config.startup.preset) {
            info!("Applying startup preset {}", preset);
            controller.on_menu_action(MenuAction::Preset(preset));
        }
        if config.ui.show_about_on_start {
            controller.on_menu_action(MenuAction::About);
        }

        Self {
            controller,
            theme: config.ui.theme,
        }
    }

    pub fn controller(&self) -> &MixerController {
        &self.controller
    }

    /// Applies a message to the controller; returns `true` when the window
    /// should close.
    pub fn apply(&mut self, message: Message) -> bool {
        match message {
            Message::SliderChanged(channel, value) => self.controller.slider_moved(channel, value),
            Message::MenuSelected(action) => self.controller.on_menu_action(action),
            Message::AboutDismissed => self.controller.dismiss_about(),
            Message::KeyPressed(input) => {
                self.controller.on_key(&input);
            }
        }
        self.controller.should_exit()
    }
}

impl Application for MixerApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = MixerFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        (Self::from_flags(flags), Command::none())
    }

    fn title(&self) -> String {
        "RGBA Mixer".to_string()
    }

    fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(key_message)
    }

    fn update(&mut self, message: Message) -> Command<Self::Message> {
        if self.apply(message) {
            info!("Exit requested");
            return window::close(window::Id::MAIN);
        }
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.controller.show_about() {
            about_view()
        } else {
            column![self.swatch_view(), self.sliders_view()]
                .spacing(20)
                .into()
        };

        column![self.menu_view(), horizontal_rule(2), body]
            .spacing(12)
            .padding(16)
            .into()
    }
}

impl MixerApp {
    fn menu_view(&self) -> Element<'_, Message> {
        let about = button(text(MenuAction::About.label()).size(14))
            .padding([4, 10])
            .style(if self.controller.show_about() {
                theme::Button::Primary
            } else {
                theme::Button::Secondary
            })
            .on_press(MenuAction::About.into());

        let header = row![text("RGBA Mixer").size(20).width(Length::Fill), about]
            .spacing(12)
            .align_items(Alignment::Center);

        let presets = MenuAction::ALL[1..].chunks(4).fold(
            Column::new().spacing(6).push(header),
            |column, chunk| {
                let line = chunk.iter().fold(Row::new().spacing(6), |line, action| {
                    line.push(
                        button(text(action.label()).size(14))
                            .padding([4, 8])
                            .width(Length::Fill)
                            .style(theme::Button::Secondary)
                            .on_press((*action).into()),
                    )
                });
                column.push(line)
            },
        );

        presets.into()
    }

    fn swatch_view(&self) -> Element<'_, Message> {
        let view = self.controller.view();
        let swatch = view.swatch();
        let style = SwatchStyle {
            background: to_iced_color(swatch.background()),
            text: to_iced_color(swatch.text_color()),
        };
        let label = swatch.label().to_string();

        container(text(label).size(24).style(theme::Text::Color(style.text)))
            .width(Length::Fill)
            .height(Length::Fixed(160.0))
            .center_x()
            .center_y()
            .style(theme::Container::Custom(Box::new(style)))
            .into()
    }

    fn sliders_view(&self) -> Element<'_, Message> {
        let view = self.controller.view();
        let sliders = view
            .controls()
            .iter()
            .fold(Column::new().spacing(12), |column, control| {
                let channel = control.channel();
                let value = control.progress();
                column.push(
                    row![
                        text(channel.label()).width(Length::Fixed(56.0)),
                        slider(0..=control.max(), value, move |value| {
                            Message::SliderChanged(channel, value)
                        })
                        .width(Length::Fill),
                        text(value.to_string())
                            .width(Length::Fixed(40.0))
                            .horizontal_alignment(Horizontal::Right),
                    ]
                    .spacing(12)
                    .align_items(Alignment::Center),
                )
            });

        sliders.into()
    }
}

fn about_view<'a>() -> Element<'a, Message> {
    let version = format!(
        "Version {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("RGBA_MIXER_GIT_HASH")
    );

    container(
        column![
            text("About RGBA Mixer").size(20),
            text(version).size(14),
            text(ABOUT_BODY).size(14),
            button("Close")
                .style(theme::Button::Primary)
                .on_press(Message::AboutDismissed),
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}

impl From<MenuAction> for Message {
    fn from(action: MenuAction) -> Self {
        Message::MenuSelected(action)
    }
}

fn key_message(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    let name = match key {
        keyboard::Key::Character(c) => c.to_string(),
        keyboard::Key::Named(named) => format!("{named:?}"),
        keyboard::Key::Unidentified => return None,
    };

    Some(Message::KeyPressed(KeyInput {
        key: name,
        ctrl: modifiers.control(),
        shift: modifiers.shift(),
        alt: modifiers.alt(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, Rgba};

    #[test]
    fn startup_preset_keeps_configured_alpha() {
        let mut config = Config::default();
        config.startup.color = [10, 20, 30, 40];
        let app = MixerApp::from_flags(MixerFlags {
            config,
            preset: Some(Preset::Cyan),
        });

        assert_eq!(app.controller().model().color(), Rgba::new(0, 255, 255, 40));
    }

    #[test]
    fn cli_preset_overrides_config_preset() {
        let mut config = Config::default();
        config.startup.preset = Some(Preset::Red);
        let app = MixerApp::from_flags(MixerFlags {
            config,
            preset: Some(Preset::Green),
        });

        assert_eq!(app.controller().model().color(), Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn messages_drive_the_controller() {
        let mut app = MixerApp::from_flags(MixerFlags::default());

        assert!(!app.apply(Message::SliderChanged(Channel::Red, 10)));
        assert!(!app.apply(Message::MenuSelected(MenuAction::About)));
        assert!(app.controller().show_about());
        assert!(!app.apply(Message::AboutDismissed));
        assert!(!app.controller().show_about());

        assert_eq!(app.controller().model().red(), 10);
    }

    #[test]
    fn exit_binding_requests_close() {
        let mut app = MixerApp::from_flags(MixerFlags::default());
        let closing = app.apply(Message::KeyPressed(KeyInput {
            key: "q".into(),
            ctrl: true,
            shift: false,
            alt: false,
        }));
        assert!(closing);
    }

    #[test]
    fn invalid_keybindings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.keybindings.set_red = vec!["X".to_string()];
        config.keybindings.set_blue = vec!["x".to_string()];
        let mut app = MixerApp::from_flags(MixerFlags {
            config,
            preset: None,
        });

        assert!(!app.apply(Message::KeyPressed(KeyInput::plain("b"))));
        assert_eq!(app.controller().model().color(), Rgba::new(0, 0, 255, 255));

        app.apply(Message::KeyPressed(KeyInput::plain("x")));
        assert_eq!(app.controller().model().color(), Rgba::new(0, 0, 255, 255));
    }

    #[test]
    fn character_keys_carry_modifiers() {
        let message = key_message(
            keyboard::Key::Character("q".into()),
            keyboard::Modifiers::CTRL,
        );
        match message {
            Some(Message::KeyPressed(input)) => assert_eq!(
                input,
                KeyInput {
                    key: "q".into(),
                    ctrl: true,
                    shift: false,
                    alt: false,
                }
            ),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn shifted_character_keys_still_trigger_presets() {
        let mut app = MixerApp::from_flags(MixerFlags::default());
        let message = key_message(
            keyboard::Key::Character("Y".into()),
            keyboard::Modifiers::empty(),
        );
        app.apply(message.expect("character keys produce a message"));

        assert_eq!(app.controller().model().color(), Rgba::new(255, 255, 0, 255));
    }

    #[test]
    fn unidentified_keys_are_dropped() {
        assert!(key_message(keyboard::Key::Unidentified, keyboard::Modifiers::empty()).is_none());
    }

    #[test]
    fn named_keys_map_to_binding_names() {
        let message = key_message(
            keyboard::Key::Named(keyboard::key::Named::F1),
            keyboard::Modifiers::empty(),
        );
        match message {
            Some(Message::KeyPressed(input)) => assert_eq!(input, KeyInput::plain("F1")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
