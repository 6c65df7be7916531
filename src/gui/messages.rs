use crate::controller::KeyInput;
use crate::menu::MenuAction;
use crate::model::Channel;

#[derive(Debug, Clone)]
pub enum Message {
    SliderChanged(Channel, u8),
    MenuSelected(MenuAction),
    AboutDismissed,
    KeyPressed(KeyInput),
}
