use iced::Length;

use soul_ui::{
    color,
    component::{card, error_card, text},
    widget::*,
};

use super::Message;
use crate::app::state::Loadable;
use crate::backend::NodeInfo;

pub fn node_panel<'a>(title: &'a str, info: &'a Loadable<NodeInfo>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match info {
        Loadable::Loading => text::p2("Loading...").into(),
        Loadable::Loaded(info) => card(info.fields().into_iter().fold(
            Column::new().spacing(10),
            |col, (label, value)| {
                col.push(
                    Row::new()
                        .spacing(10)
                        .push(text::p2_bold(label).width(Length::Fixed(250.0)))
                        .push(text::p2(value).color(color::GREY_2)),
                )
            },
        ))
        .into(),
        Loadable::Unavailable(e) => error_card("Node unavailable", e.user_message()).into(),
    };

    Column::new()
        .spacing(20)
        .push(text::h2(title))
        .push(content)
        .into()
}
