use iced::widget::button;

use crate::{component::text, widget::Button};

pub fn primary<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    button(text::p1_bold(label))
        .padding([8, 16])
        .style(button::primary)
}

pub fn secondary<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    button(text::p1_regular(label))
        .padding([8, 16])
        .style(button::secondary)
}

pub fn transparent<'a, T: 'a>(label: &'a str) -> Button<'a, T> {
    button(text::p1_regular(label))
        .padding([8, 16])
        .style(button::text)
}

/// Primary button which only emits `msg` when present; a `None` renders it
/// disabled, the way pending actions are shown.
pub fn primary_maybe<'a, T: Clone + 'a>(label: &'a str, msg: Option<T>) -> Button<'a, T> {
    primary(label).on_press_maybe(msg)
}
