use crate::{widget::Text, BOLD};

pub const H2_SIZE: u16 = 29;
pub const H3_SIZE: u16 = 24;
pub const P1_SIZE: u16 = 20;
pub const P2_SIZE: u16 = 16;
pub const CAPTION_SIZE: u16 = 12;

pub fn h2<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).font(BOLD).size(H2_SIZE)
}

pub fn h3<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).font(BOLD).size(H3_SIZE)
}

pub fn p1_regular<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).size(P1_SIZE)
}

pub fn p1_bold<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).font(BOLD).size(P1_SIZE)
}

pub fn p2<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).size(P2_SIZE)
}

pub fn p2_bold<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).font(BOLD).size(P2_SIZE)
}

pub fn caption<'a>(content: impl Into<String>) -> Text<'a> {
    iced::widget::text(content.into()).size(CAPTION_SIZE)
}
