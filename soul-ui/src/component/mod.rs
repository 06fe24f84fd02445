pub mod amount;
pub mod button;
pub mod text;

use bitcoin::Network;
use iced::{alignment, Length};

use crate::{
    theme,
    widget::{Column, Container},
};

pub fn network_banner<'a, T: 'a>(network: Network) -> Container<'a, T> {
    Container::new(text::p2_bold(format!(
        "You are on the {} network.",
        network
    )))
    .padding(5)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .style(theme::banner::network)
}

/// Card holding an error message, shown in place of the content that
/// failed to load or next to the action that failed.
pub fn error_card<'a, T: 'a>(title: &'a str, message: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(title))
            .push(text::p2(message)),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::card::invalid)
}

pub fn warning_card<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p2(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::card::warning)
}

pub fn card<'a, T: 'a>(content: impl Into<crate::widget::Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::card::simple)
}
