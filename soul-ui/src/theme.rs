use iced::{Background, Border, Theme};

use crate::color;

pub mod card {
    use super::*;
    use iced::widget::container::Style;

    pub fn simple(_theme: &Theme) -> Style {
        Style {
            background: Some(Background::Color(color::GREY_6)),
            border: Border {
                color: color::GREY_5,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Style::default()
        }
    }

    pub fn invalid(_theme: &Theme) -> Style {
        Style {
            background: Some(Background::Color(color::GREY_6)),
            text_color: Some(color::RED),
            border: Border {
                color: color::RED,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Style::default()
        }
    }

    pub fn warning(_theme: &Theme) -> Style {
        Style {
            background: Some(Background::Color(color::GREY_6)),
            text_color: Some(color::ORANGE),
            border: Border {
                color: color::ORANGE,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Style::default()
        }
    }

    pub fn modal(_theme: &Theme) -> Style {
        Style {
            background: Some(Background::Color(color::GREY_6)),
            border: Border {
                color: color::GREY_3,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Style::default()
        }
    }
}

pub mod banner {
    use super::*;
    use iced::widget::container::Style;

    pub fn network(_theme: &Theme) -> Style {
        Style {
            background: Some(Background::Color(color::ORANGE)),
            text_color: Some(color::BLACK),
            ..Style::default()
        }
    }
}

pub mod tile {
    use super::*;
    use iced::widget::button::{Status, Style};

    /// Wallet tile of the directory grid; `selected` outlines it in orange.
    pub fn style(selected: bool) -> impl Fn(&Theme, Status) -> Style {
        move |_theme, status| {
            let background = match status {
                Status::Hovered | Status::Pressed => color::GREY_5,
                _ => color::GREY_6,
            };
            Style {
                background: Some(Background::Color(background)),
                text_color: color::WHITE,
                border: Border {
                    color: if selected { color::ORANGE } else { color::GREY_5 },
                    width: if selected { 2.0 } else { 1.0 },
                    radius: 10.0.into(),
                },
                ..Style::default()
            }
        }
    }
}
