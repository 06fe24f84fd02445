mod message;

pub mod creation;
pub mod directory;
pub mod node;
pub mod wallet;

pub use message::*;

use iced::{
    widget::{button, center, container, mouse_area, opaque, stack},
    Color, Length,
};

use soul_ui::{
    color,
    component::{button as ui_button, text},
    theme,
    widget::*,
};

use super::menu::Menu;

/// Sidebar with the menus and the content of the current panel.
pub fn dashboard<'a>(current: Menu, content: Element<'a, Message>) -> Element<'a, Message> {
    let menus = Menu::ALL.iter().fold(
        Column::new()
            .spacing(10)
            .push(text::h3("Soul"))
            .push(Space::with_height(Length::Fixed(20.0))),
        |col, menu| {
            col.push(
                button(text::p1_regular(menu.label()))
                    .width(Length::Fill)
                    .padding(10)
                    .style(theme::tile::style(*menu == current))
                    .on_press(Message::Menu(*menu)),
            )
        },
    );

    let sidebar = Container::new(
        menus
            .push(Space::with_height(Length::Fill))
            .push(
                ui_button::secondary("New wallet")
                    .width(Length::Fill)
                    .on_press(Message::Creation(CreationMessage::Open)),
            ),
    )
    .padding(20)
    .width(Length::Fixed(200.0))
    .height(Length::Fill);

    Row::new()
        .push(sidebar)
        .push(
            scrollable(Container::new(content).padding(30).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

/// Shows `content` over a dimmed `base`, clicking outside emits `on_blur`.
pub fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
