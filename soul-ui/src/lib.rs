pub mod color;
pub mod component;
pub mod theme;
pub mod widget;

pub use iced::Font;

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};
