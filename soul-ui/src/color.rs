use iced::Color;

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub const BLACK: Color = rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = rgb(1.0, 1.0, 1.0);
pub const GREY_2: Color = rgb(0.66, 0.66, 0.66);
pub const GREY_3: Color = rgb(0.45, 0.45, 0.45);
pub const GREY_5: Color = rgb(0.15, 0.15, 0.15);
pub const GREY_6: Color = rgb(0.09, 0.09, 0.09);
pub const ORANGE: Color = rgb(0.97, 0.58, 0.10);
pub const GREEN: Color = rgb(0.0, 0.85, 0.4);
pub const RED: Color = rgb(0.88, 0.18, 0.18);
