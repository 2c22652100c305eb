//! Reusable small widgets/helpers used across view modules.

use iced::widget::{Space, Text, row, slider, text};
use iced::{Alignment, Color, Element, Length};

use super::super::state::Message;
use super::constants::{BODY_TEXT, SLIDER_W, SMALL_TEXT};

pub(crate) fn error_text(msg: &str) -> Text<'_> {
    text(msg)
        .size(SMALL_TEXT)
        .color(Color::from_rgb8(0xe5, 0x48, 0x4d))
}

/// "Label ........ [slider] 40%"
///
/// `on_change` fires while dragging; settings are saved on release.
pub(crate) fn volume_row<'a>(
    label: &'a str,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    let value = value.clamp(0.0, 1.0);
    row![
        text(label).size(BODY_TEXT),
        Space::new().width(Length::Fill),
        slider(0.0..=1.0, value, on_change)
            .step(0.05)
            .on_release(Message::SaveSettings)
            .width(Length::Fixed(SLIDER_W)),
        text(fmt_percent(value)).size(SMALL_TEXT),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// 0.35 -> "35%"
pub(crate) fn fmt_percent(v: f32) -> String {
    format!("{}%", (v.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// Stat chip on the home header, e.g. "⭐ 42".
pub(crate) fn stat(icon: &str, value: u32) -> Text<'static> {
    text(format!("{icon} {value}")).size(BODY_TEXT)
}
