//! Toast overlay: cards stacked bottom-right, newest at the bottom.
//!
//! Cards are the renderer's mirror (`ToastLayer`), faded in by age.

use std::time::Instant;

use iced::widget::{Column, button, column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme, Vector, alignment};

use super::super::state::Message;
use super::super::toast_layer::{ShownToast, ToastLayer};
use super::constants::{
    BODY_TEXT, SMALL_TEXT, TOAST_BORDER, TOAST_ICON, TOAST_RADIUS, TOAST_SPACING, TOAST_W,
    kind_color,
};

pub(crate) fn build_overlay(layer: &ToastLayer) -> Element<'_, Message> {
    if layer.entries().is_empty() {
        // Takes no space
        return container(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let now = layer.now();
    let cards: Vec<Element<'_, Message>> = layer
        .entries()
        .iter()
        .map(|entry| toast_card(entry, now))
        .collect();

    let stack = Column::with_children(cards)
        .spacing(TOAST_SPACING)
        .align_x(alignment::Horizontal::Right);

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(16)
        .into()
}

fn toast_card(entry: &ShownToast, now: Instant) -> Element<'_, Message> {
    let toast = &entry.toast;
    let alpha = entry.opacity(now);
    let accent = with_alpha(kind_color(toast.kind()), alpha);

    let icon = text(toast.icon()).size(TOAST_ICON).color(accent);

    let mut lines = column![text(toast.title()).size(BODY_TEXT)].spacing(2);
    if let Some(message) = toast.message() {
        lines = lines.push(text(message).size(SMALL_TEXT));
    }

    let close = button(text("×").size(BODY_TEXT))
        .on_press(Message::DismissToast(toast.id()))
        .padding(2)
        .style(button::text);

    let content = row![icon, container(lines).width(Length::Fill), close]
        .spacing(10)
        .align_y(Alignment::Center);

    container(content)
        .width(Length::Fixed(TOAST_W))
        .padding(12)
        .style(move |theme: &Theme| card_style(theme, accent, alpha))
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn card_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(with_alpha(bg, alpha))),
        border: Border {
            color: accent,
            width: TOAST_BORDER,
            radius: TOAST_RADIUS.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.25 * alpha),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}
