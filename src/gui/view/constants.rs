//! View constants (layout/sizing/colours).

use iced::Color;

use crate::core::toast::ToastKind;

pub(crate) const LOGIN_W: f32 = 360.0;
pub(crate) const HOME_MAX_W: f32 = 720.0;

pub(crate) const TITLE_TEXT: f32 = 30.0;
pub(crate) const SECTION_TEXT: f32 = 18.0;
pub(crate) const BODY_TEXT: f32 = 14.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const TOAST_W: f32 = 320.0;
pub(crate) const TOAST_ICON: f32 = 22.0;
pub(crate) const TOAST_SPACING: f32 = 8.0;
pub(crate) const TOAST_RADIUS: f32 = 10.0;
pub(crate) const TOAST_BORDER: f32 = 2.0;

pub(crate) const SLIDER_W: f32 = 160.0;

/// Accent colour per toast kind.
pub(crate) fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::from_rgb8(0x2e, 0xb8, 0x5c),
        ToastKind::Error => Color::from_rgb8(0xe5, 0x48, 0x4d),
        ToastKind::Warning => Color::from_rgb8(0xf5, 0xa5, 0x24),
        ToastKind::Info => Color::from_rgb8(0x3b, 0x82, 0xf6),
        ToastKind::Achievement => Color::from_rgb8(0xa8, 0x55, 0xf7),
    }
}
