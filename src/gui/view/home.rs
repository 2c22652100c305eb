//! Home screen: profile header, then toast / sound / music playgrounds.

use iced::widget::{Column, Row, Space, button, column, container, row, scrollable, text, toggler};
use iced::{Alignment, Element, Length};

use super::super::state::{FadeDirection, Message, StarLearn};
use super::constants::{BODY_TEXT, HOME_MAX_W, SECTION_TEXT, SMALL_TEXT, TITLE_TEXT};
use super::widgets::{stat, volume_row};
use crate::core::audio::{BgmTrack, SoundEffect};
use crate::core::toast::ToastKind;

pub(crate) fn build_home(state: &StarLearn) -> iced::widget::Container<'_, Message> {
    let body = column![
        header(state),
        toast_section(state),
        sound_section(state),
        music_section(state),
    ]
    .spacing(24)
    .max_width(HOME_MAX_W);

    container(scrollable(container(body).center_x(Length::Fill)))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
}

fn header(state: &StarLearn) -> Element<'_, Message> {
    let Some(session) = state.session.current() else {
        return text("Not signed in").size(BODY_TEXT).into();
    };

    let greeting = column![
        text(format!("Hi, {}!", session.nickname)).size(TITLE_TEXT),
        text(format!(
            "Grade {} · Level {} · {} XP",
            session.grade_level, session.level, session.xp
        ))
        .size(SMALL_TEXT),
    ]
    .spacing(4);

    let stats = row![
        stat("🔥", session.streak_days),
        stat("⭐", session.stars),
        stat("💎", session.gems),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    row![
        greeting,
        Space::new().width(Length::Fill),
        stats,
        button(text("Log out").size(BODY_TEXT)).on_press(Message::Logout),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

fn toast_section(state: &StarLearn) -> Element<'_, Message> {
    let buttons = ToastKind::ALL.iter().fold(Row::new().spacing(8), |r, kind| {
        r.push(button(text(kind.label()).size(BODY_TEXT)).on_press(Message::ShowToast(*kind)))
    });

    column![
        text("Notifications").size(SECTION_TEXT),
        buttons,
        button(text("Clear all").size(SMALL_TEXT))
            .on_press_maybe((!state.toasts.is_empty()).then_some(Message::ClearToasts)),
    ]
    .spacing(8)
    .into()
}

fn sound_section(state: &StarLearn) -> Element<'_, Message> {
    let prefs = state.audio.prefs();

    // Two rows of five.
    let mut grid = Column::new().spacing(8);
    for chunk in SoundEffect::ALL.chunks(5) {
        let r = chunk.iter().fold(Row::new().spacing(8), |r, effect| {
            r.push(button(text(effect.name()).size(BODY_TEXT)).on_press(Message::PlaySound(*effect)))
        });
        grid = grid.push(r);
    }

    column![
        row![
            text("Sound effects").size(SECTION_TEXT),
            Space::new().width(Length::Fill),
            toggler(prefs.sound_enabled).on_toggle(|_| Message::ToggleSound),
        ]
        .align_y(Alignment::Center),
        grid,
        volume_row("Effects volume", prefs.effects_volume, Message::SetEffectsVolume),
    ]
    .spacing(8)
    .into()
}

fn music_section(state: &StarLearn) -> Element<'_, Message> {
    let prefs = state.audio.prefs();

    let now_playing = match (state.audio.current_bgm(), state.audio.bgm_volume()) {
        (Some(track), Some(vol)) if state.audio.is_fading() => {
            format!("Playing: {} (fading, {:.0}%)", track.name(), vol * 100.0)
        }
        (Some(track), Some(vol)) => format!("Playing: {} ({:.0}%)", track.name(), vol * 100.0),
        _ => "Nothing playing".to_string(),
    };

    let tracks = BgmTrack::ALL.iter().fold(Row::new().spacing(8), |r, track| {
        r.push(button(text(track.name()).size(BODY_TEXT)).on_press(Message::PlayBgm(*track)))
    });

    let has_track = state.audio.current_bgm().is_some();
    let transport = row![
        button(text("Stop").size(BODY_TEXT)).on_press_maybe(has_track.then_some(Message::StopBgm)),
        button(text("Fade out").size(BODY_TEXT))
            .on_press_maybe(has_track.then_some(Message::FadeBgm(FadeDirection::Out))),
        button(text("Fade in").size(BODY_TEXT))
            .on_press_maybe(has_track.then_some(Message::FadeBgm(FadeDirection::In))),
    ]
    .spacing(8);

    column![
        row![
            text("Music").size(SECTION_TEXT),
            Space::new().width(Length::Fill),
            toggler(prefs.music_enabled).on_toggle(|_| Message::ToggleMusic),
        ]
        .align_y(Alignment::Center),
        text(now_playing).size(SMALL_TEXT),
        tracks,
        transport,
        volume_row("Music volume", prefs.music_volume, Message::SetMusicVolume),
    ]
    .spacing(8)
    .into()
}
