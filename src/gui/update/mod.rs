//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, StarLearn};

mod audio;
mod login;
mod toasts;

pub(crate) fn update(state: &mut StarLearn, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => {
            toasts::drain_events(state, now);
            audio::tick(state, now)
        }

        // Login
        Message::EmailChanged(s) => login::email_changed(state, s),
        Message::PasswordChanged(s) => login::password_changed(state, s),
        Message::SubmitLogin => login::submit(state),
        Message::LoginFinished(result) => login::finished(state, result),
        Message::Logout => login::logout(state),

        // Toasts
        Message::ShowToast(kind) => toasts::show_demo(state, kind),
        Message::DismissToast(id) => toasts::dismiss(state, id),
        Message::ClearToasts => toasts::clear(state),

        // Audio
        Message::PlaySound(effect) => audio::play_sound(state, effect),
        Message::PlayBgm(track) => audio::play_bgm(state, track),
        Message::StopBgm => audio::stop_bgm(state),
        Message::FadeBgm(direction) => audio::fade_bgm(state, direction),
        Message::ToggleSound => audio::toggle_sound(state),
        Message::ToggleMusic => audio::toggle_music(state),
        Message::SetEffectsVolume(v) => audio::set_effects_volume(state, v),
        Message::SetMusicVolume(v) => audio::set_music_volume(state, v),
        Message::SaveSettings => audio::save_settings(state),
    }
}
