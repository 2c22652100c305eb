//! gui/update/login.rs
//! Login form + the simulated sign-in round-trip.
//!
//! Flow: SubmitLogin -> (delay) -> LoginFinished
//! - Ok: store session, go Home once, welcome toast + sound + menu music
//! - Err: generic message, loading reset (the demo authenticator never fails)

use iced::Task;

use super::super::state::{LoginForm, Message, StarLearn};
use crate::core::audio::{BgmOptions, BgmTrack, SoundEffect, SoundOptions};
use crate::core::router::Route;
use crate::core::session::UserSession;
use crate::core::toast::{Toast, ToastKind};
use crate::error::AuthError;

const WELCOME_ICON: &str = "👋";

pub(crate) fn email_changed(state: &mut StarLearn, email: String) -> Task<Message> {
    state.login.email = email;
    state.login.error = None;
    Task::none()
}

pub(crate) fn password_changed(state: &mut StarLearn, password: String) -> Task<Message> {
    state.login.password = password;
    state.login.error = None;
    Task::none()
}

pub(crate) fn submit(state: &mut StarLearn) -> Task<Message> {
    match begin_sign_in(state) {
        Some(sign_in) => Task::perform(sign_in, Message::LoginFinished),
        None => Task::none(),
    }
}

/// Checks the form and switches it to loading.
/// `None` while a sign-in is already running or a field is missing.
fn begin_sign_in(
    state: &mut StarLearn,
) -> Option<impl Future<Output = Result<UserSession, AuthError>> + use<>> {
    if state.login.loading {
        return None;
    }

    let credentials = state.login.credentials();
    if let Err(missing) = credentials.check_required() {
        state.login.error = Some(missing.prompt().to_string());
        return None;
    }

    state.login.loading = true;
    state.login.error = None;
    state.audio.play_sound(SoundEffect::Click, SoundOptions::default());

    let auth = state.auth.clone();
    Some(async move { auth.sign_in(credentials).await })
}

pub(crate) fn finished(
    state: &mut StarLearn,
    result: Result<UserSession, AuthError>,
) -> Task<Message> {
    state.login.loading = false;

    match result {
        Ok(session) => {
            let nickname = session.nickname.clone();
            state.session.set(session);

            // A late duplicate must not navigate again.
            if state.router.navigate(Route::Home) {
                state.login = LoginForm::default();
                state.toasts.push(
                    Toast::new(ToastKind::Success, format!("Welcome back, {nickname}!"))
                        .with_message("Ready to learn?")
                        .with_icon(WELCOME_ICON),
                );
                state
                    .audio
                    .play_sound(SoundEffect::Success, SoundOptions::default());
                state.audio.play_bgm(BgmTrack::Menu, BgmOptions::default());
            }
        }
        Err(e) => {
            // Unreachable with DemoAuthenticator.
            tracing::warn!(error = %e, "sign-in failed");
            state.login.error = Some(e.to_string());
        }
    }

    Task::none()
}

pub(crate) fn logout(state: &mut StarLearn) -> Task<Message> {
    state.audio.stop_bgm();
    state.session.clear();
    if state.router.navigate(Route::Login) {
        state.toasts.info("See you soon!", None);
    }
    Task::none()
}
