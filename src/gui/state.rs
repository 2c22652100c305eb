//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::path::PathBuf;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::core::audio::{AudioController, AudioPrefs, BgmTrack, RodioBackend, SoundEffect};
use crate::core::auth::{Credentials, DemoAuthenticator};
use crate::core::router::Router;
use crate::core::session::{SessionStore, UserSession};
use crate::core::toast::{ToastCenter, ToastEvent, ToastId, ToastKind};
use crate::error::AuthError;

use super::toast_layer::ToastLayer;

/// Draft login form (what the user typed).
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct LoginForm {
    pub email: String,
    pub password: String,
    /// True while the simulated sign-in is running.
    pub loading: bool,
    /// Inline message under the form.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// Fade targets offered by the music controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeDirection {
    Out,
    In,
}

/// App state
pub(crate) struct StarLearn {
    pub config: Config,
    /// Where preference changes are saved. `None` = don't persist.
    pub config_path: Option<PathBuf>,

    pub router: Router,
    pub session: SessionStore,
    pub login: LoginForm,
    pub auth: DemoAuthenticator,

    // Toasts
    pub toasts: ToastCenter,
    pub toast_events: broadcast::Receiver<ToastEvent>,
    pub toast_layer: ToastLayer,

    // Audio
    pub audio: AudioController<RodioBackend>,
}

impl StarLearn {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        runtime: Handle,
        backend: RodioBackend,
    ) -> Self {
        let toasts = ToastCenter::new(runtime);
        let toast_events = toasts.subscribe();
        let audio = AudioController::new(
            backend,
            AudioPrefs::from(&config),
            config.assets_dir.clone(),
        );
        let auth = DemoAuthenticator::new(config.login_delay());

        Self {
            config,
            config_path,
            router: Router::new(),
            session: SessionStore::new(),
            login: LoginForm::default(),
            auth,
            toasts,
            toast_events,
            toast_layer: ToastLayer::default(),
            audio,
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Periodic UI tick: drains toast events, advances fades/animations.
    Tick(Instant),

    // Login
    EmailChanged(String),
    PasswordChanged(String),
    SubmitLogin,
    LoginFinished(Result<UserSession, AuthError>),
    Logout,

    // Toasts
    ShowToast(ToastKind),
    DismissToast(ToastId),
    ClearToasts,

    // Audio
    PlaySound(SoundEffect),
    PlayBgm(BgmTrack),
    StopBgm,
    FadeBgm(FadeDirection),
    ToggleSound,
    ToggleMusic,
    SetEffectsVolume(f32),
    SetMusicVolume(f32),
    /// Slider released; write the settings file.
    SaveSettings,
}
