//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod home;
mod login;
mod toasts;
mod widgets;

use iced::Element;
use iced::widget::stack;

use super::state::{Message, StarLearn};
use crate::core::router::Route;

pub(crate) fn view(state: &StarLearn) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match state.router.current() {
        Route::Login => login::build_login(state).into(),
        Route::Home => home::build_home(state).into(),
    };

    // Toasts float above whichever screen is showing.
    stack![screen, toasts::build_overlay(&state.toast_layer)].into()
}
