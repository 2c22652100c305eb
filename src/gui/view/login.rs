//! Login screen: email, password, submit.

use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{Message, StarLearn};
use super::constants::{BODY_TEXT, LOGIN_W, SMALL_TEXT, TITLE_TEXT};
use super::widgets::error_text;

pub(crate) fn build_login(state: &StarLearn) -> iced::widget::Container<'_, Message> {
    let form = &state.login;

    let email = text_input("Email", &form.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::SubmitLogin)
        .padding(10);

    let password = text_input("Password", &form.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::SubmitLogin)
        .secure(true)
        .padding(10);

    let submit = if form.loading {
        button(text("Signing in...").size(BODY_TEXT))
    } else {
        button(text("Let's go!").size(BODY_TEXT)).on_press(Message::SubmitLogin)
    };
    let submit = submit.width(Length::Fill).padding(10);

    let mut card = column![
        text("StarLearn").size(TITLE_TEXT),
        text("Sign in to keep your streak going").size(SMALL_TEXT),
        email,
        password,
        submit,
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fixed(LOGIN_W));

    if let Some(err) = &form.error {
        card = card.push(error_text(err));
    }

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
}
