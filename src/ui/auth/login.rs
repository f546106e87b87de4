// SPDX-License-Identifier: MPL-2.0
//! Login screen.

use super::form::{Field, Submission, SubmitState, Validator};
use super::{field_input, form_card, Credentials, ViewContext};
use crate::config::SUBMIT_SIMULATION_MS;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    OpenRegister,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(Submission<Credentials>),
    OpenRegister,
}

#[derive(Debug, Clone)]
pub struct State {
    email: Field,
    password: Field,
    submit: SubmitState,
}

impl State {
    #[must_use]
    pub fn new(min_password_length: usize) -> Self {
        Self {
            email: Field::new([Validator::Required, Validator::Email]),
            password: Field::new([
                Validator::Required,
                Validator::MinLength(min_password_length),
            ]),
            submit: SubmitState::default(),
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email.set_value(value);
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password.set_value(value);
                Event::None
            }
            Message::Submit => Event::Submitted(self.submit(now)),
            Message::OpenRegister => Event::OpenRegister,
        }
    }

    /// Validates the form and, when valid, enters the submitting state.
    pub fn submit(&mut self, now: Instant) -> Submission<Credentials> {
        if self.submit.is_submitting() {
            return Submission::Busy;
        }
        if !self.is_valid() {
            self.email.touch();
            self.password.touch();
            return Submission::Invalid;
        }

        let credentials = Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        };
        tracing::info!(email = %credentials.email, "login submitted");
        self.submit
            .begin(now, Duration::from_millis(SUBMIT_SIMULATION_MS));
        Submission::Accepted(credentials)
    }

    /// Completes a simulated submission. Returns `true` when it just finished.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.submit.tick(now)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    #[must_use]
    pub fn email(&self) -> &Field {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &Field {
        &self.password
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let submit_label = if self.is_submitting() {
            i18n.tr("login-submitting")
        } else {
            i18n.tr("login-submit")
        };
        let submit_button = button(Text::new(submit_label))
            .on_press_maybe((!self.is_submitting()).then_some(Message::Submit))
            .width(Length::Fill)
            .style(styles::button::primary);

        let register_link = button(Text::new(i18n.tr("login-register-link")))
            .on_press(Message::OpenRegister)
            .style(styles::button::link);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(super::title(i18n.tr("login-title")))
            .push(field_input(
                i18n,
                i18n.tr("field-email"),
                &self.email,
                false,
                Message::EmailChanged,
                Message::Submit,
            ))
            .push(field_input(
                i18n,
                i18n.tr("field-password"),
                &self.password,
                true,
                Message::PasswordChanged,
                Message::Submit,
            ))
            .push(submit_button)
            .push(register_link);

        form_card(content)
    }
}
