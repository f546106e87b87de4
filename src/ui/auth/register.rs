// SPDX-License-Identifier: MPL-2.0
//! Register screen.

use super::form::{Field, FieldError, Submission, SubmitState, Validator};
use super::{field_error, field_input, form_card, Credentials, ViewContext};
use crate::config::SUBMIT_SIMULATION_MS;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Messages emitted by the register screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Submit,
    OpenLogin,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(Submission<Credentials>),
    OpenLogin,
}

#[derive(Debug, Clone)]
pub struct State {
    email: Field,
    password: Field,
    confirm_password: Field,
    /// Set by the last submit attempt whose passwords differed.
    mismatch: bool,
    submit: SubmitState,
}

impl State {
    #[must_use]
    pub fn new(min_password_length: usize) -> Self {
        let password_rules = [
            Validator::Required,
            Validator::MinLength(min_password_length),
        ];
        Self {
            email: Field::new([Validator::Required, Validator::Email]),
            password: Field::new(password_rules),
            confirm_password: Field::new(password_rules),
            mismatch: false,
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
                self.mismatch = false;
                Event::None
            }
            Message::ConfirmPasswordChanged(value) => {
                self.confirm_password.set_value(value);
                self.mismatch = false;
                Event::None
            }
            Message::Submit => Event::Submitted(self.submit(now)),
            Message::OpenLogin => Event::OpenLogin,
        }
    }

    /// Validates fields, then password equality, then enters the submitting state.
    pub fn submit(&mut self, now: Instant) -> Submission<Credentials> {
        if self.submit.is_submitting() {
            return Submission::Busy;
        }
        if !self.fields_valid() {
            self.email.touch();
            self.password.touch();
            self.confirm_password.touch();
            return Submission::Invalid;
        }
        if self.password.value() != self.confirm_password.value() {
            tracing::info!("register rejected: passwords do not match");
            self.mismatch = true;
            return Submission::Mismatch;
        }

        let credentials = Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        };
        tracing::info!(email = %credentials.email, "register submitted");
        self.submit
            .begin(now, Duration::from_millis(SUBMIT_SIMULATION_MS));
        Submission::Accepted(credentials)
    }

    /// Completes a simulated submission. Returns `true` when it just finished.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.submit.tick(now)
    }

    fn fields_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid() && self.confirm_password.is_valid()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        self.mismatch
    }

    #[must_use]
    pub fn email(&self) -> &Field {
        &self.email
    }

    #[must_use]
    pub fn confirm_password(&self) -> &Field {
        &self.confirm_password
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let submit_label = if self.is_submitting() {
            i18n.tr("register-submitting")
        } else {
            i18n.tr("register-submit")
        };
        let submit_button = button(Text::new(submit_label))
            .on_press_maybe((!self.is_submitting()).then_some(Message::Submit))
            .width(Length::Fill)
            .style(styles::button::primary);

        let login_link = button(Text::new(i18n.tr("register-login-link")))
            .on_press(Message::OpenLogin)
            .style(styles::button::link);

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(super::title(i18n.tr("register-title")))
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
            .push(field_input(
                i18n,
                i18n.tr("field-confirm-password"),
                &self.confirm_password,
                true,
                Message::ConfirmPasswordChanged,
                Message::Submit,
            ));

        if self.mismatch {
            content = content.push(field_error(i18n, FieldError::Mismatch));
        }

        form_card(content.push(submit_button).push(login_link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn fill(state: &mut State, email: &str, password: &str, confirm: &str) {
        let now = Instant::now();
        state.update(Message::EmailChanged(email.into()), now);
        state.update(Message::PasswordChanged(password.into()), now);
        state.update(Message::ConfirmPasswordChanged(confirm.into()), now);
    }

    #[test]
    fn mismatched_passwords_short_circuit_before_submitting() {
        let mut state = State::new(8);
        fill(&mut state, "a@b.com", "password-one", "password-two");

        let event = state.update(Message::Submit, Instant::now());

        assert_eq!(event, Event::Submitted(Submission::Mismatch));
        assert!(!state.is_submitting());
        assert!(state.has_mismatch());
    }

    #[test]
    fn editing_a_password_clears_mismatch_flag() {
        let mut state = State::new(8);
        fill(&mut state, "a@b.com", "password-one", "password-two");
        state.submit(Instant::now());

        state.update(
            Message::ConfirmPasswordChanged("password-one".into()),
            Instant::now(),
        );
        assert!(!state.has_mismatch());
    }

    #[test]
    fn invalid_fields_are_reported_before_mismatch() {
        let mut state = State::new(8);
        fill(&mut state, "a@b.com", "short", "other");

        assert_eq!(state.submit(Instant::now()), Submission::Invalid);
        assert!(!state.has_mismatch());
        assert!(state.confirm_password().is_touched());
    }

    #[test]
    fn matching_passwords_are_accepted() {
        let t0 = Instant::now();
        let mut state = State::new(8);
        fill(&mut state, "new@user.io", "correct horse", "correct horse");

        let submission = state.submit(t0);
        assert!(submission.is_accepted());
        assert!(state.is_submitting());
        assert!(state.tick(t0 + Duration::from_millis(SUBMIT_SIMULATION_MS)));
    }

    #[test]
    fn register_view_renders_with_mismatch() {
        let i18n = I18n::default();
        let mut state = State::new(8);
        fill(&mut state, "a@b.com", "password-one", "password-two");
        state.submit(Instant::now());
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
