// SPDX-License-Identifier: MPL-2.0
//! Login and register screens.
//!
//! Both screens validate on every edit, reveal field errors once a field is
//! touched, and run a simulated request while submitting.

pub mod form;
pub mod login;
pub mod register;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use form::{Field, FieldError};
use iced::widget::{text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Email and password captured by a form submission.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Contextual data needed to render an auth screen.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Localized message for a field error.
#[must_use]
pub fn error_message(i18n: &I18n, error: FieldError) -> String {
    match error {
        FieldError::TooShort { min } => {
            let min = min.to_string();
            i18n.tr_with_args(error.i18n_key(), &[("min", min.as_str())])
        }
        _ => i18n.tr(error.i18n_key()),
    }
}

fn title<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_LG).into()
}

fn field_error<'a, Message: 'a>(i18n: &I18n, error: FieldError) -> Element<'a, Message> {
    text(error_message(i18n, error))
        .size(typography::CAPTION)
        .style(text::danger)
        .into()
}

/// A labelled input with its visible error underneath.
fn field_input<'a, Message: Clone + 'a>(
    i18n: &I18n,
    label: String,
    field: &'a Field,
    secure: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input(&label, field.value())
        .on_input(on_input)
        .on_submit(on_submit)
        .secure(secure)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(input);

    if let Some(error) = field.visible_error() {
        column = column.push(field_error(i18n, error));
    }
    column.into()
}

/// Centers `content` in a fixed-width card.
fn form_card<'a, Message: 'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    let card = Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials {
            email: "a@b.com".into(),
            password: "hunter22".into(),
        };
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn too_short_message_includes_minimum() {
        let i18n = I18n::default();
        let message = error_message(&i18n, FieldError::TooShort { min: 8 });
        assert!(message.contains('8'), "{message}");
    }
}
