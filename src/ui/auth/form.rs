// SPDX-License-Identifier: MPL-2.0
//! Form fields and validators shared by the login and register screens.

use crate::ui::state::timer::{self, TimerHandle};
use std::time::{Duration, Instant};

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    /// Confirmation does not match the password.
    Mismatch,
}

impl FieldError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::Required => "error-field-required",
            FieldError::InvalidEmail => "error-email-invalid",
            FieldError::TooShort { .. } => "error-password-too-short",
            FieldError::Mismatch => "error-password-mismatch",
        }
    }
}

/// A rule applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    Email,
    MinLength(usize),
}

impl Validator {
    /// Checks `value`, returning the failure if any.
    ///
    /// Only `Required` rejects an empty value; the other rules skip it so a
    /// blank field reports a single error.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        match *self {
            Validator::Required => value.is_empty().then_some(FieldError::Required),
            _ if value.is_empty() => None,
            Validator::Email => (!is_valid_email(value)).then_some(FieldError::InvalidEmail),
            Validator::MinLength(min) => {
                (value.chars().count() < min).then_some(FieldError::TooShort { min })
            }
        }
    }
}

/// A text input with its validators and touched flag.
#[derive(Debug, Clone, Default)]
pub struct Field {
    value: String,
    touched: bool,
    validators: Vec<Validator>,
}

impl Field {
    #[must_use]
    pub fn new(validators: impl Into<Vec<Validator>>) -> Self {
        Self {
            value: String::new(),
            touched: false,
            validators: validators.into(),
        }
    }

    /// Replaces the value. Editing a field marks it touched.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// All validation failures, in validator order.
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        self.validators
            .iter()
            .filter_map(|validator| validator.check(&self.value))
            .collect()
    }

    #[must_use]
    pub fn first_error(&self) -> Option<FieldError> {
        self.validators
            .iter()
            .find_map(|validator| validator.check(&self.value))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    /// Error to display: only once the field has been touched.
    #[must_use]
    pub fn visible_error(&self) -> Option<FieldError> {
        if self.touched {
            self.first_error()
        } else {
            None
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<P> {
    /// At least one field failed validation; all fields are now touched.
    Invalid,
    /// Fields are valid but the confirmation differs from the password.
    Mismatch,
    /// A previous submission is still in flight.
    Busy,
    /// The payload was accepted and the form is submitting.
    Accepted(P),
}

impl<P> Submission<P> {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

/// The simulated request round-trip of a form.
#[derive(Debug, Clone, Default)]
pub struct SubmitState {
    pending: Option<TimerHandle>,
}

impl SubmitState {
    /// Enters the submitting state until `duration` after `now`.
    pub fn begin(&mut self, now: Instant, duration: Duration) {
        self.pending = Some(TimerHandle::start(now, duration));
    }

    /// Leaves the submitting state once the round-trip elapsed.
    ///
    /// Returns `true` when this call completed the submission.
    pub fn tick(&mut self, now: Instant) -> bool {
        timer::take_due(&mut self.pending, now).is_some()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }
}

/// Email syntax check following the usual web form rules.
///
/// Exactly one `@`; a local part of dot-separated atoms (at most 64
/// characters); a domain of dot-separated labels of letters, digits and
/// inner hyphens (at most 63 characters each); 254 characters overall.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

    if value.is_empty() || value.len() > 254 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }

    let local_ok = local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    });

    let domain_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    local_ok && domain_ok
}
