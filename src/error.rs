// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Locale(String),
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Locale(_) => "error-locale",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<unic_langid::LanguageIdentifierError> for Error {
    fn from(err: unic_langid::LanguageIdentifierError) -> Self {
        Error::Locale(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.i18n_key(), "notification-config-load-error");
    }

    #[test]
    fn invalid_language_tag_becomes_locale_error() {
        let parsed = "not a locale!".parse::<unic_langid::LanguageIdentifier>();
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Locale(_)));
        assert!(format!("{}", err).starts_with("Locale Error"));
    }
}
