use super::{Error, ErrorKind};

use std::fmt;

/// Error kinds that only carry a description.
#[derive(Debug, Clone)]
pub(super) struct Message {
    label: &'static str,
    detail: Box<str>,
}

impl Message {
    fn new(label: &'static str, detail: impl Into<String>) -> Message {
        Message {
            label,
            detail: detail.into().into_boxed_str(),
        }
    }
}

impl std::error::Error for Message {}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)?;

        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }

        Ok(())
    }
}

macro_rules! message_kinds {
    (
        $(
            $( #[$doc:meta] )*
            $variant:ident($label:literal) => $new:ident, $is:ident;
        )*
    ) => {
        impl Error {
            $(
                $( #[$doc] )*
                pub fn $new(detail: impl Into<String>) -> Error {
                    ErrorKind::$variant(Message::new($label, detail)).into()
                }

                pub fn $is(&self) -> bool {
                    self.any_kind(|kind| matches!(kind, ErrorKind::$variant(_)))
                }
            )*
        }
    };
}

message_kinds! {
    /// The connection URL cannot be parsed or names no available driver.
    InvalidConnectionUrl("invalid connection URL") => invalid_connection_url, is_invalid_connection_url;

    /// The requested dialect key has no registered type mapper.
    InvalidDriverConfiguration("invalid driver configuration")
        => invalid_driver_configuration, is_invalid_driver_configuration;

    /// A driver response does not have the shape the caller expects, for
    /// example a row count where rows were requested.
    InvalidResult("invalid result") => invalid_result, is_invalid_result;

    /// A statement cannot be composed: no model is bound, or update input is
    /// malformed.
    InvalidStatement("invalid statement") => invalid_statement, is_invalid_statement;

    /// A lookup that requires a record matched no rows. Distinct from errors
    /// reported by the store.
    RecordNotFound("record not found") => record_not_found, is_record_not_found;
}
