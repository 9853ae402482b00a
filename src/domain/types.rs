//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty text, well-formed calendar dates) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is not a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(VehicleId, "Unique identifier for a vehicle.");
id_newtype!(RentalContractId, "Unique identifier for a rental contract.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(LicensePlate, "Registration plate of a vehicle.");
non_empty_string_newtype!(Brand, "Manufacturer name of a vehicle.");
non_empty_string_newtype!(VehicleModel, "Model name of a vehicle.");

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; for the latter the UTC
/// calendar date is used.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .map_err(|_| TypeConstraintError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(VehicleId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(
            RentalContractId::new(-3),
            Err(TypeConstraintError::NonPositiveId)
        );
        assert_eq!(VehicleId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn non_empty_strings_are_trimmed() {
        let plate = LicensePlate::new("  AB-1234 ").unwrap();
        assert_eq!(plate.as_str(), "AB-1234");
        assert_eq!(Brand::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn parses_plain_dates() {
        let date = parse_calendar_date("2025-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn parses_rfc3339_timestamps_as_utc_dates() {
        let date = parse_calendar_date("2025-03-01T23:30:00-02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(
            parse_calendar_date("not-a-date"),
            Err(TypeConstraintError::InvalidDate("not-a-date".to_string()))
        );
        assert!(parse_calendar_date("2025-02-30").is_err());
    }
}
