//! Validation errors for EDR query parsing.
//!
//! Every failure here is a client input problem; callers typically translate
//! these into an HTTP 400-class response. The `Display` messages are part of
//! the contract and are stable.

use thiserror::Error;

/// Errors raised while validating an EDR query URL or one of its parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EdrQueryError {
    /// The URL path does not contain a `/collections/{name}` fragment.
    #[error("EDR URL must contain collections name")]
    MissingCollectionName,

    /// The query-type path segment is not a member of the EDR enumeration.
    #[error("unsupported query type found in url")]
    UnsupportedQueryType,

    /// A parameter could not be interpreted as a comma-delimited list.
    #[error("could not convert parameter to a list")]
    NotAList,

    /// A scalar parameter could not be coerced to an integer.
    #[error("could not convert parameter to an integer")]
    NotAnInteger,

    /// A scalar parameter could not be coerced to a float.
    #[error("could not convert parameter to a float")]
    NotAFloat,

    /// A datetime value (or one interval side) is not valid ISO 8601.
    #[error("Datetime format not recognised")]
    DatetimeNotRecognised,

    /// An open-start read on a datetime that does not begin with `../`.
    #[error("datetime not an interval open start type")]
    NotIntervalOpenStart,

    /// An open-end read on a datetime that does not end with `/..`.
    #[error("datetime not an interval open end type")]
    NotIntervalOpenEnd,

    /// The whole `z` value could not be coerced to a float.
    #[error("z can not be cast to float")]
    ZNotFloat,

    /// The `z` interval has no coercible "from" side.
    #[error("unable to get z from value")]
    ZIntervalFrom,

    /// The `z` interval has no coercible "to" side.
    #[error("unable to get z to value")]
    ZIntervalTo,

    /// The `coords` value is not decodable Well-Known Text.
    #[error("Coords can not be parsed by WKT")]
    CoordsNotWkt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            EdrQueryError::MissingCollectionName.to_string(),
            "EDR URL must contain collections name"
        );
        assert_eq!(
            EdrQueryError::UnsupportedQueryType.to_string(),
            "unsupported query type found in url"
        );
        assert_eq!(
            EdrQueryError::NotAList.to_string(),
            "could not convert parameter to a list"
        );
        assert_eq!(
            EdrQueryError::DatetimeNotRecognised.to_string(),
            "Datetime format not recognised"
        );
        assert_eq!(
            EdrQueryError::NotIntervalOpenStart.to_string(),
            "datetime not an interval open start type"
        );
        assert_eq!(
            EdrQueryError::NotIntervalOpenEnd.to_string(),
            "datetime not an interval open end type"
        );
        assert_eq!(EdrQueryError::ZNotFloat.to_string(), "z can not be cast to float");
        assert_eq!(EdrQueryError::ZIntervalFrom.to_string(), "unable to get z from value");
        assert_eq!(EdrQueryError::ZIntervalTo.to_string(), "unable to get z to value");
        assert_eq!(
            EdrQueryError::CoordsNotWkt.to_string(),
            "Coords can not be parsed by WKT"
        );
    }
}
