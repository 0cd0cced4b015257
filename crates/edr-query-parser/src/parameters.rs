//! Typed wrappers over raw EDR query parameter values.
//!
//! Each wrapper holds the single raw string extracted from the URL, or
//! nothing when the parameter was absent, and interprets it lazily: nothing
//! is validated at construction, and every accessor is a pure function of
//! the raw value, callable any number of times. The historical inheritance
//! diamond (vertical level being both a float list and an interval) is
//! flattened into one concrete struct per wrapper kind.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::errors::EdrQueryError;
use crate::geometry::Geometry;

/// A plain optional string parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    value: Option<String>,
}

impl Parameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    /// The raw value, verbatim.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True iff the parameter was present in the URL. An empty string
    /// counts as set.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// A parameter coerced to an integer on read.
#[derive(Debug, Clone, PartialEq)]
pub struct IntParameter {
    value: Option<String>,
}

impl IntParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    /// The coerced value. Absent or empty raw values are `Ok(None)`;
    /// present-but-unparseable text is an error.
    pub fn value(&self) -> Result<Option<i64>, EdrQueryError> {
        match self.value.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| EdrQueryError::NotAnInteger),
        }
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// A parameter coerced to a float on read.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatParameter {
    value: Option<String>,
}

impl FloatParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    /// The coerced value. Absent or empty raw values are `Ok(None)`;
    /// present-but-unparseable text is an error.
    pub fn value(&self) -> Result<Option<f64>, EdrQueryError> {
        match self.value.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| EdrQueryError::NotAFloat),
        }
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// A comma-delimited list parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParameter {
    value: Option<String>,
}

impl ListParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// True iff the parameter is set and holds more than one element.
    pub fn is_list(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains(','))
    }

    /// The elements, each trimmed of leading and trailing space characters
    /// (only spaces, not all whitespace).
    pub fn list(&self) -> Result<Vec<String>, EdrQueryError> {
        let raw = self.value.as_deref().ok_or(EdrQueryError::NotAList)?;
        Ok(raw
            .split(',')
            .map(|element| element.trim_matches(' ').to_string())
            .collect())
    }
}

/// A comma-delimited list parameter with float elements.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatListParameter {
    value: Option<String>,
}

impl FloatListParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_list(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains(','))
    }

    /// The elements coerced to floats. Any element failing coercion fails
    /// the whole read.
    pub fn list(&self) -> Result<Vec<f64>, EdrQueryError> {
        let raw = self.value.as_deref().ok_or(EdrQueryError::NotAList)?;
        raw.split(',')
            .map(|element| {
                element
                    .trim_matches(' ')
                    .parse()
                    .map_err(|_| EdrQueryError::NotAList)
            })
            .collect()
    }
}

/// Split a raw value once on the first `/`. Anything after the first `/`
/// belongs to the "to" side, verbatim.
fn split_interval(value: Option<&str>) -> Option<(&str, &str)> {
    value.and_then(|raw| raw.split_once('/'))
}

/// A `from/to` interval parameter over raw strings.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalParameter {
    value: Option<String>,
}

impl IntervalParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// True iff the parameter is set and contains a `/` separator.
    pub fn is_interval(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains('/'))
    }

    /// The "from" side, when the value is an interval.
    pub fn interval_from(&self) -> Option<&str> {
        split_interval(self.value.as_deref()).map(|(from, _)| from)
    }

    /// The "to" side, when the value is an interval.
    pub fn interval_to(&self) -> Option<&str> {
        split_interval(self.value.as_deref()).map(|(_, to)| to)
    }
}

/// An ISO 8601 datetime parameter, optionally an interval with open ends.
///
/// Accepts (whole value or either interval side):
/// - RFC 3339: `2018-02-12T23:20:52Z`, `2019-09-07T15:50:00-04:00`
/// - minute precision with offset: `2019-09-07T15:50-04:00`
/// - naive datetimes (`2018-02-12T23:20:52`, `2018-02-12T23:20`) and bare
///   dates (`2018-02-12`), interpreted as UTC
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeParameter {
    value: Option<String>,
}

impl DateTimeParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_interval(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains('/'))
    }

    /// The whole raw value parsed as a single instant.
    pub fn exact(&self) -> Result<DateTime<FixedOffset>, EdrQueryError> {
        parse_iso8601(
            self.value
                .as_deref()
                .ok_or(EdrQueryError::DatetimeNotRecognised)?,
        )
    }

    /// The parsed "from" side of the interval.
    pub fn interval_from(&self) -> Result<DateTime<FixedOffset>, EdrQueryError> {
        let (from, _) = split_interval(self.value.as_deref())
            .ok_or(EdrQueryError::DatetimeNotRecognised)?;
        parse_iso8601(from)
    }

    /// The parsed "to" side of the interval.
    pub fn interval_to(&self) -> Result<DateTime<FixedOffset>, EdrQueryError> {
        let (_, to) = split_interval(self.value.as_deref())
            .ok_or(EdrQueryError::DatetimeNotRecognised)?;
        parse_iso8601(to)
    }

    /// True iff the raw value begins with the `../` open-start marker.
    pub fn is_interval_open_start(&self) -> bool {
        self.value
            .as_deref()
            .map_or(false, |raw| raw.starts_with("../"))
    }

    /// True iff the raw value ends with the `/..` open-end marker.
    pub fn is_interval_open_end(&self) -> bool {
        self.value
            .as_deref()
            .map_or(false, |raw| raw.ends_with("/.."))
    }

    /// The instant of an open-start interval (`../<instant>`).
    pub fn interval_open_start(&self) -> Result<DateTime<FixedOffset>, EdrQueryError> {
        let raw = self
            .value
            .as_deref()
            .and_then(|raw| raw.strip_prefix("../"))
            .ok_or(EdrQueryError::NotIntervalOpenStart)?;
        parse_iso8601(raw)
    }

    /// The instant of an open-end interval (`<instant>/..`).
    pub fn interval_open_end(&self) -> Result<DateTime<FixedOffset>, EdrQueryError> {
        let raw = self
            .value
            .as_deref()
            .and_then(|raw| raw.strip_suffix("/.."))
            .ok_or(EdrQueryError::NotIntervalOpenEnd)?;
        parse_iso8601(raw)
    }
}

/// A vertical level (`z`) parameter: a float scalar, a float list, a
/// `from/to` float interval, or the literal `all`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZParameter {
    value: Option<String>,
}

impl ZParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// True iff the raw value case-insensitively equals `all`.
    pub fn is_all(&self) -> bool {
        self.value
            .as_deref()
            .map_or(false, |raw| raw.eq_ignore_ascii_case("all"))
    }

    pub fn is_interval(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains('/'))
    }

    pub fn is_list(&self) -> bool {
        self.value.as_deref().map_or(false, |raw| raw.contains(','))
    }

    /// The whole raw value coerced to a float.
    pub fn float(&self) -> Result<f64, EdrQueryError> {
        self.value
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or(EdrQueryError::ZNotFloat)
    }

    /// The "from" side of the interval coerced to a float.
    pub fn interval_from(&self) -> Result<f64, EdrQueryError> {
        split_interval(self.value.as_deref())
            .and_then(|(from, _)| from.trim().parse().ok())
            .ok_or(EdrQueryError::ZIntervalFrom)
    }

    /// The "to" side of the interval coerced to a float.
    pub fn interval_to(&self) -> Result<f64, EdrQueryError> {
        split_interval(self.value.as_deref())
            .and_then(|(_, to)| to.trim().parse().ok())
            .ok_or(EdrQueryError::ZIntervalTo)
    }

    /// The elements coerced to floats.
    pub fn list(&self) -> Result<Vec<f64>, EdrQueryError> {
        FloatListParameter::new(self.value.as_deref()).list()
    }
}

/// A `coords` parameter decoded from Well-Known Text.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordsParameter {
    value: Option<String>,
}

impl CoordsParameter {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The decoded geometry.
    pub fn wkt(&self) -> Result<Geometry, EdrQueryError> {
        Geometry::from_wkt(self.value.as_deref().ok_or(EdrQueryError::CoordsNotWkt)?)
    }

    /// The decoded geometry's type tag, e.g. `"Point"`.
    pub fn coords_type(&self) -> Result<&'static str, EdrQueryError> {
        Ok(self.wkt()?.geometry_type())
    }

    /// The decoded geometry's nested coordinate arrays.
    pub fn coordinates(&self) -> Result<serde_json::Value, EdrQueryError> {
        self.wkt()?.coordinates()
    }
}

/// Parse one ISO 8601 instant, trying formats from strictest to loosest.
fn parse_iso8601(value: &str) -> Result<DateTime<FixedOffset>, EdrQueryError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    // Minute precision with a numeric offset, e.g. 2019-09-07T15:50-04:00.
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    // Naive datetimes are interpreted as UTC.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(parsed, Utc).fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or(EdrQueryError::DatetimeNotRecognised)?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).fixed_offset());
    }

    Err(EdrQueryError::DatetimeNotRecognised)
}
