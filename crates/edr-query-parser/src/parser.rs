//! The EDR query URL facade.
//!
//! [`EdrQueryParser`] validates the URL shape once at construction, then
//! exposes one read-only accessor per EDR query parameter or path concept.
//! Query-parameter accessors construct a fresh typed wrapper on every call
//! and perform no validation themselves; the wrapper validates lazily when
//! its methods are invoked.

use crate::errors::EdrQueryError;
use crate::parameters::{
    CoordsParameter, DateTimeParameter, FloatListParameter, FloatParameter, IntParameter,
    ListParameter, Parameter, ZParameter,
};
use crate::query_type::QueryType;
use crate::url::EdrUrl;

/// Parsed view over an EDR query URL.
///
/// # Example
///
/// ```rust
/// use edr_query_parser::EdrQueryParser;
///
/// let query = EdrQueryParser::new(
///     "https://example.com/collections/metar/position?coords=POINT(0 51.48)&z=12/13",
/// )?;
/// assert_eq!(query.collection_name(), "metar");
/// assert!(query.query_type()?.is_position());
/// assert_eq!(query.z().interval_from()?, 12.0);
/// # Ok::<(), edr_query_parser::EdrQueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EdrQueryParser {
    url: EdrUrl,
    collection_name: String,
}

impl EdrQueryParser {
    /// Decompose and validate an EDR query URL.
    ///
    /// Fails when the path lacks the literal `/collections/{name}`
    /// fragment. Everything else is validated lazily by the individual
    /// accessors.
    pub fn new(url: &str) -> Result<Self, EdrQueryError> {
        let url = EdrUrl::parse(url);
        if !url.path().contains("/collections/") {
            return Err(EdrQueryError::MissingCollectionName);
        }
        let collection_name = url
            .segment_after("collections")
            .ok_or(EdrQueryError::MissingCollectionName)?
            .to_string();
        Ok(Self {
            url,
            collection_name,
        })
    }

    /// The path segment immediately following `collections`.
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// True iff the segment two positions after `collections` is
    /// `instances`.
    pub fn is_instances(&self) -> bool {
        self.url
            .segment_relative("collections", 2)
            .map_or(false, |segment| segment == "instances")
    }

    /// The requested query type.
    ///
    /// For instance-scoped paths
    /// (`.../collections/{id}/instances/{instance-id}/{query-type}`) the
    /// query type is the last path segment; otherwise it is the segment two
    /// positions after `collections`.
    pub fn query_type(&self) -> Result<QueryType, EdrQueryError> {
        let segment = if self.is_instances() {
            self.url.last_segment()
        } else {
            self.url.segment_relative("collections", 2)
        };
        QueryType::parse(segment.ok_or(EdrQueryError::UnsupportedQueryType)?)
    }

    /// The path segment following `items`, when present.
    pub fn item_id(&self) -> Option<&str> {
        self.url.segment_after("items")
    }

    /// Alias of [`Self::item_id`], kept for compatibility.
    pub fn items_id(&self) -> Option<&str> {
        self.item_id()
    }

    /// The path segment following `locations`, when present.
    pub fn location_id(&self) -> Option<&str> {
        self.url.segment_after("locations")
    }

    /// Alias of [`Self::location_id`], kept for compatibility.
    pub fn locations_id(&self) -> Option<&str> {
        self.location_id()
    }

    /// The path segment following `instances`, when present.
    pub fn instance_id(&self) -> Option<&str> {
        self.url.segment_after("instances")
    }

    /// Alias of [`Self::instance_id`], kept for compatibility.
    pub fn instances_id(&self) -> Option<&str> {
        self.instance_id()
    }

    /// The `bbox` parameter as a float list.
    pub fn bbox(&self) -> FloatListParameter {
        FloatListParameter::new(self.query("bbox"))
    }

    /// The `coords` parameter as WKT geometry.
    pub fn coords(&self) -> CoordsParameter {
        CoordsParameter::new(self.query("coords"))
    }

    /// The `corridor-height` parameter.
    pub fn corridor_height(&self) -> FloatParameter {
        FloatParameter::new(self.query("corridor-height"))
    }

    /// The `corridor-width` parameter.
    pub fn corridor_width(&self) -> FloatParameter {
        FloatParameter::new(self.query("corridor-width"))
    }

    /// The `crs` parameter.
    pub fn crs(&self) -> Parameter {
        Parameter::new(self.query("crs"))
    }

    /// The `datetime` parameter.
    pub fn datetime(&self) -> DateTimeParameter {
        DateTimeParameter::new(self.query("datetime"))
    }

    /// The output format, from the `f` parameter.
    pub fn format(&self) -> Parameter {
        Parameter::new(self.query("f"))
    }

    /// The `height-units` parameter.
    pub fn height_units(&self) -> Parameter {
        Parameter::new(self.query("height-units"))
    }

    /// The `limit` parameter.
    pub fn limit(&self) -> IntParameter {
        IntParameter::new(self.query("limit"))
    }

    /// The `next` pagination token.
    pub fn next(&self) -> Parameter {
        Parameter::new(self.query("next"))
    }

    /// The `parameter-name` parameter as a list.
    pub fn parameter_name(&self) -> ListParameter {
        ListParameter::new(self.query("parameter-name"))
    }

    /// The `width-units` parameter.
    pub fn width_units(&self) -> Parameter {
        Parameter::new(self.query("width-units"))
    }

    /// The `within` radius parameter.
    pub fn within(&self) -> FloatParameter {
        FloatParameter::new(self.query("within"))
    }

    /// The `within-units` parameter.
    pub fn within_units(&self) -> Parameter {
        Parameter::new(self.query("within-units"))
    }

    /// The `z` vertical level parameter.
    pub fn z(&self) -> ZParameter {
        ZParameter::new(self.query("z"))
    }

    fn query(&self, name: &str) -> Option<&str> {
        self.url.query_parameter(name)
    }
}
