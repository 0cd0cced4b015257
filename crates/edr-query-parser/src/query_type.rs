//! EDR query type enumeration.

use serde::{Deserialize, Serialize};

use crate::errors::EdrQueryError;

/// The EDR operation kind requested, derived from URL path position.
///
/// `instances` is a path shape, not a query type; it is deliberately
/// absent from this enumeration and fails lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Position,
    Radius,
    Area,
    Cube,
    Trajectory,
    Corridor,
    Items,
    Locations,
}

impl QueryType {
    /// Look up a path segment in the enumeration. Matching is exact and
    /// case-sensitive.
    pub fn parse(segment: &str) -> Result<Self, EdrQueryError> {
        match segment {
            "position" => Ok(QueryType::Position),
            "radius" => Ok(QueryType::Radius),
            "area" => Ok(QueryType::Area),
            "cube" => Ok(QueryType::Cube),
            "trajectory" => Ok(QueryType::Trajectory),
            "corridor" => Ok(QueryType::Corridor),
            "items" => Ok(QueryType::Items),
            "locations" => Ok(QueryType::Locations),
            _ => Err(EdrQueryError::UnsupportedQueryType),
        }
    }

    /// The segment name of this query type.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Position => "position",
            QueryType::Radius => "radius",
            QueryType::Area => "area",
            QueryType::Cube => "cube",
            QueryType::Trajectory => "trajectory",
            QueryType::Corridor => "corridor",
            QueryType::Items => "items",
            QueryType::Locations => "locations",
        }
    }

    pub fn is_position(&self) -> bool {
        matches!(self, QueryType::Position)
    }

    pub fn is_radius(&self) -> bool {
        matches!(self, QueryType::Radius)
    }

    pub fn is_area(&self) -> bool {
        matches!(self, QueryType::Area)
    }

    pub fn is_cube(&self) -> bool {
        matches!(self, QueryType::Cube)
    }

    pub fn is_trajectory(&self) -> bool {
        matches!(self, QueryType::Trajectory)
    }

    pub fn is_corridor(&self) -> bool {
        matches!(self, QueryType::Corridor)
    }

    pub fn is_items(&self) -> bool {
        matches!(self, QueryType::Items)
    }

    pub fn is_locations(&self) -> bool {
        matches!(self, QueryType::Locations)
    }
}
