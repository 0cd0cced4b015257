//! OGC API - Environmental Data Retrieval (EDR) query URL parsing.
//!
//! This crate turns a raw EDR query URL into typed, validated accessors:
//! which collection is being queried, which query type (position, radius,
//! area, ...), the requested time range, vertical level, geometry, and so
//! on. It is a pure library — no I/O, no persistence, no query execution;
//! every failure is a value the calling server translates into an HTTP
//! 400-class response.
//!
//! # Example
//!
//! ```rust
//! use edr_query_parser::EdrQueryParser;
//!
//! let query = EdrQueryParser::new(
//!     "https://example.com/collections/metar/position?coords=POINT(0 51.48)&datetime=2018-02-12T23:20:52Z",
//! )?;
//!
//! assert_eq!(query.collection_name(), "metar");
//! assert!(query.query_type()?.is_position());
//! assert_eq!(query.coords().coords_type()?, "Point");
//! assert!(!query.datetime().is_interval());
//! # Ok::<(), edr_query_parser::EdrQueryError>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod parameters;
pub mod parser;
pub mod query_type;
pub mod url;

// Re-export commonly used types
pub use errors::EdrQueryError;
pub use geometry::Geometry;
pub use parameters::{
    CoordsParameter, DateTimeParameter, FloatListParameter, FloatParameter, IntParameter,
    IntervalParameter, ListParameter, Parameter, ZParameter,
};
pub use parser::EdrQueryParser;
pub use query_type::QueryType;
pub use self::url::EdrUrl;
