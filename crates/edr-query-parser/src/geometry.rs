//! Well-Known Text geometry decoding for the `coords` parameter.
//!
//! A small WKT grammar decoder producing a [`Geometry`] value. Supported
//! kinds:
//! - `POINT(lon lat)`
//! - `MULTIPOINT((lon lat),(lon lat))` and `MULTIPOINT(lon lat, lon lat)`
//! - `LINESTRING(lon lat, lon lat, ...)`
//! - `MULTILINESTRING((lon lat, ...),(lon lat, ...))`
//! - `POLYGON((ring),(hole))`
//! - `MULTIPOLYGON(((ring)),((ring)))`
//!
//! Tags are case-insensitive. Positions are whitespace-separated floats, two
//! or more per position; extra dimensions are carried through unchanged. No
//! coordinate-range validation happens here.

use serde::{Deserialize, Serialize};

use crate::errors::EdrQueryError;

/// A geometry decoded from WKT.
///
/// Serializes in the GeoJSON shape, e.g.
/// `{"type": "Point", "coordinates": [0.0, 51.48]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A single position.
    Point {
        /// Coordinates as `[lon, lat, ...]`.
        coordinates: Vec<f64>,
    },

    /// A set of positions.
    MultiPoint {
        /// Array of positions.
        coordinates: Vec<Vec<f64>>,
    },

    /// A path of positions.
    LineString {
        /// Array of positions.
        coordinates: Vec<Vec<f64>>,
    },

    /// A set of paths.
    MultiLineString {
        /// Array of linestring position arrays.
        coordinates: Vec<Vec<Vec<f64>>>,
    },

    /// An outer ring with optional holes.
    Polygon {
        /// Array of rings, each an array of positions.
        coordinates: Vec<Vec<Vec<f64>>>,
    },

    /// A set of polygons.
    MultiPolygon {
        /// Array of polygons.
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

impl Geometry {
    /// Decode a WKT string.
    pub fn from_wkt(input: &str) -> Result<Self, EdrQueryError> {
        let input = input.trim();
        let open = input.find('(').ok_or(EdrQueryError::CoordsNotWkt)?;
        if !input.ends_with(')') {
            return Err(EdrQueryError::CoordsNotWkt);
        }

        let tag = input[..open].trim().to_ascii_uppercase();
        let body = &input[open + 1..input.len() - 1];

        match tag.as_str() {
            "POINT" => Ok(Geometry::Point {
                coordinates: parse_position(body)?,
            }),
            "MULTIPOINT" => Ok(Geometry::MultiPoint {
                coordinates: parse_positions(body)?,
            }),
            "LINESTRING" => Ok(Geometry::LineString {
                coordinates: parse_positions(body)?,
            }),
            "MULTILINESTRING" => Ok(Geometry::MultiLineString {
                coordinates: parse_rings(body)?,
            }),
            "POLYGON" => Ok(Geometry::Polygon {
                coordinates: parse_rings(body)?,
            }),
            "MULTIPOLYGON" => Ok(Geometry::MultiPolygon {
                coordinates: parse_polygons(body)?,
            }),
            _ => Err(EdrQueryError::CoordsNotWkt),
        }
    }

    /// The geometry's type tag, e.g. `"Point"`.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }

    /// The nested coordinate arrays as a JSON value.
    pub fn coordinates(&self) -> Result<serde_json::Value, EdrQueryError> {
        let value = match self {
            Geometry::Point { coordinates } => serde_json::to_value(coordinates),
            Geometry::MultiPoint { coordinates } => serde_json::to_value(coordinates),
            Geometry::LineString { coordinates } => serde_json::to_value(coordinates),
            Geometry::MultiLineString { coordinates } => serde_json::to_value(coordinates),
            Geometry::Polygon { coordinates } => serde_json::to_value(coordinates),
            Geometry::MultiPolygon { coordinates } => serde_json::to_value(coordinates),
        };
        value.map_err(|_| EdrQueryError::CoordsNotWkt)
    }
}

/// Split a WKT body on commas at parenthesis depth zero.
fn split_top_level(body: &str) -> Result<Vec<&str>, EdrQueryError> {
    let mut items = Vec::new();
    let mut depth: u32 = 0;
    let mut start = 0;

    for (index, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or(EdrQueryError::CoordsNotWkt)?,
            ',' if depth == 0 => {
                items.push(body[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(EdrQueryError::CoordsNotWkt);
    }
    items.push(body[start..].trim());
    Ok(items)
}

/// Strip exactly one layer of surrounding parentheses.
fn strip_parens(item: &str) -> Result<&str, EdrQueryError> {
    item.trim()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .map(str::trim)
        .ok_or(EdrQueryError::CoordsNotWkt)
}

/// `(lon lat)` or bare `lon lat`.
fn strip_optional_parens(item: &str) -> &str {
    strip_parens(item).unwrap_or_else(|_| item.trim())
}

fn parse_position(item: &str) -> Result<Vec<f64>, EdrQueryError> {
    let coordinates: Vec<f64> = item
        .split_whitespace()
        .map(|part| part.parse().map_err(|_| EdrQueryError::CoordsNotWkt))
        .collect::<Result<_, _>>()?;
    if coordinates.len() < 2 {
        return Err(EdrQueryError::CoordsNotWkt);
    }
    Ok(coordinates)
}

fn parse_positions(body: &str) -> Result<Vec<Vec<f64>>, EdrQueryError> {
    split_top_level(body)?
        .into_iter()
        .map(|item| parse_position(strip_optional_parens(item)))
        .collect()
}

fn parse_rings(body: &str) -> Result<Vec<Vec<Vec<f64>>>, EdrQueryError> {
    split_top_level(body)?
        .into_iter()
        .map(|ring| parse_positions(strip_parens(ring)?))
        .collect()
}

fn parse_polygons(body: &str) -> Result<Vec<Vec<Vec<Vec<f64>>>>, EdrQueryError> {
    split_top_level(body)?
        .into_iter()
        .map(|polygon| parse_rings(strip_parens(polygon)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_point() {
        let geometry = Geometry::from_wkt("POINT(0 51.48)").unwrap();
        assert_eq!(
            geometry,
            Geometry::Point {
                coordinates: vec![0.0, 51.48]
            }
        );
        assert_eq!(geometry.geometry_type(), "Point");
        assert_eq!(geometry.coordinates().unwrap(), json!([0.0, 51.48]));
    }

    #[test]
    fn test_parse_point_with_space_and_case() {
        let geometry = Geometry::from_wkt("point (-3.53 50.72)").unwrap();
        assert_eq!(
            geometry,
            Geometry::Point {
                coordinates: vec![-3.53, 50.72]
            }
        );
    }

    #[test]
    fn test_parse_multipoint_parenthesized() {
        let geometry =
            Geometry::from_wkt("MULTIPOINT((38.9 -77),(48.85 2.35),(51.5 -0.1))").unwrap();
        assert_eq!(geometry.geometry_type(), "MultiPoint");
        assert_eq!(
            geometry.coordinates().unwrap(),
            json!([[38.9, -77.0], [48.85, 2.35], [51.5, -0.1]])
        );
    }

    #[test]
    fn test_parse_multipoint_bare() {
        let geometry = Geometry::from_wkt("MULTIPOINT(38.9 -77, 48.85 2.35)").unwrap();
        assert_eq!(
            geometry,
            Geometry::MultiPoint {
                coordinates: vec![vec![38.9, -77.0], vec![48.85, 2.35]]
            }
        );
    }

    #[test]
    fn test_parse_linestring() {
        let geometry =
            Geometry::from_wkt("LINESTRING(-3.53 50.72, -3.35 50.92, -3.11 51.02)").unwrap();
        assert_eq!(geometry.geometry_type(), "LineString");
        assert_eq!(
            geometry.coordinates().unwrap(),
            json!([[-3.53, 50.72], [-3.35, 50.92], [-3.11, 51.02]])
        );
    }

    #[test]
    fn test_parse_multilinestring() {
        let geometry =
            Geometry::from_wkt("MULTILINESTRING((-3.53 50.72, -3.35 50.92), (-3.11 51.02, -2.85 51.42))")
                .unwrap();
        assert_eq!(geometry.geometry_type(), "MultiLineString");
        assert_eq!(
            geometry.coordinates().unwrap(),
            json!([
                [[-3.53, 50.72], [-3.35, 50.92]],
                [[-3.11, 51.02], [-2.85, 51.42]]
            ])
        );
    }

    #[test]
    fn test_parse_polygon() {
        let geometry = Geometry::from_wkt("POLYGON((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
        assert_eq!(geometry.geometry_type(), "Polygon");
        assert_eq!(
            geometry.coordinates().unwrap(),
            json!([[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]])
        );
    }

    #[test]
    fn test_parse_polygon_with_hole() {
        let geometry =
            Geometry::from_wkt("POLYGON((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 2 2, 1 1))").unwrap();
        match geometry {
            Geometry::Polygon { coordinates } => {
                assert_eq!(coordinates.len(), 2);
                assert_eq!(coordinates[1][0], vec![1.0, 1.0]);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_multipolygon() {
        let geometry = Geometry::from_wkt(
            "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))",
        )
        .unwrap();
        assert_eq!(geometry.geometry_type(), "MultiPolygon");
        assert_eq!(
            geometry.coordinates().unwrap(),
            json!([
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
            ])
        );
    }

    #[test]
    fn test_parse_point_extra_dimension() {
        let geometry = Geometry::from_wkt("POINT(0 51.48 100)").unwrap();
        assert_eq!(
            geometry,
            Geometry::Point {
                coordinates: vec![0.0, 51.48, 100.0]
            }
        );
    }

    #[test]
    fn test_parse_invalid_inputs() {
        assert_eq!(Geometry::from_wkt(""), Err(EdrQueryError::CoordsNotWkt));
        assert_eq!(Geometry::from_wkt("POINT"), Err(EdrQueryError::CoordsNotWkt));
        assert_eq!(Geometry::from_wkt("POINT()"), Err(EdrQueryError::CoordsNotWkt));
        assert_eq!(Geometry::from_wkt("POINT(0)"), Err(EdrQueryError::CoordsNotWkt));
        assert_eq!(
            Geometry::from_wkt("POINT(a 51.48)"),
            Err(EdrQueryError::CoordsNotWkt)
        );
        assert_eq!(
            Geometry::from_wkt("CIRCLE(0 51.48)"),
            Err(EdrQueryError::CoordsNotWkt)
        );
        assert_eq!(
            Geometry::from_wkt("POINT(0 51.48"),
            Err(EdrQueryError::CoordsNotWkt)
        );
        assert_eq!(
            Geometry::from_wkt("POLYGON(0 0, 1 1, 1 0, 0 0)"),
            Err(EdrQueryError::CoordsNotWkt)
        );
    }

    #[test]
    fn test_serialized_shape_matches_geojson() {
        let geometry = Geometry::Point {
            coordinates: vec![0.0, 51.48],
        };
        assert_eq!(
            serde_json::to_value(&geometry).unwrap(),
            json!({"type": "Point", "coordinates": [0.0, 51.48]})
        );
    }
}
