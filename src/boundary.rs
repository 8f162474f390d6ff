// src/boundary.rs
//! Маска суши страны: GeoJSON-граница и тест точки на попадание внутрь
//!
//! Принимаются три формы документа: голая геометрия, Feature и
//! FeatureCollection (берётся только первая фича). Из геометрии
//! используются только внешние кольца — дырки полигонов игнорируются.
//! Тест точки — чётно-нечётный ray casting; поведение ровно на ребре или
//! вершине не гарантируется.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::GenError;

/// Позиция GeoJSON: [lng, lat] плюс возможная высота, которую мы отбрасываем.
type RawRing = Vec<Vec<f64>>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoDocument {
    FeatureCollection { features: Vec<Feature> },
    Feature { geometry: Geometry },
    Polygon { coordinates: Vec<RawRing> },
    MultiPolygon { coordinates: Vec<Vec<RawRing>> },
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<RawRing> },
    MultiPolygon { coordinates: Vec<Vec<RawRing>> },
}

/// Маска суши: набор внешних колец (lng, lat).
///
/// Для Polygon здесь одно кольцо, для MultiPolygon — по одному на член;
/// точка внутри маски, если она внутри хотя бы одного кольца.
#[derive(Debug, Clone)]
pub struct BoundaryMask {
    rings: Vec<Vec<(f64, f64)>>,
}

impl BoundaryMask {
    pub fn from_geojson_file(path: &Path) -> Result<Self, GenError> {
        let contents = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: GeoDocument =
            serde_json::from_str(&contents).map_err(|source| GenError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_document(doc)
    }

    pub fn from_geojson_str(contents: &str) -> Result<Self, GenError> {
        let doc: GeoDocument = serde_json::from_str(contents)
            .map_err(|e| GenError::InvalidBoundary(e.to_string()))?;
        Self::from_document(doc)
    }

    fn from_document(doc: GeoDocument) -> Result<Self, GenError> {
        let geometry = match doc {
            GeoDocument::FeatureCollection { mut features } => {
                if features.is_empty() {
                    return Err(GenError::InvalidBoundary(
                        "FeatureCollection has no features".into(),
                    ));
                }
                // Берём только первую фичу, остальные игнорируем
                features.swap_remove(0).geometry
            }
            GeoDocument::Feature { geometry } => geometry,
            GeoDocument::Polygon { coordinates } => Geometry::Polygon { coordinates },
            GeoDocument::MultiPolygon { coordinates } => Geometry::MultiPolygon { coordinates },
        };

        let outer_rings: Vec<RawRing> = match geometry {
            Geometry::Polygon { coordinates } => {
                vec![take_outer_ring(coordinates)?]
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .into_iter()
                .map(take_outer_ring)
                .collect::<Result<_, _>>()?,
        };

        let rings = outer_rings
            .into_iter()
            .map(convert_ring)
            .collect::<Result<_, _>>()?;

        Ok(Self { rings })
    }

    /// Лежит ли точка внутри маски (внутри любого из внешних колец).
    #[must_use]
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        self.rings.iter().any(|ring| ray_cast(lng, lat, ring))
    }
}

fn take_outer_ring(mut rings: Vec<RawRing>) -> Result<RawRing, GenError> {
    if rings.is_empty() {
        return Err(GenError::InvalidBoundary("polygon has no rings".into()));
    }
    // Внешнее кольцо — первое; дырки отбрасываются
    Ok(rings.swap_remove(0))
}

fn convert_ring(raw: RawRing) -> Result<Vec<(f64, f64)>, GenError> {
    if raw.len() < 3 {
        return Err(GenError::InvalidBoundary(format!(
            "ring has only {} vertices",
            raw.len()
        )));
    }
    raw.into_iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(GenError::InvalidBoundary(
                    "position has fewer than 2 coordinates".into(),
                ));
            }
            Ok((position[0], position[1]))
        })
        .collect()
}

/// Чётно-нечётный ray casting: горизонтальный луч из точки, чётность
/// пересечений с рёбрами кольца.
fn ray_cast(x: f64, y: f64, ring: &[(f64, f64)]) -> bool {
    let n = ring.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> BoundaryMask {
        BoundaryMask::from_geojson_str(
            r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn point_inside_unit_square() {
        assert!(unit_square().contains(0.5, 0.5));
    }

    #[test]
    fn point_outside_unit_square() {
        let mask = unit_square();
        assert!(!mask.contains(1.5, 0.5));
        assert!(!mask.contains(0.5, -0.5));
        assert!(!mask.contains(10.0, 10.0));
    }

    #[test]
    fn feature_wrapper_is_unwrapped() {
        let mask = BoundaryMask::from_geojson_str(
            r#"{"type":"Feature","properties":{"name":"X"},
                "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}}"#,
        )
        .unwrap();
        assert!(mask.contains(0.5, 0.5));
    }

    #[test]
    fn feature_collection_uses_first_feature_only() {
        let mask = BoundaryMask::from_geojson_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Polygon",
                    "coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}},
                {"type":"Feature","geometry":{"type":"Polygon",
                    "coordinates":[[[10,10],[11,10],[11,11],[10,11],[10,10]]]}}
            ]}"#,
        )
        .unwrap();
        assert!(mask.contains(0.5, 0.5));
        // Вторая фича не участвует в маске
        assert!(!mask.contains(10.5, 10.5));
    }

    #[test]
    fn multi_polygon_is_union_of_outer_rings() {
        let mask = BoundaryMask::from_geojson_str(
            r#"{"type":"MultiPolygon","coordinates":[
                [[[0,0],[1,0],[1,1],[0,1],[0,0]]],
                [[[5,5],[6,5],[6,6],[5,6],[5,5]]]
            ]}"#,
        )
        .unwrap();
        assert!(mask.contains(0.5, 0.5));
        assert!(mask.contains(5.5, 5.5));
        assert!(!mask.contains(3.0, 3.0));
    }

    #[test]
    fn polygon_holes_are_ignored() {
        // Второе кольцо (дырка в центре) не должно влиять на тест
        let mask = BoundaryMask::from_geojson_str(
            r#"{"type":"Polygon","coordinates":[
                [[0,0],[4,0],[4,4],[0,4],[0,0]],
                [[1,1],[3,1],[3,3],[1,3],[1,1]]
            ]}"#,
        )
        .unwrap();
        assert!(mask.contains(2.0, 2.0));
    }

    #[test]
    fn concave_polygon_classified_correctly() {
        // Г-образный полигон: выемка справа сверху
        let mask = BoundaryMask::from_geojson_str(
            r#"{"type":"Polygon","coordinates":[
                [[0,0],[4,0],[4,2],[2,2],[2,4],[0,4],[0,0]]
            ]}"#,
        )
        .unwrap();
        assert!(mask.contains(1.0, 3.0));
        assert!(mask.contains(3.0, 1.0));
        assert!(!mask.contains(3.0, 3.0));
    }

    #[test]
    fn empty_feature_collection_is_rejected() {
        let err = BoundaryMask::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#);
        assert!(matches!(err, Err(GenError::InvalidBoundary(_))));
    }

    #[test]
    fn point_geometry_is_rejected() {
        let err = BoundaryMask::from_geojson_str(r#"{"type":"Point","coordinates":[1,2]}"#);
        assert!(matches!(err, Err(GenError::InvalidBoundary(_))));
    }

    #[test]
    fn degenerate_ring_is_rejected() {
        let err =
            BoundaryMask::from_geojson_str(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1]]]}"#);
        assert!(matches!(err, Err(GenError::InvalidBoundary(_))));
    }
}
