use serde::Serialize;
use std::f64::consts::PI;

use super::scoring::ScoreVector;

/// Reference levels for the background grid polygons.
pub const GRID_LEVELS: [u8; 5] = [20, 40, 60, 80, 100];

/// Fewer points cannot form a polygon.
const MIN_POLYGON_POINTS: usize = 3;

/// One projected point in screen coordinates (y grows downward, so index 0
/// sits at the top and successive vertices proceed clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarVertex {
    pub x: f64,
    pub y: f64,
}

/// Score polygon plus background rings for a caller-supplied radius.
#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub polygon: Vec<RadarVertex>,
    pub rings: Vec<Vec<RadarVertex>>,
}

/// Project values on a 0..100 scale onto polygon vertices of the given
/// radius. Vertex `i` sits at angle `i * (2π / N) - π/2` and radial
/// distance `(value / 100) * radius`. Returns no vertices for N < 3.
pub fn polygon_vertices(values: &[u8], radius: f64) -> Vec<RadarVertex> {
    if values.len() < MIN_POLYGON_POINTS {
        return Vec::new();
    }

    let step = 2.0 * PI / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let angle = index as f64 * step - PI / 2.0;
            let distance = f64::from(*value) / 100.0 * radius;
            RadarVertex {
                x: distance * angle.cos(),
                y: distance * angle.sin(),
            }
        })
        .collect()
}

/// Polygon for a score vector in catalog order.
pub fn score_polygon(scores: &ScoreVector, radius: f64) -> Vec<RadarVertex> {
    let values: Vec<u8> = scores.iter().map(|(_, score)| score).collect();
    polygon_vertices(&values, radius)
}

/// Background grid: one full polygon per reference level, sharing the
/// angular layout of a chart with `point_count` vertices.
pub fn grid_rings(point_count: usize, radius: f64) -> Vec<Vec<RadarVertex>> {
    if point_count < MIN_POLYGON_POINTS {
        return Vec::new();
    }

    GRID_LEVELS
        .iter()
        .map(|level| polygon_vertices(&vec![*level; point_count], radius))
        .collect()
}

/// Full chart for a score vector.
pub fn chart(scores: &ScoreVector, radius: f64) -> RadarChart {
    RadarChart {
        polygon: score_polygon(scores, radius),
        rings: grid_rings(scores.len(), radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::Metric;

    const EPSILON: f64 = 1e-9;

    fn radial_distance(vertex: RadarVertex) -> f64 {
        (vertex.x * vertex.x + vertex.y * vertex.y).sqrt()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn first_vertex_points_straight_up() {
        let vertices = polygon_vertices(&[100, 100, 100], 50.0);
        assert!(approx(vertices[0].x, 0.0));
        assert!(approx(vertices[0].y, -50.0));
    }

    #[test]
    fn square_layout_hits_cardinal_directions() {
        let vertices = polygon_vertices(&[100, 100, 100, 100], 10.0);
        assert_eq!(vertices.len(), 4);
        // top, right, bottom, left in screen coordinates
        assert!(approx(vertices[0].x, 0.0) && approx(vertices[0].y, -10.0));
        assert!(approx(vertices[1].x, 10.0) && approx(vertices[1].y, 0.0));
        assert!(approx(vertices[2].x, 0.0) && approx(vertices[2].y, 10.0));
        assert!(approx(vertices[3].x, -10.0) && approx(vertices[3].y, 0.0));
    }

    #[test]
    fn radial_distance_scales_with_value() {
        let vertices = polygon_vertices(&[50, 100, 25], 80.0);
        assert!(approx(radial_distance(vertices[0]), 40.0));
        assert!(approx(radial_distance(vertices[1]), 80.0));
        assert!(approx(radial_distance(vertices[2]), 20.0));
    }

    #[test]
    fn fewer_than_three_points_yield_no_polygon() {
        assert!(polygon_vertices(&[], 50.0).is_empty());
        assert!(polygon_vertices(&[80], 50.0).is_empty());
        assert!(polygon_vertices(&[80, 90], 50.0).is_empty());
        assert!(grid_rings(2, 50.0).is_empty());
    }

    #[test]
    fn rotating_values_produces_congruent_polygon() {
        let values = [70u8, 45, 90, 30, 60];
        let rotated: Vec<u8> = values[1..]
            .iter()
            .chain(values[..1].iter())
            .copied()
            .collect();

        let original = polygon_vertices(&values, 100.0);
        let shifted = polygon_vertices(&rotated, 100.0);

        for index in 0..values.len() {
            let source = original[(index + 1) % values.len()];
            assert!(approx(
                radial_distance(shifted[index]),
                radial_distance(source)
            ));
        }
    }

    #[test]
    fn grid_rings_cover_every_level() {
        let rings = grid_rings(7, 100.0);
        assert_eq!(rings.len(), GRID_LEVELS.len());
        for (ring, level) in rings.iter().zip(GRID_LEVELS) {
            assert_eq!(ring.len(), 7);
            for vertex in ring {
                assert!(approx(radial_distance(*vertex), f64::from(level)));
            }
        }
    }

    #[test]
    fn chart_uses_catalog_order() {
        let scores = ScoreVector::from_entries(
            Metric::ordered().into_iter().map(|metric| (metric, 100u8)),
        );
        let chart = chart(&scores, 60.0);
        assert_eq!(chart.polygon.len(), 7);
        assert_eq!(chart.rings.len(), 5);
        assert!(approx(chart.polygon[0].x, 0.0));
        assert!(approx(chart.polygon[0].y, -60.0));
    }
}
