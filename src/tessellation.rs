//! Bulge polyline tessellation
//!
//! Turns a sequence of vertices whose segments may be circular arcs
//! (encoded by a bulge value) into a list of points joined by straight
//! lines. Every vertex is paired with its successor, the last one with the
//! first, so the closing segment is always produced.
//!
//! For an arc segment from `p1` to `p2` with chord length `c` and bulge `b`:
//!
//! ```text
//! sagitta  s = (c / 2) * |b|
//! radius   r = ((c / 2)^2 + s^2) / (2 s)
//! angle    θ = 4 atan(|b|)
//! center   p1 + r * (cos φ, sin φ),  φ = angle(p2 - p1) ± (π - θ) / 2
//! ```
//!
//! The arc is subdivided by rotating `p1 - center` in `bulge_precision + 1`
//! equal steps of `4 atan(b) / (bulge_precision + 1)`.

use crate::types::Vector2;
use rayon::prelude::*;
use std::f64::consts::PI;

/// A vertex that starts a straight or arc segment
pub trait BulgeVertex {
    /// Location projected onto the OCS plane
    fn position(&self) -> Vector2;

    /// Bulge of the segment starting at this vertex
    fn bulge(&self) -> f64;
}

/// Tessellation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationOptions {
    /// Number of points inserted inside each arc; 0 keeps arcs as chords
    pub bulge_precision: u32,
    /// Points closer than this are treated as the same point
    pub weld_threshold: f64,
    /// Arcs with a shorter chord are drawn as straight segments
    pub bulge_threshold: f64,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            bulge_precision: 8,
            weld_threshold: 1e-6,
            bulge_threshold: 1e-6,
        }
    }
}

impl TessellationOptions {
    pub fn with_bulge_precision(mut self, bulge_precision: u32) -> Self {
        self.bulge_precision = bulge_precision;
        self
    }

    pub fn with_weld_threshold(mut self, weld_threshold: f64) -> Self {
        self.weld_threshold = weld_threshold;
        self
    }

    pub fn with_bulge_threshold(mut self, bulge_threshold: f64) -> Self {
        self.bulge_threshold = bulge_threshold;
        self
    }
}

/// Approximate a bulge vertex sequence with straight segments.
///
/// Bulges outside (-1, 1] are not rejected; they produce arcs of more than
/// half a turn, exactly as the formulas above dictate.
pub fn polygonal_vertices<V: BulgeVertex>(
    vertices: &[V],
    options: &TessellationOptions,
) -> Vec<Vector2> {
    let Some(last) = vertices.last() else {
        return Vec::new();
    };
    // TODO: intermediate arc points are welded against the last vertex of the
    // whole sequence, not the previously emitted point; confirm with the
    // renderer before changing this.
    let last_vertex = last.position();
    let weld = options.weld_threshold;
    let precision = options.bulge_precision;

    let mut points = Vec::with_capacity(vertices.len());

    for (index, vertex) in vertices.iter().enumerate() {
        let start = vertex.position();
        let end = vertices[(index + 1) % vertices.len()].position();

        if start.coincides(&end, weld) {
            continue;
        }

        let bulge = vertex.bulge();
        if bulge == 0.0 || precision == 0 {
            points.push(start);
            continue;
        }

        if !(-1.0 < bulge && bulge <= 1.0) {
            tracing::trace!(index, bulge, "bulge outside (-1, 1]");
        }

        let chord = start.distance(&end);
        if chord < options.bulge_threshold {
            points.push(start);
            continue;
        }

        let Some(center) = arc_center(start, end, bulge) else {
            tracing::trace!(index, bulge, chord, "sagitta too small, keeping chord");
            points.push(start);
            continue;
        };

        let radial = start - center;
        let step = 4.0 * bulge.atan() / (precision as f64 + 1.0);

        points.push(start);
        for i in 1..=precision {
            let point = center + radial.rotate(i as f64 * step);
            if !point.coincides(&last_vertex, weld) && !point.coincides(&end, weld) {
                points.push(point);
            }
        }
    }

    tracing::debug!(
        vertices = vertices.len(),
        points = points.len(),
        precision,
        "tessellated polyline"
    );
    points
}

/// Tessellate independent vertex sequences in parallel.
///
/// The result keeps the order of `sequences`.
pub fn tessellate_many<V>(sequences: &[&[V]], options: &TessellationOptions) -> Vec<Vec<Vector2>>
where
    V: BulgeVertex + Sync,
{
    sequences
        .par_iter()
        .map(|vertices| polygonal_vertices(*vertices, options))
        .collect()
}

/// Center of the arc from `start` to `end`, `None` when the sagitta is too
/// small to give a finite radius.
fn arc_center(start: Vector2, end: Vector2, bulge: f64) -> Option<Vector2> {
    let chord = end - start;
    let half_chord = chord.length() / 2.0;
    let sagitta = half_chord * bulge.abs();
    if sagitta <= half_chord * f64::EPSILON {
        return None;
    }

    let radius = (half_chord * half_chord + sagitta * sagitta) / (2.0 * sagitta);
    if !radius.is_finite() {
        return None;
    }

    let theta = 4.0 * bulge.abs().atan();
    let gamma = (PI - theta) / 2.0;
    let phi = if bulge > 0.0 {
        chord.angle() + gamma
    } else {
        chord.angle() - gamma
    };

    Some(start + Vector2::new(phi.cos(), phi.sin()) * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct V(f64, f64, f64);

    impl BulgeVertex for V {
        fn position(&self) -> Vector2 {
            Vector2::new(self.0, self.1)
        }

        fn bulge(&self) -> f64 {
            self.2
        }
    }

    fn close(a: Vector2, b: Vector2) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn test_empty_input() {
        let points = polygonal_vertices::<V>(&[], &TessellationOptions::default());
        assert!(points.is_empty());
    }

    #[test]
    fn test_single_vertex_welds_with_itself() {
        let points = polygonal_vertices(&[V(1.0, 1.0, 0.5)], &TessellationOptions::default());
        assert!(points.is_empty());
    }

    #[test]
    fn test_zero_precision_keeps_chords() {
        let vertices = [V(0.0, 0.0, 1.0), V(2.0, 0.0, 1.0)];
        let options = TessellationOptions::default().with_bulge_precision(0);
        let points = polygonal_vertices(&vertices, &options);
        assert_eq!(points, vec![Vector2::ZERO, Vector2::new(2.0, 0.0)]);
    }

    #[test]
    fn test_short_chord_below_bulge_threshold() {
        let vertices = [V(0.0, 0.0, 1.0), V(1.0, 0.0, 0.0)];
        let options = TessellationOptions::default().with_bulge_threshold(1.5);
        let points = polygonal_vertices(&vertices, &options);
        assert_eq!(points, vec![Vector2::ZERO, Vector2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_chord_equal_to_bulge_threshold_is_curved() {
        let vertices = [V(0.0, 0.0, 1.0), V(1.0, 0.0, 0.0)];
        let options = TessellationOptions::default()
            .with_bulge_precision(1)
            .with_bulge_threshold(1.0);
        let points = polygonal_vertices(&vertices, &options);
        assert_eq!(points.len(), 3);
        assert!(close(points[1], Vector2::new(0.5, -0.5)));
    }

    #[test]
    fn test_negative_bulge_bows_the_other_way() {
        let vertices = [V(0.0, 0.0, -1.0), V(2.0, 0.0, 0.0)];
        let options = TessellationOptions::default().with_bulge_precision(1);
        let points = polygonal_vertices(&vertices, &options);
        assert_eq!(points.len(), 3);
        assert!(close(points[1], Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn test_downward_chord_center() {
        // chord pointing along -Y: a counter-clockwise arc passes through -X
        let vertices = [V(0.0, 2.0, 1.0), V(0.0, 0.0, 0.0)];
        let options = TessellationOptions::default().with_bulge_precision(1);
        let points = polygonal_vertices(&vertices, &options);
        assert!(close(points[1], Vector2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_tiny_bulge_falls_back_to_chord() {
        let vertices = [V(0.0, 0.0, 1e-300), V(1.0, 0.0, 0.0)];
        let points = polygonal_vertices(&vertices, &TessellationOptions::default());
        assert_eq!(points, vec![Vector2::ZERO, Vector2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_quarter_arc_points_lie_on_circle() {
        let bulge = (PI / 8.0).tan();
        let vertices = [V(1.0, 0.0, bulge), V(0.0, 1.0, 0.0), V(0.0, 0.0, 0.0)];
        let options = TessellationOptions::default().with_bulge_precision(5);
        let points = polygonal_vertices(&vertices, &options);

        assert_eq!(points.len(), 1 + 5 + 2);
        for p in &points[..6] {
            assert!((p.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tessellate_many_keeps_order() {
        let a = [V(0.0, 0.0, 0.0), V(1.0, 0.0, 0.0)];
        let b = [V(5.0, 5.0, 0.0), V(6.0, 5.0, 0.0), V(6.0, 6.0, 0.0)];
        let sequences: [&[V]; 2] = [&a, &b];
        let out = tessellate_many(&sequences, &TessellationOptions::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].len(), 2);
        assert_eq!(out[1][0], Vector2::new(5.0, 5.0));
    }
}
