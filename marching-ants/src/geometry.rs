//! Stripe geometry.
//!
//! A stripe is a parallelogram leaning right by `stripe_pad` over the bar's
//! height:
//!
//! ```text
//!   x1 __________ x3        y = 0
//!      \          \
//!       \          \
//!     x2 \__________\ x4    y = height
//! ```
//!
//! Each frame it is clipped against the filled part of the bar,
//! `[0, max_x] x [0, height]`. Where a slanted edge crosses a clip line the
//! cut vertex gets the interpolated y, which gives the angled cut at the
//! bar's leading edge.

use glam::Vec2;

use crate::draw::Path;
use crate::style::BarStyle;

const EPSILON: f32 = 1e-4;

/// Nominal (unclipped) corners of one stripe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripeQuad {
    pub x1: f32,
    pub x2: f32,
    pub x3: f32,
    pub x4: f32,
    pub height: f32,
}

impl StripeQuad {
    /// Stripe whose top-left corner sits at `offset`.
    pub fn new(offset: i32, style: &BarStyle) -> Self {
        let x1 = offset as f32;
        Self {
            x1,
            x2: x1 + style.stripe_pad as f32,
            x3: x1 + style.stripe_width as f32,
            x4: x1 + style.stripe_pad as f32 + style.stripe_width as f32,
            height: style.height,
        }
    }

    /// Corners in winding order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x1, 0.0),
            Vec2::new(self.x3, 0.0),
            Vec2::new(self.x4, self.height),
            Vec2::new(self.x2, self.height),
        ]
    }
}

/// Visible part of a stripe. Empty when nothing is visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClippedPolygon {
    points: Vec<Vec2>,
}

impl ClippedPolygon {
    fn from_vertices(mut vertices: Vec<Vec2>) -> Self {
        vertices.dedup_by(|a, b| a.abs_diff_eq(*b, EPSILON));
        while vertices.len() > 1 && vertices[0].abs_diff_eq(vertices[vertices.len() - 1], EPSILON) {
            vertices.pop();
        }
        if vertices.len() < 3 || signed_area(&vertices).abs() < EPSILON {
            return Self::default();
        }

        // Start from the topmost, then leftmost, vertex.
        let start = vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        vertices.rotate_left(start);

        Self { points: vertices }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed path through the vertices; empty polygon gives an empty path.
    pub fn to_path(&self) -> Path {
        let mut path = Path::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for &p in rest {
            path.line_to(p);
        }
        path.close();
        path
    }
}

/// Clip a stripe to the filled region `[0, max_x]`.
pub fn clip_stripe(quad: &StripeQuad, max_x: f32) -> ClippedPolygon {
    // x1 is the leftmost corner
    if max_x <= 0.0 || quad.x1 >= max_x {
        return ClippedPolygon::default();
    }

    let right = clip_against(&quad.corners(), ClipLine::Max(max_x));
    let both = clip_against(&right, ClipLine::Min(0.0));
    ClippedPolygon::from_vertices(both)
}

#[derive(Clone, Copy, Debug)]
enum ClipLine {
    /// Keep points with `x <= value`.
    Max(f32),
    /// Keep points with `x >= value`.
    Min(f32),
}

impl ClipLine {
    fn x(self) -> f32 {
        match self {
            Self::Max(x) | Self::Min(x) => x,
        }
    }

    fn keeps(self, p: Vec2) -> bool {
        match self {
            Self::Max(x) => p.x <= x,
            Self::Min(x) => p.x >= x,
        }
    }
}

/// One Sutherland-Hodgman pass against a vertical line. Output keeps the
/// input winding, with cut vertices inserted where edges cross the line.
fn clip_against(points: &[Vec2], line: ClipLine) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(points.len() + 2);
    for (i, &cur) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        let cur_kept = line.keeps(cur);
        if cur_kept {
            out.push(cur);
        }
        if cur_kept != line.keeps(next) {
            out.push(crossing(cur, next, line.x()));
        }
    }
    out
}

/// Point where segment `a..b` crosses `x`. Caller guarantees `a.x != b.x`.
fn crossing(a: Vec2, b: Vec2, x: f32) -> Vec2 {
    let t = (x - a.x) / (b.x - a.x);
    let y = (a.y + (b.y - a.y) * t).clamp(a.y.min(b.y), a.y.max(b.y));
    Vec2::new(x, y)
}

fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(offset: i32) -> StripeQuad {
        StripeQuad::new(offset, &BarStyle::default())
    }

    fn assert_points(actual: &[Vec2], expected: &[(f32, f32)]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert!(a.abs_diff_eq(Vec2::new(x, y), 1e-4), "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn quad_corners_follow_width_and_pad() {
        let q = quad(0);
        assert_eq!((q.x1, q.x2, q.x3, q.x4), (0.0, 15.0, 20.0, 35.0));
    }

    #[test]
    fn fully_visible_stripe_is_unclipped() {
        let poly = clip_stripe(&quad(0), 100.0);
        assert_points(poly.points(), &[(0.0, 0.0), (20.0, 0.0), (35.0, 20.0), (15.0, 20.0)]);
    }

    #[test]
    fn right_cut_on_leading_edge() {
        // Left edge runs (0,0)..(15,20); it crosses x = 10 at y = 20 * 10 / 15.
        let poly = clip_stripe(&quad(0), 10.0);
        assert_points(poly.points(), &[(0.0, 0.0), (10.0, 0.0), (10.0, 40.0 / 3.0)]);
    }

    #[test]
    fn right_cut_between_top_and_bottom_right() {
        // Right edge runs (20,0)..(35,20); x = 26 is 6/15 along it.
        let poly = clip_stripe(&quad(0), 26.0);
        assert_points(
            poly.points(),
            &[(0.0, 0.0), (20.0, 0.0), (26.0, 8.0), (26.0, 20.0), (15.0, 20.0)],
        );
    }

    #[test]
    fn left_cut_at_origin() {
        // Shifted left by 6: left edge (-6,0)..(9,20) crosses x = 0 at y = 8.
        let poly = clip_stripe(&quad(-6), 100.0);
        assert_points(
            poly.points(),
            &[(0.0, 0.0), (14.0, 0.0), (29.0, 20.0), (9.0, 20.0), (0.0, 8.0)],
        );
    }

    #[test]
    fn cut_at_both_edges() {
        // Right edge (14,0)..(29,20) crosses x = 20 at y = 8; left edge crosses x = 0 at y = 8.
        let poly = clip_stripe(&quad(-6), 20.0);
        assert_points(
            poly.points(),
            &[(0.0, 0.0), (14.0, 0.0), (20.0, 8.0), (20.0, 20.0), (9.0, 20.0), (0.0, 8.0)],
        );
    }

    #[test]
    fn top_edge_clipped_away_starts_at_topmost_vertex() {
        // Offset -30: right edge runs (-10,0)..(5,20) and crosses x = 0 at y = 20 * 10 / 15.
        let poly = clip_stripe(&quad(-30), 100.0);
        assert_points(poly.points(), &[(0.0, 40.0 / 3.0), (5.0, 20.0), (0.0, 20.0)]);
    }

    #[test]
    fn zero_progress_is_empty() {
        for offset in [-40, -10, 0, 10, 40] {
            assert!(clip_stripe(&quad(offset), 0.0).is_empty());
        }
    }

    #[test]
    fn stripe_beyond_fill_is_empty() {
        assert!(clip_stripe(&quad(50), 50.0).is_empty());
        assert!(clip_stripe(&quad(51), 50.0).is_empty());
        assert!(clip_stripe(&quad(120), 50.0).to_path().is_empty());
    }

    #[test]
    fn stripe_left_of_origin_is_empty() {
        assert!(clip_stripe(&quad(-35), 100.0).is_empty());
        assert!(clip_stripe(&quad(-60), 100.0).is_empty());
    }

    #[test]
    fn vertices_stay_inside_clip_region() {
        for max_x in 0..=120 {
            for offset in -45..=125 {
                let poly = clip_stripe(&quad(offset), max_x as f32);
                for p in poly.points() {
                    assert!(p.x >= 0.0 && p.x <= max_x as f32, "x {p} for {offset}/{max_x}");
                    assert!(p.y >= 0.0 && p.y <= 20.0, "y {p} for {offset}/{max_x}");
                }
            }
        }
    }

    #[test]
    fn clipping_is_pure() {
        for (offset, max_x) in [(0, 10.0), (-6, 30.0), (37, 55.5)] {
            assert_eq!(clip_stripe(&quad(offset), max_x), clip_stripe(&quad(offset), max_x));
        }
    }

    #[test]
    fn path_is_closed() {
        use crate::draw::PathOp;

        let path = clip_stripe(&quad(0), 100.0).to_path();
        let ops = path.ops();
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0], PathOp::MoveTo(Vec2::ZERO));
        assert_eq!(ops[4], PathOp::Close);
    }
}
