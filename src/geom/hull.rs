use itertools::Itertools;
use log::{debug, trace};
use nalgebra as na;
use std::cmp::Ordering;
use std::ops::Deref;

/// Boundary of the convex hull of a point set, as produced by [convex_hull].
///
/// Vertices are copies of input points, ordered counter-clockwise starting at the input
/// point with the lowest y-coordinate. Points lying inside an edge are not vertices,
/// except the start itself. Collinear or duplicated input can produce a degenerate
/// boundary; its length never exceeds the number of input points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexHull<F: na::RealField + Copy>(Vec<na::Point2<F>>);

impl<F: na::RealField + Copy> ConvexHull<F> {
    /// Consumes the hull and returns its vertices.
    pub fn into_vec(self) -> Vec<na::Point2<F>> {
        self.0
    }

    /// Returns true if `point` lies inside or on the boundary.
    ///
    /// `tolerance` bounds the (doubled) signed area a point may have on the outer side of
    /// an edge and still count as on it.
    pub fn contains(&self, point: &na::Point2<F>, tolerance: F) -> bool {
        match self.0.as_slice() {
            [] => false,
            [p] => (point - p).norm() <= tolerance,
            [a, b] => {
                let ab = b - a;
                let ap = point - a;
                let t = ap.dot(&ab);
                ab.perp(&ap).abs() <= tolerance
                    && t >= -tolerance
                    && t <= ab.norm_squared() + tolerance
            }
            vertices => vertices
                .iter()
                .circular_tuple_windows::<(_, _)>()
                .all(|(a, b)| (b - a).perp(&(point - a)) >= -tolerance),
        }
    }

    /// Enclosed area (shoelace formula).
    pub fn area(&self) -> F {
        if self.0.len() < 3 {
            return F::zero();
        }
        let twice = self
            .0
            .iter()
            .circular_tuple_windows::<(_, _)>()
            .fold(F::zero(), |acc, (a, b)| acc + a.x * b.y - b.x * a.y);
        (twice / na::convert::<f64, F>(2.0)).abs()
    }
}

impl<F: na::RealField + Copy> Deref for ConvexHull<F> {
    type Target = [na::Point2<F>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<F: na::RealField + Copy> AsRef<[na::Point2<F>]> for ConvexHull<F> {
    fn as_ref(&self) -> &[na::Point2<F>] {
        &self.0
    }
}

impl<F: na::RealField + Copy> From<ConvexHull<F>> for Vec<na::Point2<F>> {
    fn from(hull: ConvexHull<F>) -> Self {
        hull.0
    }
}

/// Doubled signed area of the triangle `(p, q, s)`.
fn signed_area<F: na::RealField + Copy>(
    p: &na::Point2<F>,
    q: &na::Point2<F>,
    s: &na::Point2<F>,
) -> F {
    p.x * q.y - p.y * q.x + q.x * s.y - q.y * s.x + s.x * p.y - s.y * p.x
}

/// Index of the point with the lowest y-coordinate, first occurrence on ties.
fn lowest_index<F: na::RealField + Copy>(points: &[na::Point2<F>]) -> Option<usize> {
    points
        .iter()
        .position_min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// True if `candidate` should replace `selected` as the next vertex seen from `origin`.
///
/// A candidate strictly right of `origin -> selected` always wins. On a tie in direction
/// the farther point wins. Two points on opposite sides of `origin` are told apart by
/// `reference`, the direction of the previous edge: the one turning counter-clockwise
/// from it by less than a half turn is kept.
fn replaces<F: na::RealField + Copy>(
    origin: &na::Point2<F>,
    reference: &na::Vector2<F>,
    selected: &na::Point2<F>,
    candidate: &na::Point2<F>,
) -> bool {
    let area = signed_area(origin, selected, candidate);
    if area != F::zero() {
        return area < F::zero();
    }

    let (ds, dc) = (selected - origin, candidate - origin);
    if ds.norm_squared() == F::zero() {
        return dc.norm_squared() > F::zero();
    }
    if dc.norm_squared() == F::zero() {
        return false;
    }
    if ds.dot(&dc) > F::zero() {
        return dc.norm_squared() > ds.norm_squared();
    }

    let turn = reference.perp(&dc);
    turn > F::zero() || (turn == F::zero() && reference.dot(&dc) > F::zero())
}

/// Scans every other point and keeps the candidate that no point lies strictly right
/// of, as seen from `points[current]`.
fn next_index<F: na::RealField + Copy>(
    points: &[na::Point2<F>],
    current: usize,
    reference: &na::Vector2<F>,
) -> Option<usize> {
    let origin = &points[current];
    let mut selected: Option<usize> = None;

    for candidate in (0..points.len()).filter(|&t| t != current) {
        selected = match selected {
            Some(s) if !replaces(origin, reference, &points[s], &points[candidate]) => Some(s),
            _ => Some(candidate),
        };
    }

    selected
}

/// Computes the convex hull of `points` by gift wrapping (Jarvis march).
///
/// Runs in O(n·h) for `h` hull vertices. Points collinear with an edge are skipped in
/// favour of the farthest one. The march stops when it selects the start vertex or a
/// vertex it already visited, which happens when the start sits inside an edge, so the
/// output never exceeds the number of input points. An empty slice yields an empty
/// hull.
pub fn convex_hull<F: na::RealField + Copy>(points: &[na::Point2<F>]) -> ConvexHull<F> {
    let Some(start) = lowest_index(points) else {
        return ConvexHull(Vec::new());
    };

    let mut visited = vec![false; points.len()];
    visited[start] = true;
    let mut vertices = vec![points[start]];
    let mut current = start;
    let mut reference = na::Vector2::x();

    while let Some(next) = next_index(points, current, &reference) {
        if visited[next] {
            if next != start {
                debug!("Hull closed on vertex {} past the start {}", next, start);
            }
            break;
        }
        trace!("Hull vertex {} -> {}", current, next);
        visited[next] = true;
        vertices.push(points[next]);
        reference = points[next] - points[current];
        current = next;
    }

    ConvexHull(vertices)
}
