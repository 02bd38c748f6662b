// File: crates/chart-core/src/segment.rs
// Summary: Splits a polyline into one-sided runs at zero-level crossings.

use tracing::trace;

use crate::types::{Point, Side};

/// A contiguous run of a series' points lying on one side of the zero level.
/// The first and last points may be interpolated crossings (`y == zero_level`)
/// shared with the neighbouring segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub side: Side,
    pub points: Vec<Point>,
}

impl Segment {
    fn open(side: Side, first: Point) -> Self {
        Self { side, points: vec![first] }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// A segment needs two points to produce a visible line.
    pub fn is_drawable(&self) -> bool { self.points.len() >= 2 }

    pub fn last(&self) -> Option<Point> { self.points.last().copied() }
}

/// Point where the straight line p1→p2 meets `y = zero_level`.
///
/// Callers only pass pairs whose sides differ, so the denominator is non-zero.
/// The result is kept within `[p1.x, p2.x]` even when rounding would push it out.
#[inline]
pub fn crossing(p1: Point, p2: Point, zero_level: f64) -> Point {
    let d1 = zero_level - p1.y;
    let d2 = zero_level - p2.y;
    let x = p1.x + (p2.x - p1.x) * (d1 / (d1 - d2));
    let (lo, hi) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
    Point::new(x.max(lo).min(hi), zero_level)
}

/// Split `points` into segments that each stay on one side of `zero_level`.
///
/// Fewer than two points yields no segments.
pub fn segment(points: &[Point], zero_level: f64) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (i, &p) in points.iter().enumerate() {
        current.push(p);
        let side = Side::of(p.y, zero_level);
        match points.get(i + 1) {
            Some(&next) if Side::of(next.y, zero_level) != side => {
                let cross = crossing(p, next, zero_level);
                current.push(cross);
                out.push(Segment { side, points: std::mem::replace(&mut current, vec![cross]) });
            }
            Some(_) => {}
            None => out.push(Segment { side, points: std::mem::take(&mut current) }),
        }
    }
    out
}

/// Extend `segments` with one more point, as if `segment` had been run over
/// the whole sequence. Returns true when a new segment was opened.
pub fn append_point(segments: &mut Vec<Segment>, point: Point, zero_level: f64) -> bool {
    let side = Side::of(point.y, zero_level);
    let Some(last) = segments.last_mut() else {
        segments.push(Segment::open(side, point));
        return true;
    };
    let Some(prev) = last.last() else {
        last.side = side;
        last.points.push(point);
        return false;
    };

    if Side::of(prev.y, zero_level) == side {
        last.points.push(point);
        return false;
    }

    let cross = crossing(prev, point, zero_level);
    last.points.push(cross);
    trace!(x = cross.x, ?side, "zero crossing opens segment");
    let mut next = Segment::open(side, cross);
    next.points.push(point);
    segments.push(next);
    true
}
