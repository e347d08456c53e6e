//! Line segment entity and endpoint hit testing.

use kurbo::{Line, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Maximum perpendicular distance from the carrying line for a hit.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;
/// Maximum distance from an endpoint for that endpoint to capture the hit.
pub const ENDPOINT_CAPTURE_RADIUS: f64 = 10.0;

/// Which endpoint handle of a segment a hit test landed on.
///
/// The start handle drags the whole segment; the end handle pivots it
/// around the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

/// A straight line segment with a selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Whether this segment is currently selected.
    #[serde(default)]
    pub selected: bool,
}

impl Segment {
    /// Create a new segment. Starts deselected.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            selected: false,
        }
    }

    /// Create a degenerate segment with both endpoints at `point`.
    pub fn from_point(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Get the length of the segment.
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Get as a kurbo Line.
    pub fn as_line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// Classify which endpoint handle `point` grabs, if any.
    ///
    /// The point must lie within [`LINE_HIT_TOLERANCE`] of the infinite
    /// line through the endpoints AND within [`ENDPOINT_CAPTURE_RADIUS`]
    /// of an endpoint. Start capture wins when both endpoints are in
    /// range. Points near the middle of a long segment miss both handles
    /// and return `None`.
    pub fn hit_test(&self, point: Point) -> Option<Endpoint> {
        let length = self.length();
        let distance = if length < f64::EPSILON {
            // Degenerate segment, measure straight to the coincident endpoints
            Vec2::new(point.x - self.start.x, point.y - self.start.y).hypot()
        } else {
            // Perpendicular distance to the infinite line through start/end
            ((self.end.y - self.start.y) * point.x - (self.end.x - self.start.x) * point.y
                + self.end.x * self.start.y
                - self.end.y * self.start.x)
                .abs()
                / length
        };

        if distance >= LINE_HIT_TOLERANCE {
            return None;
        }

        let to_start = Vec2::new(point.x - self.start.x, point.y - self.start.y);
        if to_start.hypot() < ENDPOINT_CAPTURE_RADIUS {
            return Some(Endpoint::Start);
        }
        let to_end = Vec2::new(point.x - self.end.x, point.y - self.end.y);
        if to_end.hypot() < ENDPOINT_CAPTURE_RADIUS {
            return Some(Endpoint::End);
        }
        None
    }

    /// Shift both endpoints by `delta`, preserving length and direction.
    pub fn translate(&mut self, delta: Vec2) {
        self.start.x += delta.x;
        self.start.y += delta.y;
        self.end.x += delta.x;
        self.end.y += delta.y;
    }

    /// Reassign the end point, pivoting the segment around its start.
    pub fn set_end(&mut self, point: Point) {
        self.end = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_creation() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((segment.length() - 100.0).abs() < f64::EPSILON);
        assert!(!segment.selected);
    }

    #[test]
    fn test_hit_near_start() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(2.0, 0.0)), Some(Endpoint::Start));
    }

    #[test]
    fn test_hit_near_end() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(98.0, 0.0)), Some(Endpoint::End));
    }

    #[test]
    fn test_miss_midpoint() {
        // On the line but far from both handles
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(50.0, 0.0)), None);
    }

    #[test]
    fn test_miss_perpendicular() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(2.0, 20.0)), None);
    }

    #[test]
    fn test_hit_beyond_endpoint() {
        // The distance check is against the infinite carrying line, so a
        // point just past the end still captures the end handle.
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(105.0, 0.0)), Some(Endpoint::End));
        assert_eq!(segment.hit_test(Point::new(-3.0, 0.0)), Some(Endpoint::Start));
    }

    #[test]
    fn test_start_priority_over_end() {
        // Short segment where both capture radii cover the probe point
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(6.0, 0.0));
        assert_eq!(segment.hit_test(Point::new(3.0, 0.0)), Some(Endpoint::Start));
    }

    #[test]
    fn test_degenerate_hit() {
        let segment = Segment::from_point(Point::new(10.0, 10.0));
        assert!((segment.length()).abs() < f64::EPSILON);
        assert_eq!(segment.hit_test(Point::new(10.0, 10.0)), Some(Endpoint::Start));
        assert_eq!(segment.hit_test(Point::new(12.0, 11.0)), Some(Endpoint::Start));
    }

    #[test]
    fn test_degenerate_miss() {
        let segment = Segment::from_point(Point::new(10.0, 10.0));
        assert_eq!(segment.hit_test(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_translate_moves_both_endpoints() {
        let mut segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        segment.translate(Vec2::new(3.0, 4.0));
        assert!((segment.start.x - 3.0).abs() < f64::EPSILON);
        assert!((segment.start.y - 4.0).abs() < f64::EPSILON);
        assert!((segment.end.x - 13.0).abs() < f64::EPSILON);
        assert!((segment.end.y - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_end_keeps_start() {
        let mut segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        segment.set_end(Point::new(0.0, 10.0));
        assert_eq!(segment.start, Point::new(0.0, 0.0));
        assert_eq!(segment.end, Point::new(0.0, 10.0));
        assert!((segment.length() - 10.0).abs() < f64::EPSILON);
    }
}
