use std::ops::{Add, Sub};

/// Default half-size of the square window used to grab a corner or endpoint.
pub const HANDLE_TOLERANCE: f32 = 5.0;
/// Default slack for the sum-of-distances test on a straight line.
pub const LINE_TOLERANCE: f32 = 1.0;
/// Default slack for each segment of a freehand stroke.
pub const FREEHAND_TOLERANCE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self.scale(1.0 / len)
        } else {
            Self::default()
        }
    }

    /// Rotated 90 degrees counter-clockwise.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f32; 2]> for Point {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Point> for [f32; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

pub fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Square-window proximity test: both axis deltas must be under `tolerance`.
pub fn point_near(cursor: Point, target: Point, tolerance: f32) -> bool {
    (cursor.x - target.x).abs() < tolerance && (cursor.y - target.y).abs() < tolerance
}

/// True when `cursor` lies on the segment `p1..p2`, within `tolerance`.
///
/// A point on the segment splits it into two parts whose lengths add up to the
/// segment length. Anything off the segment (or past either end) makes the sum
/// longer.
pub fn on_segment(p1: Point, p2: Point, cursor: Point, tolerance: f32) -> bool {
    let offset = distance(p1, p2) - (distance(p1, cursor) + distance(cursor, p2));
    offset.abs() < tolerance
}
