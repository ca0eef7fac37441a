use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Integer pixel coordinate; also used as a 2D offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Largest absolute component (Chebyshev norm).
    #[inline]
    pub fn max_abs(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    #[inline]
    pub fn norm(self) -> f64 {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        (x * x + y * y).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        (self - other).norm()
    }

    #[inline]
    pub fn step(self, heading: Heading) -> Coordinate {
        self + heading.offset()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

/// 8-neighbour offsets indexed by heading; image y grows downward so
/// increasing the index turns clockwise on screen.
const HEADING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Compass heading in 45° steps: 0 = east, positive = clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Heading(u8);

impl Heading {
    pub const EAST: Heading = Heading(0);

    pub fn new(index: i32) -> Self {
        Heading(index.rem_euclid(8) as u8)
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn offset(self) -> Coordinate {
        let (dx, dy) = HEADING_OFFSETS[self.0 as usize];
        Coordinate::new(dx, dy)
    }

    /// Rotate by `steps` × 45°; positive is clockwise.
    #[inline]
    pub fn rotated(self, steps: i32) -> Heading {
        Heading::new(self.0 as i32 + steps)
    }

    #[inline]
    pub fn clockwise(self) -> Heading {
        self.rotated(1)
    }

    #[inline]
    pub fn counter_clockwise(self) -> Heading {
        self.rotated(-1)
    }

    /// Heading closest to the direction of `step`; `None` for a zero step.
    ///
    /// Unit 8-neighbour steps map exactly onto their heading.
    pub fn toward(step: Coordinate) -> Option<Heading> {
        if step.x == 0 && step.y == 0 {
            return None;
        }
        let angle = f64::from(step.y).atan2(f64::from(step.x));
        let index = (angle / std::f64::consts::FRAC_PI_4).round() as i32;
        Some(Heading::new(index))
    }
}
