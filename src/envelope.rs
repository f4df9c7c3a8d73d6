use crate::errors::GeometryError;
use crate::sequence::CoordinateSequence;
use crate::{Coordinate, CoordinateXY};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An axis-aligned rectangle `[min_x, max_x] x [min_y, max_y]`.
///
/// The null (empty) envelope is stored with `max_x < min_x`, which no
/// initialized envelope can reach since initialization sorts its inputs.
#[derive(Copy, Clone, Debug)]
pub struct Envelope {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::new_null()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        if self.is_null() {
            other.is_null()
        } else {
            !other.is_null()
                && self.min_x == other.min_x
                && self.max_x == other.max_x
                && self.min_y == other.min_y
                && self.max_y == other.max_y
        }
    }
}

impl PartialOrd for Envelope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl Envelope {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        let mut env = Envelope::new_null();
        env.init(x1, x2, y1, y2);
        env
    }

    pub fn new_null() -> Self {
        Envelope {
            min_x: 0.,
            max_x: -1.,
            min_y: 0.,
            max_y: -1.,
        }
    }

    pub fn from_coordinate(p: &Coordinate) -> Self {
        Envelope::new(p.x(), p.x(), p.y(), p.y())
    }

    pub fn from_coordinates(p1: &Coordinate, p2: &Coordinate) -> Self {
        Envelope::new(p1.x(), p2.x(), p1.y(), p2.y())
    }

    pub fn of<'a, I: IntoIterator<Item = &'a Coordinate>>(coords: I) -> Self {
        coords.into_iter().fold(Envelope::new_null(), |mut env, c| {
            env.expand_to_include_coordinate(c);
            env
        })
    }

    /// Delegates to the sequence so that it can use its own storage layout.
    pub fn from_sequence(seq: &dyn CoordinateSequence) -> Self {
        let mut env = Envelope::new_null();
        seq.expand_envelope(&mut env);
        env
    }

    pub fn init(&mut self, x1: f64, x2: f64, y1: f64, y2: f64) {
        if x1 < x2 {
            self.min_x = x1;
            self.max_x = x2;
        } else {
            self.min_x = x2;
            self.max_x = x1;
        }
        if y1 < y2 {
            self.min_y = y1;
            self.max_y = y2;
        } else {
            self.min_y = y2;
            self.max_y = y1;
        }
    }

    pub fn set_to_null(&mut self) {
        *self = Envelope::new_null();
    }

    pub fn is_null(&self) -> bool {
        self.max_x < self.min_x
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        if self.is_null() {
            return 0.;
        }
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        if self.is_null() {
            return 0.;
        }
        self.max_y - self.min_y
    }

    /// Length of the diagonal.
    pub fn diameter(&self) -> f64 {
        if self.is_null() {
            return 0.;
        }
        self.width().hypot(self.height())
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn min_extent(&self) -> f64 {
        self.width().min(self.height())
    }

    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn centre(&self) -> Option<CoordinateXY> {
        if self.is_null() {
            return None;
        }
        Some(CoordinateXY {
            x: (self.max_x + self.min_x) / 2.,
            y: (self.max_y + self.min_y) / 2.,
        })
    }

    /// Grow to include `(x, y)`.  NaN ordinates are ignored.
    pub fn expand_to_include(&mut self, x: f64, y: f64) {
        if x.is_nan() || y.is_nan() {
            return;
        }
        if self.is_null() {
            self.min_x = x;
            self.max_x = x;
            self.min_y = y;
            self.max_y = y;
        } else {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    pub fn expand_to_include_coordinate(&mut self, p: &Coordinate) {
        self.expand_to_include(p.x(), p.y());
    }

    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        if self.is_null() {
            *self = *other;
        } else {
            self.min_x = self.min_x.min(other.min_x);
            self.max_x = self.max_x.max(other.max_x);
            self.min_y = self.min_y.min(other.min_y);
            self.max_y = self.max_y.max(other.max_y);
        }
    }

    pub fn expand_by(&mut self, distance: f64) {
        self.expand_by_xy(distance, distance);
    }

    /// Grow (or shrink, for negative deltas) on every side.  An envelope
    /// shrunk past its centre collapses to null.
    pub fn expand_by_xy(&mut self, delta_x: f64, delta_y: f64) {
        if self.is_null() {
            return;
        }
        self.min_x -= delta_x;
        self.max_x += delta_x;
        self.min_y -= delta_y;
        self.max_y += delta_y;

        if self.min_x > self.max_x || self.min_y > self.max_y {
            self.set_to_null();
        }
    }

    pub fn translate(&mut self, trans_x: f64, trans_y: f64) {
        if self.is_null() {
            return;
        }
        let (min_x, max_x, min_y, max_y) = (self.min_x, self.max_x, self.min_y, self.max_y);
        self.init(min_x + trans_x, max_x + trans_x, min_y + trans_y, max_y + trans_y);
    }

    pub fn intersection(&self, other: &Envelope) -> Envelope {
        if self.is_null() || other.is_null() || !self.intersects(other) {
            return Envelope::new_null();
        }
        Envelope::new(
            self.min_x.max(other.min_x),
            self.max_x.min(other.max_x),
            self.min_y.max(other.min_y),
            self.max_y.min(other.max_y),
        )
    }

    pub fn intersects(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    pub fn intersects_point(&self, x: f64, y: f64) -> bool {
        if self.is_null() {
            return false;
        }
        !(x > self.max_x || x < self.min_x || y > self.max_y || y < self.min_y)
    }

    pub fn intersects_coordinate(&self, p: &Coordinate) -> bool {
        self.intersects_point(p.x(), p.y())
    }

    pub fn disjoint(&self, other: &Envelope) -> bool {
        !self.intersects(other)
    }

    pub fn covers_point(&self, x: f64, y: f64) -> bool {
        self.intersects_point(x, y)
    }

    pub fn covers_coordinate(&self, p: &Coordinate) -> bool {
        self.covers_point(p.x(), p.y())
    }

    /// Boundary-inclusive containment of another envelope.
    pub fn covers(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Same as [`Envelope::covers`]: an envelope contains its own boundary.
    pub fn contains(&self, other: &Envelope) -> bool {
        self.covers(other)
    }

    pub fn contains_coordinate(&self, p: &Coordinate) -> bool {
        self.covers_coordinate(p)
    }

    /// Euclidean distance between the closest points of two envelopes.
    /// Zero if they intersect, or if either is null.
    pub fn distance(&self, other: &Envelope) -> f64 {
        if self.is_null() || other.is_null() || self.intersects(other) {
            return 0.;
        }

        let mut dx = 0.;
        if self.max_x < other.min_x {
            dx = other.min_x - self.max_x;
        } else if self.min_x > other.max_x {
            dx = self.min_x - other.max_x;
        }

        let mut dy = 0.;
        if self.max_y < other.min_y {
            dy = other.min_y - self.max_y;
        } else if self.min_y > other.max_y {
            dy = self.min_y - other.max_y;
        }

        if dx == 0. {
            dy
        } else if dy == 0. {
            dx
        } else {
            f64::hypot(dx, dy)
        }
    }

    /// Test whether the envelope of segment `p1`-`p2` contains `q`.
    pub fn intersects_segment_point(p1: CoordinateXY, p2: CoordinateXY, q: CoordinateXY) -> bool {
        q.x >= p1.x.min(p2.x) && q.x <= p1.x.max(p2.x) && q.y >= p1.y.min(p2.y) && q.y <= p1.y.max(p2.y)
    }

    /// Test whether the envelopes of segments `p1`-`p2` and `q1`-`q2` intersect.
    pub fn intersects_segments(
        p1: CoordinateXY,
        p2: CoordinateXY,
        q1: CoordinateXY,
        q2: CoordinateXY,
    ) -> bool {
        let env_p = Envelope::new(p1.x, p2.x, p1.y, p2.y);
        let env_q = Envelope::new(q1.x, q2.x, q1.y, q2.y);
        env_p.intersects(&env_q)
    }

    /// Clip the segment `start`-`end` to this envelope.
    /// Uses the Liang-Barsky algorithm:
    /// https://www.skytopia.com/project/articles/compsci/clipping.html
    pub fn clip_segment(
        &self,
        start: CoordinateXY,
        end: CoordinateXY,
    ) -> Option<(CoordinateXY, CoordinateXY)> {
        if self.is_null() {
            return None;
        }
        let start_inside = self.intersects_point(start.x, start.y);
        if start_inside && self.intersects_point(end.x, end.y) {
            return Some((start, end));
        } else if start == end {
            return None;
        }

        let mut t0 = 0.;
        let mut t1 = 1.;
        let delta = end - start;

        for side in SIDES.iter() {
            let (p, q) = match side {
                Side::Left => (-delta.x, start.x - self.min_x),
                Side::Right => (delta.x, self.max_x - start.x),
                Side::Bottom => (-delta.y, start.y - self.min_y),
                Side::Top => (delta.y, self.max_y - start.y),
            };
            if p == 0. {
                if q < 0. {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0. {
                if r > t1 {
                    return None;
                } else if r > t0 {
                    t0 = r;
                }
            } else if r < t0 {
                return None;
            } else if r < t1 {
                t1 = r;
            }
        }
        Some((start + delta * t0, start + delta * t1))
    }

    /// Null sorts lowest, then lexicographically on (min_x, min_y, max_x, max_y).
    pub fn compare_to(&self, other: &Envelope) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let pairs = [
            (self.min_x, other.min_x),
            (self.min_y, other.min_y),
            (self.max_x, other.max_x),
            (self.max_y, other.max_y),
        ];
        for (a, b) in pairs.iter() {
            if a < b {
                return Ordering::Less;
            } else if a > b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }
}

enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

static SIDES: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Env[Null]")
        } else {
            write!(
                f,
                "Env[{} : {}, {} : {}]",
                self.min_x, self.max_x, self.min_y, self.max_y
            )
        }
    }
}

impl FromStr for Envelope {
    type Err = GeometryError;

    /// Parse the `Display` form, `Env[min_x : max_x, min_y : max_y]` or `Env[Null]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GeometryError::InvalidArgument(format!("Malformed envelope: {:?}", s));
        let body = s
            .trim()
            .strip_prefix("Env[")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?
            .trim();
        if body == "Null" {
            return Ok(Envelope::new_null());
        }

        let mut values = Vec::with_capacity(4);
        for range in body.split(',') {
            let mut parts = range.split(':');
            for _ in 0..2 {
                let part = parts.next().ok_or_else(malformed)?;
                values.push(part.trim().parse::<f64>().map_err(|_| malformed())?);
            }
            if parts.next().is_some() {
                return Err(malformed());
            }
        }
        if values.len() != 4 {
            return Err(malformed());
        }
        Ok(Envelope::new(values[0], values[1], values[2], values[3]))
    }
}
