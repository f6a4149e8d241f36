//! Constant-acceleration motion in three dimensions.
//!
//! [`Projectile`] keeps its own position, velocity and acceleration and
//! advances them with explicit Euler each frame:
//!
//! ```text
//! position += velocity * dt      (velocity from the previous frame)
//! velocity += acceleration * dt
//! ```
//!
//! Acceleration stays fixed unless the caller replaces it with
//! [`Projectile::set_acceleration`], which is how variable forces such as
//! adjustable gravity or thrust are modelled.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::math::sqrt;

/// A location in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: f64,
}

/// A displacement in 3D space: direction plus magnitude, measured from the
/// origin to `(x, y, z)`.
///
/// ```rust
/// use resonance::Vector;
///
/// let v = Vector::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!((v * 2.0).y, 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: f64,
}

impl Point {
    /// A point at `(x, y, z)`.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the `z = 0` plane.
    #[inline]
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// `(0, 0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Vector {
    /// A vector with components `(x, y, z)`.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector in the `z = 0` plane.
    #[inline]
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// The unit vector in the same direction. The zero vector is returned
    /// unchanged.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len == 0.0 { self } else { self * (1.0 / len) }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, d: Vector) -> Point {
        Point::new(self.x + d.x, self.y + d.y, self.z + d.z)
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, d: Vector) {
        *self = *self + d;
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, from: Point) -> Vector {
        Vector::new(self.x - from.x, self.y - from.y, self.z - from.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

/// Gravity for y-up coordinates (origin bottom-left, as in most math and
/// 3D engines).
///
/// ```text
///   +y            +y  ±z
///    │             │ /
///    └─── ±x       └─── ±x
/// ```
pub const GRAVITY: Vector = Vector::new(0.0, -9.81, 0.0);

/// Gravity for y-down coordinates (origin top-left, as in terminals and
/// most 2D canvases): 9.81 along +y.
///
/// ```text
///    ┌─── ±x       ┌─── ±x
///    │             │ \
///   +y            +y  ±z
/// ```
pub const TERMINAL_GRAVITY: Vector = Vector::new(0.0, 9.81, 0.0);

/// A body moving under constant acceleration.
///
/// ```rust
/// use resonance::{fps, Point, Projectile, Vector, TERMINAL_GRAVITY};
///
/// let mut ball = Projectile::new(
///     fps(60),
///     Point::origin(),
///     Vector::new(5.0, 5.0, 0.0),
///     TERMINAL_GRAVITY,
/// );
///
/// let mut pos = Point::origin();
/// for _ in 0..60 {
///     pos = ball.update();
/// }
/// assert!((pos.x - 5.0).abs() < 0.01);
/// assert!((pos.y - 9.82).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    position: Point,
    velocity: Vector,
    acceleration: Vector,
    delta_time: f64,
}

impl Projectile {
    /// A projectile stepped `delta_time` seconds per [`update`](Self::update).
    #[inline]
    pub const fn new(
        delta_time: f64,
        position: Point,
        velocity: Vector,
        acceleration: Vector,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            delta_time,
        }
    }

    /// Advances one frame and returns the new position.
    ///
    /// Position moves with the velocity held before this call; the
    /// acceleration is applied to velocity afterwards.
    #[inline]
    pub fn update(&mut self) -> Point {
        self.position += self.velocity * self.delta_time;
        self.velocity += self.acceleration * self.delta_time;
        self.position
    }

    /// Current position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Current velocity.
    #[inline]
    pub const fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Acceleration applied on every update.
    #[inline]
    pub const fn acceleration(&self) -> Vector {
        self.acceleration
    }

    /// Seconds advanced per update.
    #[inline]
    pub const fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Teleports the projectile without touching its velocity.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Replaces the velocity.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Replaces the acceleration used from the next update on.
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: Vector) {
        self.acceleration = acceleration;
    }
}
