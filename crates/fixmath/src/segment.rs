use std::{
    fmt,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::AsPrimitive;

use crate::{
    traits::Scalar,
    vector::{vec2, Vec2},
};

pub type Segment2I = Segment2<i32>;
pub type Segment2F = Segment2<f32>;
pub type Segment2D = Segment2<f64>;

pub type Line2I = Segment2I;
pub type Line2F = Segment2F;
pub type Line2D = Segment2D;

pub type Edge2I = Segment2I;
pub type Edge2F = Segment2F;
pub type Edge2D = Segment2D;

/// A 2D line segment between the endpoints `a` and `b`.
///
/// All derived quantities (length, center, direction) are computed in [`f64`], independent of the
/// element type.
///
/// # Examples
///
/// ```
/// # use fixmath::*;
/// let seg = Segment2::from_coords(0, 0, 3, 4);
/// assert_eq!(seg.len(), 5.0);
/// assert_eq!(seg.center(), vec2(1.5, 2.0));
/// assert_eq!(seg.to_string(), "(0, 0) (3, 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment2<T> {
    pub a: Vec2<T>,
    pub b: Vec2<T>,
}

impl<T> Segment2<T> {
    #[inline]
    pub const fn new(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from the coordinates of both endpoints.
    #[inline]
    pub const fn from_coords(ax: T, ay: T, bx: T, by: T) -> Self {
        Self::new(vec2(ax, ay), vec2(bx, by))
    }

    /// Converts both endpoints to element type `U`, with `as`-cast semantics.
    pub fn cast<U>(self) -> Segment2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Segment2::new(self.a.cast(), self.b.cast())
    }
}

impl<T: Scalar> Segment2<T> {
    /// Returns the vector from `a` to `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let seg = Segment2::from_coords(1u8, 5, 4, 1);
    /// assert_eq!(seg.delta(), vec2(3.0, -4.0));
    /// ```
    pub fn delta(&self) -> Vec2<f64> {
        self.b.cast::<f64>() - self.a.cast::<f64>()
    }

    pub fn delta_x(&self) -> f64 {
        self.delta().x()
    }

    pub fn delta_y(&self) -> f64 {
        self.delta().y()
    }

    /// Returns the squared length of the segment.
    pub fn len_sq(&self) -> f64 {
        self.delta().magnitude_squared()
    }

    /// Returns the length of the segment.
    pub fn len(&self) -> f64 {
        self.delta().magnitude()
    }

    /// Returns the midpoint between `a` and `b`.
    pub fn center(&self) -> Vec2<f64> {
        (self.a.cast::<f64>() + self.b.cast::<f64>()) / 2.0f64
    }

    /// Returns the unit vector pointing from `b` back toward `a`.
    ///
    /// This is the *negated* normalized [`delta`][Self::delta]. A segment of length zero has the
    /// zero vector as its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let seg = Segment2::from_coords(0, 0, 2, 0);
    /// assert_eq!(seg.dir(), vec2(-1.0, 0.0));
    ///
    /// let point = Segment2::from_coords(1, 1, 1, 1);
    /// assert_eq!(point.dir(), Vec2D::ZERO);
    /// ```
    pub fn dir(&self) -> Vec2<f64> {
        -self.delta().normalize()
    }
}

/// Moves both endpoints by the same amount.
impl<T: AddAssign + Copy> AddAssign<T> for Segment2<T> {
    fn add_assign(&mut self, rhs: T) {
        self.a += rhs;
        self.b += rhs;
    }
}

impl<T: SubAssign + Copy> SubAssign<T> for Segment2<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.a -= rhs;
        self.b -= rhs;
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Segment2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.a *= rhs;
        self.b *= rhs;
    }
}

impl<T: DivAssign + Copy> DivAssign<T> for Segment2<T> {
    fn div_assign(&mut self, rhs: T) {
        self.a /= rhs;
        self.b /= rhs;
    }
}

/// Endpoint-wise.
impl<T: AddAssign> AddAssign<Segment2<T>> for Segment2<T> {
    fn add_assign(&mut self, rhs: Segment2<T>) {
        self.a += rhs.a;
        self.b += rhs.b;
    }
}

/// Endpoint-wise.
impl<T: SubAssign> SubAssign<Segment2<T>> for Segment2<T> {
    fn sub_assign(&mut self, rhs: Segment2<T>) {
        self.a -= rhs.a;
        self.b -= rhs.b;
    }
}

/// Endpoint-wise.
impl<T: MulAssign> MulAssign<Segment2<T>> for Segment2<T> {
    fn mul_assign(&mut self, rhs: Segment2<T>) {
        self.a *= rhs.a;
        self.b *= rhs.b;
    }
}

/// Endpoint-wise.
impl<T: DivAssign> DivAssign<Segment2<T>> for Segment2<T> {
    fn div_assign(&mut self, rhs: Segment2<T>) {
        self.a /= rhs.a;
        self.b /= rhs.b;
    }
}

impl<T> AbsDiffEq for Segment2<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon) && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T> RelativeEq for Segment2<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Segment2<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.a.ulps_eq(&other.a, epsilon, max_ulps) && self.b.ulps_eq(&other.b, epsilon, max_ulps)
    }
}

impl<T: fmt::Display> fmt::Display for Segment2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) ({})", self.a, self.b)
    }
}
