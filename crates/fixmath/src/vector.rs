use std::{array, cmp::Ordering, fmt, ops::Neg, slice};

use itertools::Itertools;
use num_traits::AsPrimitive;

use crate::{
    error::{Error, Result},
    traits::{Number, One, Scalar, Zero},
};

mod ops;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2I = Vec2<i32>;
pub type Vec2F = Vec2<f32>;
pub type Vec2D = Vec2<f64>;
pub type Vec3I = Vec3<i32>;
pub type Vec3F = Vec3<f32>;
pub type Vec3D = Vec3<f64>;
pub type Vec4I = Vec4<i32>;
pub type Vec4F = Vec4<f32>;
pub type Vec4D = Vec4<f64>;

pub type Point2I = Vec2I;
pub type Point2F = Vec2F;
pub type Point2D = Vec2D;
pub type Point3I = Vec3I;
pub type Point3F = Vec3F;
pub type Point3D = Vec3D;
pub type Point4I = Vec4I;
pub type Point4F = Vec4F;
pub type Point4D = Vec4D;

pub type Pos2I = Vec2I;
pub type Pos2F = Vec2F;
pub type Pos2D = Vec2D;
pub type Pos3I = Vec3I;
pub type Pos3F = Vec3F;
pub type Pos3D = Vec3D;
pub type Pos4I = Vec4I;
pub type Pos4F = Vec4F;
pub type Pos4D = Vec4D;

/// An RGB color with one byte per channel.
pub type Color3B = Vec3<u8>;
/// An RGB color with [`f32`] channels.
pub type Color3F = Vec3<f32>;
/// An RGBA color with one byte per channel.
pub type Color4B = Vec4<u8>;
/// An RGBA color with [`f32`] channels.
pub type Color4F = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::new`] and the [`From`] impl take an array of exactly `N` elements.
/// - [`Vector::try_from_slice`] (and the [`TryFrom`] impl) take a slice and reject it if its
///   length is not `N`.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::ZERO`], and the unit vectors `Vector::X`, `Vector::Y`, `Vector::Z`, `Vector::W` for
///   vectors with up to 4 dimensions.
///
/// # Arithmetic
///
/// The `+ - * /` operators work element-wise between vectors and with scalars of any primitive
/// numeric type. The element type of the result is chosen by [`Promote`][crate::Promote], so
/// combining an integer vector with a floating-point one yields a floating-point vector.
///
/// Vectors of different lengths (up to 4 elements) can be combined too. The result has the length
/// of the longer operand, and the elements past the end of the shorter operand are copied from the
/// longer one unchanged:
///
/// ```
/// # use fixmath::*;
/// let v = vec2(1, 2) + vec4(10.0, 20.0, 30.0, 40.0);
/// assert_eq!(v, vec4(11.0, 22.0, 30.0, 40.0));
///
/// let v = vec3(5, 5, 5) - vec1(1);
/// assert_eq!(v, vec3(4, 5, 5));
/// ```
///
/// [`Vector::zip_longest`] exposes the same rule for vectors of any length.
///
/// Conversions between element types are never implicit; use [`Vector::cast`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from an array of exactly `N` elements.
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        Self(elems)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector by copying the elements of `elems`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `elems` does not contain exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(Vec3I::try_from_slice(&[1, 2, 3]), Ok(vec3(1, 2, 3)));
    /// assert!(Vec3I::try_from_slice(&[1, 2]).is_err());
    /// ```
    pub fn try_from_slice(elems: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        match <[T; N]>::try_from(elems) {
            Ok(array) => Ok(Self(array)),
            Err(_) => {
                log::trace!(
                    "rejecting {}-element list for a {}-element vector",
                    elems.len(),
                    N
                );
                Err(Error::LengthMismatch {
                    expected: N,
                    actual: elems.len(),
                })
            }
        }
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.get(1), Ok(&2));
    /// assert_eq!(v.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.0.get(index).ok_or_else(|| out_of_range(index, N))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than `N`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0.get_mut(index).ok_or_else(|| out_of_range(index, N))
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than `N`. The vector is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.set(0, 9)?;
    /// assert_eq!(v, vec3(9, 2, 3));
    /// assert!(v.set(3, 0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Converts each element to `U` with `as`-cast semantics.
    ///
    /// Narrowing conversions are allowed: floats are truncated toward zero (saturating at the
    /// bounds of `U`), and wide integers wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let v = vec3(1.9, -2.5, 3.0).cast::<i32>();
    /// assert_eq!(v, vec3(1, -2, 3));
    /// assert_eq!(v.cast::<f64>(), vec3(1.0, -2.0, 3.0));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Returns a vector of a different length, truncating `self` or padding it with zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec3(1, 2, 3).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| self.0.get(i).copied().unwrap_or(T::ZERO))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns the sum of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec3(1, 2, 3).sum(), 6);
    /// assert_eq!(Vector::<i32, 0>::new([]).sum(), 0);
    /// ```
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &e| acc + e)
    }

    /// Returns the product of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec4(1, 2, 3, 4).product(), 24);
    /// ```
    pub fn product(&self) -> T {
        self.0.iter().fold(T::ONE, |acc, &e| acc * e)
    }

    /// Returns the arithmetic mean of the elements, evaluated in [`f64`].
    ///
    /// Every element is widened before summing, so integer vectors are neither truncated nor
    /// overflowed:
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec2(1, 2).avg(), 1.5);
    /// assert_eq!(vec3(255u8, 255, 255).avg(), 255.0);
    /// ```
    pub fn avg(&self) -> f64 {
        let sum = self.0.iter().fold(0.0, |acc, &e| {
            let e: f64 = e.as_();
            acc + e
        });
        sum / N as f64
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec3(4, -1, 7).min_element(), -1);
    /// ```
    pub fn min_element(&self) -> T {
        self.0[1..].iter().fold(self.0[0], |acc, &e| acc.min(e))
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec3(4.0, -1.0, 7.5).max_element(), 7.5);
    /// ```
    pub fn max_element(&self) -> T {
        self.0[1..].iter().fold(self.0[0], |acc, &e| acc.max(e))
    }

    /// Returns the squared length of this [`Vector`], computed in [`f64`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec2(4u8, 200).magnitude_squared(), 40016.0);
    /// ```
    pub fn magnitude_squared(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, &e| {
            let e: f64 = e.as_();
            acc + e * e
        })
    }

    /// Returns the length of this [`Vector`], computed in [`f64`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec2(3, 4).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Computes the dot product between `self` and `other`, in [`f64`].
    ///
    /// The element types of the operands may differ; the length may not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    pub fn dot<U: Scalar>(&self, other: &Vector<U, N>) -> f64 {
        self.0.iter().zip(&other.0).fold(0.0, |acc, (&a, &b)| {
            let (a, b): (f64, f64) = (a.as_(), b.as_());
            acc + a * b
        })
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// If the length is exactly zero, the vector is returned converted to [`f64`] but otherwise
    /// unchanged, so the result never contains `NaN` or infinities produced by this method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec3(0, 0, 4).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec2I::ZERO.normalize(), Vec2D::ZERO);
    /// ```
    pub fn normalize(&self) -> Vector<f64, N> {
        let v = self.cast::<f64>();
        let mag = self.magnitude();
        if mag == 0.0 {
            v
        } else {
            v.map(|e| e / mag)
        }
    }

    /// Compares the lengths of `self` and `other`.
    ///
    /// Returns [`None`] if either squared length is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(vec2(3, 4).cmp_magnitude(&vec2(0.0, 5.0)), Some(Ordering::Equal));
    /// assert_eq!(vec2(1, 1).cmp_magnitude(&vec2(0, 2)), Some(Ordering::Less));
    /// ```
    pub fn cmp_magnitude<U: Scalar>(&self, other: &Vector<U, N>) -> Option<Ordering> {
        self.magnitude_squared()
            .partial_cmp(&other.magnitude_squared())
    }
}

impl<T: Copy> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// Rotates `self` counterclockwise by `radians`, assuming the Y axis points up.
    ///
    /// The rotation is computed in [`f64`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let v = vec2(1, 0).rotate(PI_2);
    /// assert_abs_diff_eq!(v, vec2(0.0, 1.0), epsilon = 1e-12);
    /// ```
    pub fn rotate(self, radians: f64) -> Vec2<f64>
    where
        T: Scalar,
    {
        let (sin, cos) = radians.sin_cos();
        let [x, y]: [f64; 2] = self.cast::<f64>().into_array();
        vec2(x * cos - y * sin, x * sin + y * cos)
    }

    /// Rotates `self` by 90° clockwise.
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec2(1, 2).rotate_90_cw(), vec2(2, -1));
    /// ```
    pub fn rotate_90_cw(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [x, y] = self.0;
        vec2(y, -x)
    }

    /// Rotates `self` by 90° counterclockwise.
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(vec2(1, 2).rotate_90_ccw(), vec2(-2, 1));
    /// ```
    pub fn rotate_90_ccw(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [x, y] = self.0;
        vec2(-y, x)
    }
}

impl<T: Copy> Vector<T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// assert_eq!(Vec3I::X.cross(Vec3I::Y), Vec3I::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T: Copy> Vector<T, 4> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.0[3]
    }
}

fn out_of_range(index: usize, len: usize) -> Error {
    log::trace!("index {index} out of range for {len}-element vector");
    Error::OutOfRange { index, len }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self> {
        Self::try_from_slice(value)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Comma-separated elements without delimiters, eg. `1, 2, 3`.
///
/// Formatting options such as precision are applied to each element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.iter().format(", "), f)
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{consts::PI_2, ErrorKind};

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Vector::splat(7u8), vec4(7, 7, 7, 7));
        assert_eq!(Vec3I::new([1, 2, 3]), vec3(1, 2, 3));
        assert_eq!(Vec2F::from([0.5, 1.5]), vec2(0.5, 1.5));
        assert_eq!(Vec4D::default(), Vec4D::ZERO);
        assert_eq!(Vec3F::X + Vec3F::Y + Vec3F::Z, Vec3F::splat(1.0));
    }

    #[test]
    fn try_from_slice() {
        assert_eq!(Vec2I::try_from(&[4, 5][..]), Ok(vec2(4, 5)));

        let err = Vec4D::try_from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                expected: 4,
                actual: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert!(Vec2I::try_from_slice(&[1, 2, 3]).is_err());
    }

    #[test]
    fn access() {
        let mut v = vec2(0, 1);
        assert_eq!(v.x(), 0);
        assert_eq!(v.y(), 1);
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 1);

        v[0] = 777;
        assert_eq!(v.x(), 777);
        *v.get_mut(1).unwrap() = 9;
        assert_eq!(v, vec2(777, 9));

        let err = v.get(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(v.set(2, 5), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(v, vec2(777, 9));

        assert_eq!(vec4(1, 2, 3, 4).w(), 4);
        assert_eq!(vec3(1, 2, 3).z(), 3);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let v = vec2(1, 2);
        let _ = v[2];
    }

    #[test]
    fn reductions() {
        let v = vec4(3, -1, 4, 2);
        assert_eq!(v.sum(), 8);
        assert_eq!(v.product(), -24);
        assert_eq!(v.avg(), 2.0);
        assert_eq!(v.min_element(), -1);
        assert_eq!(v.max_element(), 4);

        let f = vec3(0.5, 0.25, -2.0);
        assert_eq!(f.sum(), -1.25);
        assert_eq!(f.product(), -0.25);
        assert_eq!(f.min_element(), -2.0);
        assert_eq!(f.max_element(), 0.5);

        assert_eq!(vec1(9u16).product(), 9);
        assert_eq!(Vector::<u8, 0>::new([]).product(), 1);
    }

    #[test]
    #[should_panic]
    fn empty_minimum_panics() {
        Vector::<f32, 0>::new([]).min_element();
    }

    #[test]
    fn uniform_sum() {
        assert_eq!(Vector::<i32, 5>::splat(3).sum(), 15);
        assert_eq!(Vector::<f64, 8>::splat(0.5).sum(), 4.0);
        assert_eq!(Vector::<u8, 3>::splat(7).avg(), 7.0);
    }

    #[test]
    fn avg_widens_before_summing() {
        assert_eq!(Color3B::splat(255).avg(), 255.0);
        assert_eq!(vec2(i32::MAX, i32::MAX).avg(), i32::MAX as f64);
        assert_eq!(vec2(i64::MIN, i64::MIN).avg(), i64::MIN as f64);
        assert_eq!(
            Color4B::splat(200).avg(),
            crate::funcs::average(&[200u8; 4]).unwrap()
        );
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(3, 4).magnitude_squared(), 25.0);
        assert_eq!(vec2(3, 4).magnitude(), 5.0);
        // would overflow in `u8`
        assert_eq!(vec2(255u8, 255).magnitude_squared(), 130050.0);
        assert_eq!(Vec3F::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(&vec3(4, -2, -1)), 3.0);
        assert_eq!(vec3(1, 3, -5).dot(&vec3(1, 3, -5)), 35.0);
        assert_eq!(Vec2F::X.dot(&Vec2F::Y), 0.0);
        assert_eq!(vec2(1i8, 2).dot(&vec2(0.5f32, 0.25)), 1.0);
    }

    #[test]
    fn normalize() {
        assert_relative_eq!(vec2(3, 4).normalize(), vec2(0.6, 0.8));
        assert_relative_eq!(vec4(1.0, 1.0, 1.0, 1.0).normalize().magnitude(), 1.0);

        let zero = Vec3I::ZERO.normalize();
        assert_eq!(zero, Vec3D::ZERO);
        assert!(zero.iter().all(|e| e.is_finite()));
    }

    #[test]
    fn cast_round_trip() {
        let v = vec3(1.75, -2.5, 3.0);
        let truncated = v.cast::<i32>();
        assert_eq!(truncated, vec3(1, -2, 3));
        assert_eq!(truncated.cast::<f64>(), vec3(1.0, -2.0, 3.0));
        assert_eq!(vec2(300i32, -1).cast::<u8>(), vec2(44u8, 255));
    }

    #[test]
    fn resize() {
        assert_eq!(vec4(1, 2, 3, 4).resize::<1>(), vec1(1));
        assert_eq!(vec1(1.5).resize::<3>(), vec3(1.5, 0.0, 0.0));
    }

    #[test]
    fn compare_magnitude() {
        assert_eq!(
            vec3(1, 2, 3).cmp_magnitude(&vec3(3, 2, 1)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            vec2(5, 0).cmp_magnitude(&vec2(1.0, 1.0)),
            Some(Ordering::Greater)
        );
        assert_eq!(vec2(f32::NAN, 0.0).cmp_magnitude(&vec2(1, 1)), None);
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(vec2(1.0, 0.0).rotate(PI_2), vec2(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(vec2(0, 2).rotate(-PI_2), vec2(2.0, 0.0), epsilon = 1e-12);
        assert_eq!(vec2(3, 1).rotate_90_cw().rotate_90_ccw(), vec2(3, 1));
        assert_eq!(
            vec2(1, 0).rotate_90_ccw().rotate_90_ccw(),
            vec2(1, 0).rotate_90_cw().rotate_90_cw()
        );
    }

    #[test]
    fn pod() {
        let verts = [vec2(1.0f32, 2.0), vec2(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);

        let zero: Vec3F = bytemuck::Zeroable::zeroed();
        assert_eq!(zero, Vec3F::ZERO);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0, 0, 0, 1)), "0, 0, 0, 1");
        assert_eq!(format!("{}", vec2(1.5, -2.0)), "1.5, -2");
        assert_eq!(format!("{:.2}", vec2(1.0, 0.5)), "1.00, 0.50");
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
    }
}
