//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    error::{Error, Result},
    promote::{Promote, Promoted},
    traits::{Scalar, Zero},
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Combines `lhs` and `rhs` element by element into a vector of length `M`.
///
/// Positions that only one operand covers take that operand's element, promoted but otherwise
/// unchanged. Callers guarantee `M == max(N1, N2)`.
fn combine<T, U, F, const N1: usize, const N2: usize, const M: usize>(
    lhs: Vector<T, N1>,
    rhs: Vector<U, N2>,
    mut op: F,
) -> Vector<Promoted<T, U>, M>
where
    T: Promote<U>,
    U: Scalar,
    F: FnMut(Promoted<T, U>, Promoted<T, U>) -> Promoted<T, U>,
{
    debug_assert_eq!(M, N1.max(N2));
    Vector::from_fn(|i| match (lhs.0.get(i), rhs.0.get(i)) {
        (Some(&l), Some(&r)) => op(l.promote(), T::promote_rhs(r)),
        (Some(&l), None) => l.promote(),
        (None, Some(&r)) => T::promote_rhs(r),
        (None, None) => <Promoted<T, U> as Zero>::ZERO,
    })
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Combines `self` with a vector of any length using `op`.
    ///
    /// This is the rule the arithmetic operators follow, available for lengths the operators
    /// don't cover. Elements are first promoted to [`Promoted<T, U>`]. The result has `M`
    /// elements; where only the longer operand has an element, it is copied to the result
    /// without applying `op`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `M` is not the larger of `N` and `N2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let a = Vector::<i32, 6>::splat(1);
    /// let b = vec2(0.5f64, 0.25);
    ///
    /// let c = a.zip_longest::<_, 2, 6>(b, |l, r| l * r)?;
    /// assert_eq!(c, [0.5, 0.25, 1.0, 1.0, 1.0, 1.0]);
    ///
    /// assert!(a.zip_longest::<_, 2, 5>(b, |l, r| l * r).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn zip_longest<U, const N2: usize, const M: usize>(
        self,
        rhs: Vector<U, N2>,
        op: impl FnMut(Promoted<T, U>, Promoted<T, U>) -> Promoted<T, U>,
    ) -> Result<Vector<Promoted<T, U>, M>>
    where
        T: Promote<U>,
        U: Scalar,
    {
        let expected = N.max(N2);
        if M != expected {
            log::trace!("rejecting {M}-element result for {N}- and {N2}-element operands");
            return Err(Error::SizeMismatch {
                expected,
                actual: M,
            });
        }
        Ok(combine(self, rhs, op))
    }
}

macro_rules! vector_ops {
    ($($trait:ident :: $method:ident, $op:tt;)+) => {
        $(
            impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
            where
                T: Promote<U>,
                U: Scalar,
            {
                type Output = Vector<Promoted<T, U>, N>;

                #[inline]
                fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                    combine(self, rhs, |l, r| l $op r)
                }
            }
        )+
    };
}

vector_ops! {
    Add::add, +;
    Sub::sub, -;
    Mul::mul, *;
    Div::div, /;
}

/// Operators between vectors of different lengths.
macro_rules! mixed_size_ops {
    (@op $trait:ident :: $method:ident, $op:tt, $n1:literal, $n2:literal, $m:literal) => {
        impl<T, U> $trait<Vector<U, $n2>> for Vector<T, $n1>
        where
            T: Promote<U>,
            U: Scalar,
        {
            type Output = Vector<Promoted<T, U>, $m>;

            #[inline]
            fn $method(self, rhs: Vector<U, $n2>) -> Self::Output {
                combine(self, rhs, |l, r| l $op r)
            }
        }
    };
    ($(($n1:literal, $n2:literal) -> $m:literal),+ $(,)?) => {
        $(
            mixed_size_ops!(@op Add::add, +, $n1, $n2, $m);
            mixed_size_ops!(@op Sub::sub, -, $n1, $n2, $m);
            mixed_size_ops!(@op Mul::mul, *, $n1, $n2, $m);
            mixed_size_ops!(@op Div::div, /, $n1, $n2, $m);
        )+
    };
}

mixed_size_ops! {
    (1, 2) -> 2,
    (1, 3) -> 3,
    (1, 4) -> 4,
    (2, 1) -> 2,
    (2, 3) -> 3,
    (2, 4) -> 4,
    (3, 1) -> 3,
    (3, 2) -> 3,
    (3, 4) -> 4,
    (4, 1) -> 4,
    (4, 2) -> 4,
    (4, 3) -> 4,
}

/// Operators between a vector and a primitive scalar.
///
/// One set per primitive type; a blanket impl over `Scalar` would overlap with the vector-vector
/// impls.
macro_rules! scalar_ops {
    (@op $s:ty, $trait:ident :: $method:ident, $op:tt) => {
        impl<T, const N: usize> $trait<$s> for Vector<T, N>
        where
            T: Promote<$s>,
        {
            type Output = Vector<Promoted<T, $s>, N>;

            #[inline]
            fn $method(self, rhs: $s) -> Self::Output {
                let rhs = T::promote_rhs(rhs);
                self.map(|e| e.promote() $op rhs)
            }
        }
    };
    ($($s:ty),+) => {
        $(
            scalar_ops!(@op $s, Add::add, +);
            scalar_ops!(@op $s, Sub::sub, -);
            scalar_ops!(@op $s, Mul::mul, *);
            scalar_ops!(@op $s, Div::div, /);

            /// Scalar multiplication with the scalar on the left.
            impl<T, const N: usize> Mul<Vector<T, N>> for $s
            where
                $s: Promote<T>,
                T: Scalar,
            {
                type Output = Vector<Promoted<$s, T>, N>;

                #[inline]
                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    let lhs = <$s as Promote<T>>::promote(self);
                    rhs.map(|e| lhs * <$s as Promote<T>>::promote_rhs(e))
                }
            }
        )+
    };
}

scalar_ops!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

macro_rules! assign_ops {
    ($($trait:ident :: $method:ident, $op:tt;)+) => {
        $(
            impl<T, const N: usize> $trait<T> for Vector<T, N>
            where
                T: $trait + Copy,
            {
                fn $method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| *lhs $op rhs);
                }
            }

            impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
            where
                T: $trait,
            {
                fn $method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| *lhs $op rhs);
                }
            }
        )+
    };
}

assign_ops! {
    AddAssign::add_assign, +=;
    SubAssign::sub_assign, -=;
    MulAssign::mul_assign, *=;
    DivAssign::div_assign, /=;
}
