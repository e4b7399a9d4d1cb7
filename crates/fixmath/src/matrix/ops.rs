use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    promote::{Promote, Promoted},
    traits::{Scalar, Zero},
    Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.abs_diff_eq(b, epsilon) {
                return false;
            }
        }
        true
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.relative_eq(b, epsilon, max_relative) {
                return false;
            }
        }
        true
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            if !a.ulps_eq(b, epsilon, max_ulps) {
                return false;
            }
        }
        true
    }
}

/// Matrix * Column Vector.
///
/// The element type of the result is [`Promoted<T, U>`].
impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Vector<Promoted<T, U>, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output {
        Vector::from_fn(|row| {
            self.0[row]
                .iter()
                .zip(rhs.iter())
                .fold(<Promoted<T, U> as Zero>::ZERO, |acc, (&m, &v)| {
                    acc + m.promote() * T::promote_rhs(v)
                })
        })
    }
}
