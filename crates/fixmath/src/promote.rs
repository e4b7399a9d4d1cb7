//! Type resolution for mixed-type arithmetic.
//!
//! Whenever two values with different element types are combined (vector + vector, vector *
//! scalar, matrix * vector), the element type of the result is decided by [`Promote`]. The
//! decision is made entirely by the trait system, so there is no runtime cost.
//!
//! The rule is a fixed rank order over the supported primitives, and the result is always the
//! higher-ranked operand:
//!
//! ```text
//! u8 < i8 < u16 < i16 < u32 < i32 < u64 < i64 < f32 < f64
//! ```
//!
//! - A floating-point type always wins over an integer type.
//! - Among two floats or two integers, the wider type wins.
//! - Integers of equal width resolve to the signed one. This conversion uses `as`, so unsigned
//!   values above the signed maximum wrap around (`u32::MAX` becomes `-1i32`).
//!
//! Because this is a total order, resolution is symmetric (`Promoted<T, U>` is `Promoted<U, T>`)
//! and transitive, and `Promoted<T, T>` is always `T`.
//!
//! ```
//! # use fixmath::*;
//! let v = vec2(1i32, 2) + vec2(1.5f64, 2.5);
//! let _: Vec2D = v;
//! assert_eq!(v, vec2(2.5, 4.5));
//!
//! let w = vec3(1u8, 2, 3) * 2i16;
//! let _: Vec3<i16> = w;
//! ```

use crate::traits::Scalar;

/// Resolves the element type of a binary operation between `Self` and `Rhs`, and converts
/// either operand into it.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The resolved element type.
    type Output: Scalar;

    /// Converts the left-hand operand into the resolved type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right-hand operand into the resolved type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The element type resulting from combining a `T` with a `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

/// Emits the impls where `$winner` is combined with itself and with every lower-ranked type.
macro_rules! promote_over {
    ($winner:ty $(, $loser:ty)*) => {
        impl Promote<$winner> for $winner {
            type Output = $winner;

            #[inline]
            fn promote(self) -> $winner {
                self
            }

            #[inline]
            fn promote_rhs(rhs: $winner) -> $winner {
                rhs
            }
        }

        $(
            impl Promote<$loser> for $winner {
                type Output = $winner;

                #[inline]
                fn promote(self) -> $winner {
                    self
                }

                #[inline]
                fn promote_rhs(rhs: $loser) -> $winner {
                    rhs as $winner
                }
            }

            impl Promote<$winner> for $loser {
                type Output = $winner;

                #[inline]
                fn promote(self) -> $winner {
                    self as $winner
                }

                #[inline]
                fn promote_rhs(rhs: $winner) -> $winner {
                    rhs
                }
            }
        )*
    };
}

/// Takes the types in descending rank order.
macro_rules! promote_table {
    () => {};
    ($head:ty $(, $rest:ty)*) => {
        promote_over!($head $(, $rest)*);
        promote_table!($($rest),*);
    };
}

promote_table!(f64, f32, i64, u64, i32, u32, i16, u16, i8, u8);
