//! Freestanding helper functions.
//!
//! Most of these are thin wrappers around methods of [`Vector`] and [`Segment2`], for callers that
//! prefer the function call syntax. Everything that produces a length, a distance or a mean does so
//! in [`f64`].

use std::ops::Neg;

use num_traits::AsPrimitive;

use crate::{
    consts::PI,
    error::{Error, Result},
    segment::Segment2,
    traits::{Number, Scalar},
    vector::{Vec2, Vector},
};

/// Returns `a * a`.
///
/// ```
/// # use fixmath::funcs::square;
/// assert_eq!(square(-3), 9);
/// assert_eq!(square(0.5), 0.25);
/// ```
#[inline]
pub fn square<T: Number>(a: T) -> T {
    a * a
}

/// Returns the mean of two values.
///
/// ```
/// # use fixmath::funcs::average2;
/// assert_eq!(average2(1, 2), 1.5);
/// ```
pub fn average2<T: Scalar>(a: T, b: T) -> f64 {
    (a.as_() + b.as_()) / 2.0
}

/// Returns the mean of three values.
pub fn average3<T: Scalar>(a: T, b: T, c: T) -> f64 {
    (a.as_() + b.as_() + c.as_()) / 3.0
}

/// Returns the mean of all values in `values`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
///
/// ```
/// # use fixmath::{funcs::average, Error};
/// assert_eq!(average(&[1u8, 2, 3, 4]), Ok(2.5));
/// assert_eq!(average::<f32>(&[]), Err(Error::EmptyInput));
/// ```
pub fn average<T: Scalar>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        log::trace!("refusing to average an empty list");
        return Err(Error::EmptyInput);
    }
    let sum = values.iter().fold(0.0, |acc, &v| acc + AsPrimitive::<f64>::as_(v));
    Ok(sum / values.len() as f64)
}

/// Returns the point halfway between `v1` and `v2`.
pub fn average_vec2<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> Vec2<f64> {
    Segment2::new(v1, v2).center()
}

/// Returns the squared distance between two points.
pub fn distance_squared<T: Scalar>(p1: Vec2<T>, p2: Vec2<T>) -> f64 {
    Segment2::new(p1, p2).len_sq()
}

/// Returns the distance between two points.
///
/// ```
/// # use fixmath::{funcs::distance, vec2};
/// assert_eq!(distance(vec2(0, 0), vec2(3, 4)), 5.0);
/// ```
pub fn distance<T: Scalar>(p1: Vec2<T>, p2: Vec2<T>) -> f64 {
    Segment2::new(p1, p2).len()
}

/// Returns the perpendicular distance from `point` to the infinite line through both endpoints of
/// `line`.
///
/// The distance is not clamped to the segment: a point beyond either endpoint is measured against
/// the extension of the line. If both endpoints coincide, this is the distance to that point.
///
/// ```
/// # use fixmath::{funcs::distance_to_line, vec2, Segment2};
/// let line = Segment2::from_coords(0, 0, 10, 0);
/// assert_eq!(distance_to_line(line, vec2(5, 3)), 3.0);
/// assert_eq!(distance_to_line(line, vec2(-20, -3)), 3.0);
/// ```
pub fn distance_to_line<T: Scalar>(line: Segment2<T>, point: Vec2<T>) -> f64 {
    let [ax, ay]: [f64; 2] = line.a.cast().into_array();
    let [bx, by]: [f64; 2] = line.b.cast().into_array();
    let [px, py]: [f64; 2] = point.cast().into_array();

    // line equation `a*x + b*y + c = 0`
    let a = ay - by;
    let b = bx - ax;
    let c = ax * by - bx * ay;

    let norm = (square(a) + square(b)).sqrt();
    if norm == 0.0 {
        return distance(line.a, point);
    }
    (a * px + b * py + c).abs() / norm
}

/// Computes the dot product of two vectors, in [`f64`].
///
/// ```
/// # use fixmath::{funcs::dot, vec3};
/// assert_eq!(dot(vec3(1, 2, 3), vec3(4, 5, 6)), 32.0);
/// ```
pub fn dot<T: Scalar, const N: usize>(v1: Vector<T, N>, v2: Vector<T, N>) -> f64 {
    v1.dot(&v2)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Rotates `v` counterclockwise by `radians`, in place.
pub fn rotate(v: &mut Vec2<f64>, radians: f64) {
    *v = v.rotate(radians);
}

/// Rotates `v` by 90° clockwise, in place.
pub fn rotate_90_cw<T: Copy + Neg<Output = T>>(v: &mut Vec2<T>) {
    *v = v.rotate_90_cw();
}

/// Rotates `v` by 90° counterclockwise, in place.
pub fn rotate_90_ccw<T: Copy + Neg<Output = T>>(v: &mut Vec2<T>) {
    *v = v.rotate_90_ccw();
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{
        consts::{PI_2, PI_4},
        vec2, vec4,
    };

    use super::*;

    #[test]
    fn averages() {
        assert_eq!(average2(1u8, 2), 1.5);
        assert_eq!(average2(255u8, 255), 255.0);
        assert_eq!(average3(1, 2, 4), 7.0 / 3.0);
        assert_eq!(average(&[2.0, 4.0]), Ok(3.0));
        assert_eq!(average::<i64>(&[]).unwrap_err().kind(), crate::ErrorKind::InvalidArgument);
        assert_eq!(average_vec2(vec2(0, 0), vec2(1, 3)), vec2(0.5, 1.5));
    }

    #[test]
    fn distances() {
        assert_eq!(distance_squared(vec2(1, 1), vec2(4, 5)), 25.0);
        assert_eq!(distance(vec2(1.0, 1.0), vec2(4.0, 5.0)), 5.0);
        assert_eq!(distance(vec2(7u8, 2), vec2(7, 2)), 0.0);
    }

    #[test]
    fn point_to_line() {
        let diagonal = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(distance_to_line(diagonal, vec2(1.0, 0.0)), 0.5f64.sqrt());
        assert_eq!(distance_to_line(diagonal, vec2(5.0, 5.0)), 0.0);

        // degenerate segment
        let degenerate = Segment2::from_coords(1, 1, 1, 1);
        assert_eq!(distance_to_line(degenerate, vec2(4, 5)), 5.0);
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(vec2(1, 0), vec2(0, 1)), 0.0);
        assert_eq!(dot(vec4(1, 2, 3, 4), vec4(1, 2, 3, 4)), 30.0);
    }

    #[test]
    fn angles() {
        assert_relative_eq!(degrees_to_radians(90.0), PI_2);
        assert_relative_eq!(degrees_to_radians(45.0), PI_4);
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(-33.0)), -33.0);
    }

    #[test]
    fn rotate_in_place() {
        let mut v = vec2(2.0, 0.0);
        rotate(&mut v, PI_2);
        assert_abs_diff_eq!(v, vec2(0.0, 2.0), epsilon = 1e-12);

        let mut w = vec2(1, 2);
        rotate_90_cw(&mut w);
        assert_eq!(w, vec2(2, -1));
        rotate_90_ccw(&mut w);
        assert_eq!(w, vec2(1, 2));
    }
}
