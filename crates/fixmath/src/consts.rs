//! Angle constants, in radians.

/// π.
pub const PI: f64 = std::f64::consts::PI;
/// 2π, a full turn.
pub const PI2: f64 = std::f64::consts::TAU;
/// π/2, a quarter turn.
pub const PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// π/3.
pub const PI_3: f64 = std::f64::consts::FRAC_PI_3;
/// π/4.
pub const PI_4: f64 = std::f64::consts::FRAC_PI_4;
/// π/6.
pub const PI_6: f64 = std::f64::consts::FRAC_PI_6;
