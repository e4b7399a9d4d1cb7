use approx::{assert_abs_diff_eq, assert_relative_eq};
use fixmath::*;

const SEED: u64 = 0x5eed_f1c5_3a7e_0001;
const ROUNDS: usize = 200;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_ints<const N: usize>(rng: &mut fastrand::Rng) -> Vector<i32, N> {
    Vector::from_fn(|_| rng.i32(-1000..=1000))
}

fn random_floats<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| (rng.f64() - 0.5) * 2000.0)
}

fn check_uniform_sum<const N: usize>(rng: &mut fastrand::Rng) {
    let v = rng.i32(-10_000..=10_000);
    assert_eq!(Vector::<i32, N>::splat(v).sum(), v * N as i32);

    let b = rng.u8(0..=255 / N.max(1) as u8);
    assert_eq!(Vector::<u8, N>::splat(b).sum(), b * N as u8);

    // multiples of 1/4 add up exactly
    let f = f64::from(rng.i16(..)) / 4.0;
    assert_eq!(Vector::<f64, N>::splat(f).sum(), f * N as f64);
}

#[test]
fn uniform_fill_sum() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        check_uniform_sum::<1>(&mut rng);
        check_uniform_sum::<2>(&mut rng);
        check_uniform_sum::<3>(&mut rng);
        check_uniform_sum::<4>(&mut rng);
        check_uniform_sum::<7>(&mut rng);
        check_uniform_sum::<16>(&mut rng);
    }
}

#[test]
fn dot_is_commutative() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        let (a, b) = (random_ints::<3>(&mut rng), random_ints::<3>(&mut rng));
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(funcs::dot(a, b), funcs::dot(b, a));

        let (a, b) = (random_floats::<5>(&mut rng), random_floats::<5>(&mut rng));
        assert_eq!(a.dot(&b), b.dot(&a));

        let c = random_ints::<5>(&mut rng);
        assert_eq!(a.dot(&c), c.dot(&a));
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        let v = random_floats::<4>(&mut rng);
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);

        let v = random_ints::<2>(&mut rng);
        if v != Vec2I::ZERO {
            assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn normalizing_zero_is_a_cast() {
    assert_eq!(Vec3I::ZERO.normalize(), Vec3I::ZERO.cast::<f64>());
    assert_eq!(Vector::<u8, 6>::ZERO.normalize(), Vector::<f64, 6>::ZERO);

    let neg_zero = vec2(-0.0f64, 0.0).normalize();
    assert!(neg_zero.x().is_sign_negative());
    assert!(!neg_zero.iter().any(|e| e.is_nan()));
}

#[test]
fn mixed_size_add() {
    let v = vec2(1i32, 2) + vec4(10.0f64, 20.0, 30.0, 40.0);
    let _: Vec4D = v;
    assert_eq!(v, vec4(11.0, 22.0, 30.0, 40.0));

    // operand order does not matter for addition
    let w = vec4(10.0f64, 20.0, 30.0, 40.0) + vec2(1i32, 2);
    assert_eq!(v, w);
}

#[test]
fn mixed_type_add() {
    let v = vec2(1i32, 2) + vec2(1.5f64, 2.5);
    let _: Vec2D = v;
    assert_eq!(v, vec2(2.5, 4.5));
}

#[test]
fn segment_distance() {
    let line = Segment2::from_coords(0, 0, 2, 0);
    assert_eq!(funcs::distance_to_line(line, vec2(1, 5)), 5.0);
    // measured against the infinite line, not the segment
    assert_eq!(funcs::distance_to_line(line, vec2(100, 5)), 5.0);
}

#[test]
fn cast_round_trip_truncates_once() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        let v = random_floats::<3>(&mut rng);
        let round_trip = v.cast::<i32>().cast::<f64>();
        assert_eq!(round_trip, v.map(f64::trunc));
        assert_eq!(round_trip.cast::<i32>().cast::<f64>(), round_trip);
    }
}

fn check_identity<const N: usize>(rng: &mut fastrand::Rng) {
    let v = random_ints::<N>(rng);
    assert_eq!(Matrix::<i32, N, N>::IDENTITY * v, v);
    assert_eq!(Matrix::<i32, N, N>::identity() * v, v);

    let v = random_floats::<N>(rng);
    assert_eq!(Matrix::<f64, N, N>::IDENTITY * v, v);
}

#[test]
fn identity_matrix() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        check_identity::<1>(&mut rng);
        check_identity::<2>(&mut rng);
        check_identity::<3>(&mut rng);
        check_identity::<4>(&mut rng);
        check_identity::<9>(&mut rng);
    }
}

#[test]
fn rotation_matrix() {
    let v = Mat2D::rotation(PI_2) * vec2(1.0, 0.0);
    assert_abs_diff_eq!(v, vec2(0.0, 1.0), epsilon = 1e-12);

    let v = Mat2F::rotation(std::f32::consts::FRAC_PI_2) * vec2(1.0f32, 0.0);
    assert_abs_diff_eq!(v, vec2(0.0f32, 1.0), epsilon = 1e-6);
}

#[test]
fn rotation_preserves_magnitude() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        let v = random_floats::<2>(&mut rng);
        let angle = rng.f64() * PI2;
        assert_relative_eq!(v.rotate(angle).magnitude(), v.magnitude(), epsilon = 1e-9);
        assert_relative_eq!(
            (Mat2D::rotation(angle) * v).magnitude(),
            v.magnitude(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn promotion_is_symmetric_for_operators() {
    let a = vec3(1u8, 2, 3);
    let b = vec3(-1i16, 0, 1);
    let ab: Vec3<i16> = a + b;
    let ba: Vec3<i16> = b + a;
    assert_eq!(ab, ba);

    let c: Vec3<f32> = a * 0.5f32;
    let d: Vec3<f32> = 0.5f32 * a;
    assert_eq!(c, d);
}

#[test]
fn display() {
    assert_eq!(vec3(1, 2, 3).to_string(), "1, 2, 3");
    assert_eq!(Segment2I::from_coords(0, 1, 2, 3).to_string(), "(0, 1) (2, 3)");
    assert_eq!(Mat2I::IDENTITY.to_string(), "[1, 0]\n[0, 1]");
}
