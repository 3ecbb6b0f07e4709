//! Rotation matrices and quaternion rotations describe the same transformations.

use approx::assert_abs_diff_eq;
use dk_math::*;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(90)
}

fn random_vector(rng: &mut fastrand::Rng) -> Vector3<f64> {
    Vector3::from_fn(|_| rng.f64() * 2.0 - 1.0)
}

fn random_angle(rng: &mut fastrand::Rng) -> Angle {
    angle_from_degrees(rng.f64() * 720.0 - 360.0)
}

#[test]
fn quarter_turn_about_x() {
    let rotated = Quaternion::rotate(
        vec3(0.0, 1.0, 0.0),
        angle_from_degrees(90.0),
        vec3(1.0, 0.0, 0.0),
    )
    .unwrap();
    assert_abs_diff_eq!(rotated, vec3(0.0, 0.0, 1.0), epsilon = 1e-6);

    let m = Matrix3::rotation(angle_from_degrees(90.0), vec3(1.0, 0.0, 0.0)).unwrap();
    assert_abs_diff_eq!(m * vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0), epsilon = 1e-6);
}

#[test]
fn matrix_agrees_with_quaternion() {
    let mut rng = rng();
    for _ in 0..500 {
        let vector = random_vector(&mut rng);
        let axis = random_vector(&mut rng);
        let angle = random_angle(&mut rng);

        let by_quaternion = Quaternion::rotate(vector, angle, axis).unwrap();
        let by_matrix = Matrix3::rotation(angle, axis).unwrap() * vector;
        assert_abs_diff_eq!(by_quaternion, by_matrix, epsilon = 1e-9);

        let homogeneous = Matrix4::rotation(angle, axis).unwrap() * vector.extend(1.0);
        assert_abs_diff_eq!(homogeneous.truncate(), by_matrix, epsilon = 1e-12);
    }
}

#[test]
fn rotation_preserves_length_and_axis() {
    let mut rng = rng();
    for _ in 0..500 {
        let vector = random_vector(&mut rng);
        let axis = random_vector(&mut rng);
        let angle = random_angle(&mut rng);

        let rotated = Quaternion::rotate(vector, angle, axis).unwrap();
        assert_abs_diff_eq!(rotated.magnitude(), vector.magnitude(), epsilon = 1e-9);

        let on_axis = Quaternion::rotate(axis, angle, axis).unwrap();
        assert_abs_diff_eq!(on_axis, axis, epsilon = 1e-9);

        let m = Matrix3::rotation(angle, axis).unwrap();
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-9);
    }
}

#[test]
fn full_turn_is_identity() {
    let mut rng = rng();
    for _ in 0..100 {
        let vector = random_vector(&mut rng);
        let axis = random_vector(&mut rng);
        let rotated = Quaternion::rotate(vector, angle_from_degrees(360.0), axis).unwrap();
        assert_abs_diff_eq!(rotated, vector, epsilon = 1e-9);
    }
}

#[test]
fn composed_rotations() {
    let axis = vec3(0.0, 0.0, 1.0);
    let a = Quaternion::from_axis_angle(axis, angle_from_degrees(30.0)).unwrap();
    let b = Quaternion::from_axis_angle(axis, angle_from_degrees(60.0)).unwrap();
    let v = vec3(1.0, 0.0, 0.0);
    assert_abs_diff_eq!((b * a).apply(v), vec3(0.0, 1.0, 0.0), epsilon = 1e-12);

    let ma = Matrix3::rotation(angle_from_degrees(30.0), axis).unwrap();
    let mb = Matrix3::rotation(angle_from_degrees(60.0), axis).unwrap();
    assert_abs_diff_eq!(mb * ma * v, vec3(0.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn zero_axis_is_rejected() {
    let zero = Vector3::<f64>::zero();
    assert_eq!(
        Quaternion::rotate(vec3(1.0, 0.0, 0.0), angle_from_degrees(45.0), zero),
        Err(Error::DivisionByZero)
    );
    assert_eq!(
        Matrix3::rotation(angle_from_degrees(45.0), zero),
        Err(Error::DivisionByZero)
    );
    assert_eq!(
        Quaternion::from_axis_angle(zero, angle_from_degrees(45.0)),
        Err(Error::DivisionByZero)
    );
}
