use holo_base::{Vec3, Vec4};

const EPS: f32 = 1e-6;

#[test]
fn test_componentwise_ops() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(0.5, -1.0, 4.0);
    assert_eq!(a + b, Vec3::new(1.5, 1.0, 7.0));
    assert_eq!(a - b, Vec3::new(0.5, 3.0, -1.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0) * 0.5, Vec4::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn test_cross_is_right_handed() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::UP;
    assert_eq!(x.cross(y), Vec3::FORWARD);
    assert_eq!(y.cross(x), -Vec3::FORWARD);
    assert_eq!(x.dot(y), 0.0);
}

#[test]
fn test_try_normalized() {
    let n = Vec3::new(3.0, 0.0, 4.0).try_normalized().unwrap();
    assert!((n.length() - 1.0).abs() < EPS);
    assert!((n.x - 0.6).abs() < EPS);
    assert!(Vec3::<f32>::zero().try_normalized().is_none());
    assert!(Vec3::new(f32::INFINITY, 0.0, 0.0).try_normalized().is_none());
}

#[test]
fn test_extend_and_project() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(p.extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(Vec4::new(2.0, 4.0, 6.0, 2.0).project(), Some(p));
    assert_eq!(Vec4::new(1.0, 1.0, 1.0, 0.0).project(), None);
    assert_eq!(p.extend(0.0).xyz(), p);
}

#[test]
fn test_is_finite() {
    assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Vec3::new(1.0, f32::NAN, 3.0).is_finite());
}
