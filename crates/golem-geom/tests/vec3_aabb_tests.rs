use golem_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_add_sub() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));

    let d = c - a;
    assert!(vec3_approx_eq(d, b, 1e-6));
}

#[test]
fn vec3_scalar_mul_div() {
    let v = Vec3::new(1.5, -2.0, 4.0);
    let m = v * 2.0;
    assert!(vec3_approx_eq(m, Vec3::new(3.0, -4.0, 8.0), 1e-6));

    let d = m / 2.0;
    assert!(vec3_approx_eq(d, v, 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));

    // Zero vector normalization should be a no-op (not NaN, unchanged)
    let z = Vec3::ZERO;
    let zn = z.normalized();
    assert!(vec3_approx_eq(zn, Vec3::ZERO, 1e-6));
    assert!(approx_eq(zn.length(), 0.0, 1e-6));
}

#[test]
fn vec3_lerp_endpoints_and_midpoint() {
    let a = Vec3::new(0.0, 2.0, -4.0);
    let b = Vec3::new(10.0, -2.0, 4.0);
    assert!(vec3_approx_eq(a.lerp(b, 0.0), a, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 1.0), b, 1e-6));
    assert!(vec3_approx_eq(a.lerp(b, 0.5), Vec3::new(5.0, 0.0, 0.0), 1e-6));
}

#[test]
fn aabb_new_and_contains() {
    let min = Vec3::new(-1.0, 0.0, 1.0);
    let max = Vec3::new(2.0, 3.0, 4.0);
    let aabb = Aabb::new(min, max);
    assert!(vec3_approx_eq(aabb.min, min, 1e-6));
    assert!(vec3_approx_eq(aabb.max, max, 1e-6));

    assert!(aabb.contains(Vec3::new(0.0, 1.0, 2.0)));
    assert!(aabb.contains(min));
    assert!(aabb.contains(max));
    assert!(!aabb.contains(Vec3::new(0.0, 1.0, 5.0)));
}

#[test]
fn aabb_centered_half_extents() {
    let aabb = Aabb::centered(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.5, 0.5));
    assert!(vec3_approx_eq(aabb.min, Vec3::new(0.5, 1.5, 2.5), 1e-6));
    assert!(vec3_approx_eq(aabb.max, Vec3::new(1.5, 2.5, 3.5), 1e-6));
}
