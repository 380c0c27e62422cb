use golem_geom::Vec3;
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox_abs_rel(a: Vec3, b: Vec3, atol: f32, rtol: f32) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol)
        && approx_abs_rel(a.y, b.y, atol, rtol)
        && approx_abs_rel(a.z, b.z, atol, rtol)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn bounded_nonzero_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded_nonzero", |v| {
        v.is_finite() && {
            let a = v.abs();
            a >= 1e-6 && a <= 1e6
        }
    })
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_nondegenerate_vec3() -> impl Strategy<Value = Vec3> {
    (
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
        bounded_nonzero_f32(),
    )
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Addition commutativity: a + b == b + a (element-wise)
    #[test]
    fn vec3_add_commutative(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // Distributive property of dot over addition: (a + b)·c = a·c + b·c
    #[test]
    fn vec3_dot_distributive(
        a in arb_vec3(),
        b in arb_vec3(),
        c in arb_vec3(),
    ) {
        let left = (a + b).dot(c);
        let right = a.dot(c) + b.dot(c);
        prop_assert!(approx_abs_rel(left, right, 1e-6, 1e-5));
    }

    // Normalized length: |normalize(v)| = 1 for non-zero, else unchanged for zero vector
    #[test]
    fn vec3_normalized_length(
        v in arb_nondegenerate_vec3(),
    ) {
        let len = v.length();
        let n = v.normalized();
        if len > 0.0 {
            prop_assert!(approx(n.length(), 1.0, 1e-3));
        } else {
            prop_assert!(vapprox(n, v, 1e-6));
        }
    }

    // Scalar roundtrip: (a * k) / k == a for k != 0
    #[test]
    fn vec3_scalar_roundtrip(
        a in arb_vec3(),
        k in bounded_nonzero_f32(),
    ) {
        prop_assume!(k != 0.0);
        let r = (a * k) / k;
        prop_assert!(vapprox_abs_rel(r, a, 1e-6, 1e-5));
    }

    // Triangle inequality: |a + b| <= |a| + |b|
    #[test]
    fn vec3_triangle_inequality(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        let lhs = (a + b).length();
        let rhs = a.length() + b.length();
        // Allow small numerical slack
        prop_assert!(lhs <= rhs + 1e-6 + 1e-5 * rhs.max(1.0));
    }

    // Lerp endpoints: lerp(a, b, 0) = a and lerp(a, b, 1) = b
    #[test]
    fn vec3_lerp_endpoints(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        prop_assert!(vapprox_abs_rel(a.lerp(b, 0.0), a, 1e-6, 1e-5));
        prop_assert!(vapprox_abs_rel(a.lerp(b, 1.0), b, 1e-6, 1e-5));
    }

    // Lerp stays on the segment for t in [0, 1]: each component between endpoints
    #[test]
    fn vec3_lerp_bounded(
        a in arb_vec3(),
        b in arb_vec3(),
        t in 0.0f32..=1.0,
    ) {
        let p = a.lerp(b, t);
        let between = |v: f32, lo: f32, hi: f32| {
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            v >= lo - 1e-3 - 1e-5 * hi.abs().max(lo.abs()) && v <= hi + 1e-3 + 1e-5 * hi.abs().max(lo.abs())
        };
        prop_assert!(between(p.x, a.x, b.x));
        prop_assert!(between(p.y, a.y, b.y));
        prop_assert!(between(p.z, a.z, b.z));
    }
}
