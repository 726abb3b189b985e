//! Geometry primitives
//!
//! Pure point arithmetic used by both synthesis stages. Everything produced
//! here lives on the image plane: output z is always 0. Distances still use
//! all three components so they stay meaningful for raw extractor output.

use rand::Rng;

use crate::Point3;

/// Displace a point by independent uniform noise in `[-eps, eps]` on x and y.
///
/// Draws two values from `rng`. A non-positive (or NaN) amplitude leaves the
/// point where it is without consuming randomness.
pub fn noisy<R: Rng + ?Sized>(point: &Point3, eps: f64, rng: &mut R) -> Point3 {
    if !(eps > 0.0) {
        return Point3::planar(point.x, point.y);
    }
    let dx = rng.gen_range(-eps..=eps);
    let dy = rng.gen_range(-eps..=eps);
    Point3::planar(point.x + dx, point.y + dy)
}

/// `anchor + k * (b - a)`, projected onto the image plane.
pub fn translate_by_ratio(a: &Point3, b: &Point3, anchor: &Point3, k: f64) -> Point3 {
    Point3::planar(anchor.x + k * (b.x - a.x), anchor.y + k * (b.y - a.y))
}

/// Euclidean distance over all three components
pub fn distance(p: &Point3, q: &Point3) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let dz = q.z - p.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distortion ratio `|MN| / |AB|` of a synthetic bone against its real bone.
///
/// A zero-length reference bone (both ends undetected, or coincident) has its
/// length floored to 1, so the result degrades to `|MN|` instead of dividing
/// by zero. Use [`is_degenerate`] to detect that case.
pub fn ratio(a: &Point3, b: &Point3, m: &Point3, n: &Point3) -> f64 {
    let reference = distance(a, b);
    let reference = if reference == 0.0 { 1.0 } else { reference };
    distance(m, n) / reference
}

/// Is the reference bone `a -> b` zero-length?
pub fn is_degenerate(a: &Point3, b: &Point3) -> bool {
    distance(a, b) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_translate_by_ratio() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 5.0);
        let m = Point3::new(10.0, 10.0, 3.0);

        let p = translate_by_ratio(&a, &b, &m, 2.0);
        assert_eq!(p, Point3::new(12.0, 14.0, 0.0));
    }

    #[test]
    fn test_distance_uses_depth() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let q = Point3::new(0.0, 3.0, 4.0);
        assert!((distance(&p, &q) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio() {
        let a = Point3::planar(0.0, 0.0);
        let b = Point3::planar(2.0, 0.0);
        let m = Point3::planar(5.0, 5.0);
        let n = Point3::planar(5.0, 8.0);
        assert!((ratio(&a, &b, &m, &n) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_degenerate_reference_is_floored() {
        let a = Point3::zero();
        let m = Point3::planar(0.0, 0.0);
        let n = Point3::planar(0.3, 0.4);

        assert!(is_degenerate(&a, &a));
        // Reference length floors to 1, ratio is the raw synthetic length
        assert!((ratio(&a, &a, &m, &n) - 0.5).abs() < 1e-12);
        assert!(ratio(&a, &a, &a, &a).is_finite());
    }

    #[test]
    fn test_zero_noise_keeps_point() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = Point3::new(0.4, 0.6, 0.9);
        assert_eq!(noisy(&p, 0.0, &mut rng), Point3::planar(0.4, 0.6));
    }

    #[test]
    fn test_noise_is_seeded() {
        let p = Point3::planar(0.5, 0.5);
        let a = noisy(&p, 0.01, &mut StdRng::seed_from_u64(42));
        let b = noisy(&p, 0.01, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_noise_bounded(
            x in -2.0f64..2.0,
            y in -2.0f64..2.0,
            z in -2.0f64..2.0,
            eps in 0.0f64..0.1,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Point3::new(x, y, z);
            let q = noisy(&p, eps, &mut rng);
            prop_assert!((q.x - x).abs() <= eps + 1e-12);
            prop_assert!((q.y - y).abs() <= eps + 1e-12);
            prop_assert_eq!(q.z, 0.0);
        }

        #[test]
        fn prop_translation_scales_length(
            ax in -1.0f64..1.0, ay in -1.0f64..1.0,
            bx in -1.0f64..1.0, by in -1.0f64..1.0,
            mx in -1.0f64..1.0, my in -1.0f64..1.0,
            k in 0.1f64..3.0,
        ) {
            let a = Point3::planar(ax, ay);
            let b = Point3::planar(bx, by);
            let m = Point3::planar(mx, my);
            let n = translate_by_ratio(&a, &b, &m, k);
            prop_assert!((distance(&m, &n) - k * distance(&a, &b)).abs() < 1e-9);
            if !is_degenerate(&a, &b) && distance(&a, &b) > 1e-6 {
                prop_assert!((ratio(&a, &b, &m, &n) - k).abs() < 1e-6);
            }
        }
    }
}
