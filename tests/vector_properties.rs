//! Algebraic properties of `Vector3` checked over seeded random samples

use approx::assert_relative_eq;
use csgvec::{LeftMultiply1x3, Vector3, VectorError, VectorFields};
use nalgebra::Matrix4;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::{fixture, rstest};

const SAMPLES: usize = 500;

/// Random vectors with components in [-1000, 1000)
#[fixture]
fn samples() -> Vec<Vector3> {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca5e);
    (0..SAMPLES)
        .map(|_| {
            Vector3::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            )
            .unwrap()
        })
        .collect()
}

fn pairs(samples: &[Vector3]) -> impl Iterator<Item = (Vector3, Vector3)> + '_ {
    samples.iter().copied().zip(samples.iter().copied().rev())
}

#[rstest]
fn test_unchecked_construction_preserves_components(samples: Vec<Vector3>) {
    for v in samples {
        let fast = Vector3::new_unchecked(v.x(), v.y(), v.z());
        assert_eq!(fast.x(), v.x());
        assert_eq!(fast.y(), v.y());
        assert_eq!(fast.z(), v.z());
    }
}

#[rstest]
fn test_plus_negated_is_zero(samples: Vec<Vector3>) {
    for v in samples {
        assert!(v.plus(&v.negated()).equals(&Vector3::ZERO), "{}", v);
        #[allow(clippy::clone_on_copy)]
        let copy = v.clone();
        assert!(v.equals(&copy));
    }
}

#[rstest]
fn test_cross_is_orthogonal_to_inputs(samples: Vec<Vector3>) {
    for (a, b) in pairs(&samples) {
        let c = a.cross(&b);
        // Rounding scales with |a|·|b|·|a|
        let tol = 1e-12 * a.length() * b.length() * (a.length() + b.length());
        assert!(c.dot(&a).abs() <= tol, "{} x {} = {}", a, b, c);
        assert!(c.dot(&b).abs() <= tol, "{} x {} = {}", a, b, c);
    }
}

#[rstest]
fn test_unit_has_length_one(samples: Vec<Vector3>) {
    for v in samples {
        assert_relative_eq!(v.unit().length(), 1.0, epsilon = 1e-12);
    }
}

#[rstest]
fn test_lerp_endpoints(samples: Vec<Vector3>) {
    for (a, b) in pairs(&samples) {
        assert!(a.lerp(&b, 0.0).equals(&a));

        let end = a.lerp(&b, 1.0);
        assert_relative_eq!(end.x(), b.x(), epsilon = 1e-9);
        assert_relative_eq!(end.y(), b.y(), epsilon = 1e-9);
        assert_relative_eq!(end.z(), b.z(), epsilon = 1e-9);
    }
}

#[rstest]
fn test_distance_squared_matches_minus(samples: Vec<Vector3>) {
    for (a, b) in pairs(&samples) {
        assert_eq!(a.distance_to_squared(&b), a.minus(&b).length_squared());
        assert_eq!(a.distance_to(&b), a.minus(&b).length());
    }
}

#[rstest]
fn test_non_parallel_vector_is_never_parallel(samples: Vec<Vector3>) {
    for v in samples {
        let seed = v.random_non_parallel_vector();
        assert_eq!(seed.length(), 1.0);
        assert!(v.cross(&seed).length() > 0.0, "{} parallel to {}", v, seed);
    }
}

#[rstest]
fn test_min_max_bound_both_inputs(samples: Vec<Vector3>) {
    for (a, b) in pairs(&samples) {
        let lo = a.min(&b);
        let hi = a.max(&b);
        for (l, h, x, y) in [
            (lo.x(), hi.x(), a.x(), b.x()),
            (lo.y(), hi.y(), a.y(), b.y()),
            (lo.z(), hi.z(), a.z(), b.z()),
        ] {
            assert!(l <= x && l <= y && h >= x && h >= y);
        }
    }
}

#[rstest]
fn test_translation_matrix_matches_plus(samples: Vec<Vector3>) {
    for (a, offset) in pairs(&samples) {
        let m = Matrix4::new_translation(&offset.to_vector3()).transpose();
        let moved = m.left_multiply_1x3_vector(&a);
        assert_eq!(moved, a.multiply_4x4(&m));
        assert_relative_eq!(moved.x(), a.plus(&offset).x(), epsilon = 1e-9);
        assert_relative_eq!(moved.y(), a.plus(&offset).y(), epsilon = 1e-9);
        assert_relative_eq!(moved.z(), a.plus(&offset).z(), epsilon = 1e-9);
    }
}

#[rstest]
#[case(&[1.0, 2.0], Some([1.0, 2.0, 0.0]))]
#[case(&[1.0, 2.0, 3.0], Some([1.0, 2.0, 3.0]))]
#[case(&[], None)]
#[case(&[1.0], None)]
#[case(&[1.0, 2.0, 3.0, 4.0], None)]
#[case(&[1.0, f64::NAN], None)]
#[case(&[f64::INFINITY, 2.0, 3.0], None)]
fn test_sequence_construction(#[case] input: &[f64], #[case] expected: Option<[f64; 3]>) {
    match (Vector3::from_slice(input), expected) {
        (Ok(v), Some(arr)) => assert_eq!(v.to_array(), arr),
        (Err(VectorError::InvalidArgument(_)), None) => {}
        (other, _) => panic!("unexpected result for {:?}: {:?}", input, other),
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(Vector3::splat(4.0).unwrap().to_array(), [4.0, 4.0, 4.0]);

    let keyed = VectorFields {
        x: 1.0,
        y: 2.0,
        z: None,
    };
    assert_eq!(Vector3::from_fields(&keyed).unwrap().to_array(), [1.0, 2.0, 0.0]);

    let keyed = VectorFields {
        z: Some(3.0),
        ..keyed
    };
    assert_eq!(Vector3::from_fields(&keyed).unwrap().to_array(), [1.0, 2.0, 3.0]);

    let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
    assert_eq!(v.random_non_parallel_vector(), Vector3::X);
    let v = Vector3::new(5.0, 1.0, 2.0).unwrap();
    assert_eq!(v.random_non_parallel_vector(), Vector3::Y);
}

#[test]
fn test_vector_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Vector3>();

    let shared = Vector3::new(1.0, 2.0, 3.0).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || shared.times(i as f64)))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), shared.times(i as f64));
    }
}
