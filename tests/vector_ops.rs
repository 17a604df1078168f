//! Integration tests for the Vector type.

use matvec::{MathError, Vector};
use rand::Rng;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_vec_and_len() {
    let v = Vector::from_vec(vec![1.0f32, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn empty_vector() {
    let v: Vector<f32> = Vector::from_vec(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn zeros() {
    let v: Vector<i32> = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    for x in v.iter() {
        assert_eq!(*x, 0);
    }
}

#[test]
fn from_elem() {
    let v = Vector::from_elem(5, 42i32);
    assert_eq!(v.to_vec(), vec![42, 42, 42, 42, 42]);
}

#[test]
fn from_vec_conversions() {
    let v: Vector<i32> = vec![1, 2, 3].into();
    assert_eq!(v.len(), 3);
    let back: Vec<i32> = v.into();
    assert_eq!(back, vec![1, 2, 3]);
}

#[test]
fn from_iterator() {
    let v: Vector<i32> = (1..=4).collect();
    assert_eq!(v.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn clone_is_independent() {
    // Copy construction must never alias the original's storage.
    let original = Vector::from_vec(vec![1, 2, 3]);
    let mut copy = original.clone();
    copy[0] = 99;
    assert_eq!(original[0], 1);
    assert_eq!(copy[0], 99);
}

// ---------------------------------------------------------------------------
// Indexed access
// ---------------------------------------------------------------------------

#[test]
fn indexing() {
    let mut v = Vector::from_vec(vec![10, 20, 30]);
    assert_eq!(v[0], 10);
    assert_eq!(v[2], 30);
    v[1] = 25;
    assert_eq!(v[1], 25);
}

#[test]
fn checked_get_and_set() {
    let mut v = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(*v.get(1).unwrap(), 2);
    assert!(matches!(
        v.get(3),
        Err(MathError::IndexOutOfBounds { index: 3, len: 3 })
    ));

    v.set(0, 7).unwrap();
    assert_eq!(v[0], 7);
    assert!(matches!(
        v.set(9, 0),
        Err(MathError::IndexOutOfBounds { index: 9, len: 3 })
    ));
}

#[test]
fn mutation_through_slice() {
    let mut v = Vector::from_vec(vec![1, 2, 3]);
    v.as_mut_slice()[2] = 9;
    assert_eq!(v.as_slice(), &[1, 2, 9]);
}

// ---------------------------------------------------------------------------
// Elementwise arithmetic
// ---------------------------------------------------------------------------

#[test]
fn addition() {
    let a = Vector::from_vec(vec![1, 2, 3]);
    let b = Vector::from_vec(vec![4, 5, 6]);
    assert_eq!(a.try_add(&b).unwrap().to_vec(), vec![5, 7, 9]);
    assert_eq!((&a + &b).to_vec(), vec![5, 7, 9]);
}

#[test]
fn subtraction() {
    let a = Vector::from_vec(vec![10, 20, 30]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(a.try_sub(&b).unwrap().to_vec(), vec![9, 18, 27]);
    assert_eq!((&a - &b).to_vec(), vec![9, 18, 27]);
}

#[test]
fn mismatched_lengths_error() {
    let a = Vector::from_vec(vec![1, 2]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    assert!(matches!(
        a.try_add(&b),
        Err(MathError::LengthMismatch {
            expected: 2,
            found: 3
        })
    ));
    assert!(a.try_sub(&b).is_err());
}

#[test]
#[should_panic(expected = "equal length vectors")]
fn operator_addition_panics_on_mismatch() {
    let a = Vector::from_vec(vec![1, 2]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    let _ = &a + &b;
}

#[test]
fn in_place_addition_and_subtraction() {
    let mut a = Vector::from_vec(vec![1, 2, 3]);
    let b = Vector::from_vec(vec![4, 5, 6]);
    let updated = a.try_add_assign(&b).unwrap();
    assert_eq!(updated.to_vec(), vec![5, 7, 9]);
    a.try_sub_assign(&b).unwrap();
    assert_eq!(a.to_vec(), vec![1, 2, 3]);

    a += &b;
    assert_eq!(a.to_vec(), vec![5, 7, 9]);
    a -= &b;
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
}

#[test]
fn in_place_ops_return_the_receiver_for_chaining() {
    let mut a = Vector::from_vec(vec![1, 2, 3]);
    let b = Vector::from_vec(vec![4, 5, 6]);
    a.try_add_assign(&b)
        .unwrap()
        .try_add_assign(&b)
        .unwrap();
    assert_eq!(a.to_vec(), vec![9, 12, 15]);
}

#[test]
fn failed_in_place_op_leaves_receiver_unchanged() {
    let mut a = Vector::from_vec(vec![1, 2]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    assert!(a.try_add_assign(&b).is_err());
    assert_eq!(a.to_vec(), vec![1, 2]);
}

#[test]
fn scaling() {
    let v = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(v.scale(3).to_vec(), vec![3, 6, 9]);
    assert_eq!((&v * 2).to_vec(), vec![2, 4, 6]);

    let mut w = Vector::from_vec(vec![1.5f64, -2.0]);
    w *= 2.0;
    assert_eq!(w.to_vec(), vec![3.0, -4.0]);
}

#[test]
fn addition_round_trips_with_subtraction() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let a: Vector<i64> = (0..8).map(|_| rng.gen_range(-100i64..100)).collect();
        let b: Vector<i64> = (0..8).map(|_| rng.gen_range(-100i64..100)).collect();
        let round_trip = a.try_add(&b).unwrap().try_sub(&b).unwrap();
        assert_eq!(round_trip, a);
    }
}

#[test]
fn zero_vector_is_additive_identity() {
    let a = Vector::from_vec(vec![4, -2, 7]);
    let z: Vector<i32> = Vector::zeros(3);
    assert_eq!(a.try_add(&z).unwrap(), a);
}

// ---------------------------------------------------------------------------
// Dot product and magnitude
// ---------------------------------------------------------------------------

#[test]
fn dot_product() {
    let a = Vector::from_vec(vec![1, 2, 3]);
    let b = Vector::from_vec(vec![4, 5, 6]);
    assert_eq!(a.dot(&b).unwrap(), 32);
}

#[test]
fn dot_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let a: Vector<i64> = (0..6).map(|_| rng.gen_range(-50i64..50)).collect();
        let b: Vector<i64> = (0..6).map(|_| rng.gen_range(-50i64..50)).collect();
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }
}

#[test]
fn dot_length_mismatch_errors() {
    let a = Vector::from_vec(vec![1, 2]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    assert!(matches!(a.dot(&b), Err(MathError::LengthMismatch { .. })));
}

#[test]
fn magnitude_of_3_4_vector() {
    let v = Vector::from_vec(vec![3.0f64, 4.0]);
    assert!((v.magnitude() - 5.0).abs() < 1e-12);
}

#[test]
fn magnitude_is_non_negative_and_zero_for_zeros() {
    let z: Vector<f64> = Vector::zeros(5);
    assert_eq!(z.magnitude(), 0.0);

    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let v: Vector<f64> = (0..4).map(|_| rng.gen_range(-10.0f64..10.0)).collect();
        assert!(v.magnitude() >= 0.0);
    }
}

#[test]
fn magnitude_sq_over_integers() {
    let v = Vector::from_vec(vec![2, 3]);
    assert_eq!(v.magnitude_sq(), 13);
}

// ---------------------------------------------------------------------------
// Iteration, equality, display
// ---------------------------------------------------------------------------

#[test]
fn iteration_is_restartable() {
    let v = Vector::from_vec(vec![1, 2, 3]);
    let first: i32 = v.iter().sum();
    let second: i32 = v.iter().sum();
    assert_eq!(first, second);

    let mut collected = Vec::new();
    for x in &v {
        collected.push(*x);
    }
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn iter_mut_updates_elements() {
    let mut v = Vector::from_vec(vec![1, 2, 3]);
    for x in v.iter_mut() {
        *x *= 10;
    }
    assert_eq!(v.to_vec(), vec![10, 20, 30]);
}

#[test]
fn mapv() {
    let v = Vector::from_vec(vec![1.0f32, 2.0, 3.0]);
    let doubled = v.mapv(|x| x * 2.0);
    assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn equality() {
    let a = Vector::from_vec(vec![1, 2, 3]);
    let b = Vector::from_vec(vec![1, 2, 3]);
    let c = Vector::from_vec(vec![1, 2]);
    let d = Vector::from_vec(vec![1, 2, 4]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn display_format() {
    let v = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(format!("{}", v), "[1, 2, 3]");
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn serializes_as_plain_array() -> anyhow::Result<()> {
    let v = Vector::from_vec(vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&v)?, "[1,2,3]");
    Ok(())
}

#[test]
fn round_trips_through_json() -> anyhow::Result<()> {
    let v = Vector::from_vec(vec![1.5f64, -2.25, 0.0]);
    let json = serde_json::to_string(&v)?;
    let back: Vector<f64> = serde_json::from_str(&json)?;
    assert_eq!(back, v);
    Ok(())
}
