//! Vector arithmetic oracles over a 100-element dimension.

use lineal::prelude::*;

const DIM: usize = 100;

#[test]
fn equality_distinguishes_fills() {
    let xs = Vector::<f32, DIM>::full(1.0);
    let ys = Vector::<f32, DIM>::full(1.0);
    let zs = Vector::<f32, DIM>::full(2.0);

    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
    assert_ne!(ys, zs);
}

#[test]
fn addition_oracle() {
    let xs = Vector::<f32, DIM>::full(1.0);
    let ys = Vector::<f32, DIM>::full(2.0);

    assert_eq!(xs + ys, Vector::full(3.0));
}

#[test]
fn addition_is_commutative() {
    let xs = Vector::<f32, DIM>::from_fn(|i| i as f32);
    let ys = Vector::<f32, DIM>::from_fn(|i| (DIM - i) as f32);

    assert_eq!(xs + ys, ys + xs);
}

#[test]
fn zero_is_the_additive_identity() {
    let xs = Vector::<f64, DIM>::from_fn(|i| (i as f64) * 0.5 - 10.0);

    assert_eq!(xs + Vector::zeros(), xs);
    assert_eq!(Vector::zeros() + xs, xs);
}

#[test]
fn subtraction_undoes_addition() {
    let xs = Vector::<f64, DIM>::from_fn(|i| i as f64);
    let ys = Vector::<f64, DIM>::full(3.25);

    assert_eq!((xs + ys) - ys, xs);
}

#[test]
fn dot_is_commutative() {
    let xs = Vector::<f64, DIM>::from_fn(|i| (i as f64) * 0.25);
    let ys = Vector::<f64, DIM>::from_fn(|i| 50.0 - i as f64);

    assert_eq!(xs.dot(&ys), ys.dot(&xs));
}

#[test]
fn dot_scales_with_either_operand() {
    let xs = Vector::<f32, DIM>::full(1.0);
    let ys = Vector::<f32, DIM>::full(2.0);

    assert_eq!(xs.dot(&(ys * 2.0)), 2.0 * xs.dot(&ys));
    assert_eq!((xs * 2.0).dot(&ys), 2.0 * xs.dot(&ys));
}

#[test]
fn scalar_multiplication_commutes() {
    let xs = Vector::<f32, DIM>::from_fn(|i| i as f32 - 50.0);

    assert_eq!(xs * 3.0, 3.0 * xs);
    // Operands survive the products untouched.
    assert_eq!(xs[10], -40.0);
}
