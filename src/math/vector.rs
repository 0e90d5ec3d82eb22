/// Dot product of two equal-length vectors.
///
/// # Panics
/// Panics if the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors are of incorrect sizes");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Index of the first maximum element. Ties go to the lowest index.
///
/// # Panics
/// Panics if `v` is empty.
pub fn argmax(v: &[f64]) -> usize {
    assert!(!v.is_empty(), "argmax of an empty vector");
    let mut best = 0;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > v[best] {
            best = i;
        }
    }
    best
}

/// Vector with `1.0` at `index` and `0.0` elsewhere.
///
/// # Panics
/// Panics if `index >= len`.
pub fn one_hot(index: usize, len: usize) -> Vec<f64> {
    assert!(index < len, "class index {} out of range for {} classes", index, len);
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    v
}
