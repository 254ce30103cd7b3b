/// Cosine similarity between two capability vectors.
///
/// Computed over the first `min(a.len(), b.len())` elements. Returns 0.0 when
/// either vector is empty or has zero norm, so the result is never NaN. For
/// non-negative score vectors the result lies in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use pair_solver::matching::similarity::cosine;
///
/// assert!((cosine(&[3.0, 4.0], &[6.0, 8.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine(&[], &[1.0, 2.0]), 0.0);
/// assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
/// ```
#[must_use]
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_cosine_known_values() {
        let a = [80.0, 90.0];
        let b = [70.0, 95.0];
        let c = [40.0, 50.0];

        assert!((cosine(&a, &b) - 0.9958).abs() < TOLERANCE);
        assert!((cosine(&a, &c) - 0.9986).abs() < TOLERANCE);
        assert!((cosine(&b, &c) - 0.9992).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let vectors: [&[f64]; 4] = [&[1.0, 2.0, 3.0], &[9.0, 0.5, 4.0], &[0.0, 0.0, 0.0], &[]];
        for a in vectors {
            for b in vectors {
                assert!((cosine(a, b) - cosine(b, a)).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_self_similarity_is_one() {
        let v = [12.5, 77.0, 0.3, 99.9];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_non_negative_vectors() {
        assert!(cosine(&[1.0, 0.0], &[0.0, 5.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_range_for_non_negative_vectors() {
        let vectors = [
            [10.0, 20.0, 30.0],
            [0.0, 100.0, 0.0],
            [55.0, 55.0, 55.0],
            [99.0, 1.0, 0.0],
        ];
        for a in &vectors {
            for b in &vectors {
                let sim = cosine(a, b);
                assert!((0.0..=1.0 + 1e-12).contains(&sim), "out of range: {sim}");
            }
        }
    }

    #[test]
    fn test_degenerate_inputs_return_zero() {
        assert!(cosine(&[], &[]).abs() < f64::EPSILON);
        assert!(cosine(&[], &[1.0]).abs() < f64::EPSILON);
        assert!(cosine(&[0.0, 0.0], &[0.0, 0.0]).abs() < f64::EPSILON);
        assert!(!cosine(&[0.0], &[3.0]).is_nan());
    }

    #[test]
    fn test_length_mismatch_uses_shorter_prefix() {
        // Only the first two elements of the longer vector are compared
        assert!((cosine(&[1.0, 2.0], &[2.0, 4.0, 1000.0]) - 1.0).abs() < 1e-12);
    }
}
