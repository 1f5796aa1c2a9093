/// Cosine similarity between two equal-length vectors.
///
/// Returns exactly `0.0` when either vector has zero magnitude,
/// including the empty-vocabulary case, rather than dividing by zero.
/// Pure, deterministic, and commutative in its arguments.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_empty_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = [1.0, 2.0, 0.0];
        let b = [0.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_self_similarity_is_one() {
        let a = [3.0, 1.0, 2.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
    }

    #[test]
    fn test_known_value() {
        // dot = 2, |a| = 1, |b| = 2*sqrt(2)
        let score = cosine_similarity(&[0.0, 1.0], &[2.0, 2.0]);
        assert!((score - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
