use crate::feature_selection::DiscreteColumn;

/// Shannon entropy, in bits, of a weighted histogram.
pub fn entropy(counts: &[f64]) -> f64 {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / total;
            -p * p.log2()
        })
        .sum()
}

/// `2 * IG(X; Y) / (H(X) + H(Y))`, clamped to `[0, 1]`. Zero when both
/// columns are constant.
pub fn symmetrical_uncertainty(x: &DiscreteColumn, y: &DiscreteColumn, weights: &[f64]) -> f64 {
    let mut joint = vec![0.0; x.cardinality * y.cardinality];
    let mut px = vec![0.0; x.cardinality];
    let mut py = vec![0.0; y.cardinality];

    for ((&a, &b), &w) in x.codes.iter().zip(&y.codes).zip(weights) {
        joint[a * y.cardinality + b] += w;
        px[a] += w;
        py[b] += w;
    }

    let hx = entropy(&px);
    let hy = entropy(&py);
    let denom = hx + hy;
    if denom <= 0.0 {
        return 0.0;
    }
    let info_gain = hx + hy - entropy(&joint);
    (2.0 * info_gain / denom).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(codes: &[usize], cardinality: usize) -> DiscreteColumn {
        DiscreteColumn {
            codes: codes.to_vec(),
            cardinality,
        }
    }

    #[test]
    fn entropy_of_fair_coin_is_one_bit() {
        assert!((entropy(&[5.0, 5.0]) - 1.0).abs() < 1e-12);
        assert_eq!(entropy(&[3.0, 0.0]), 0.0);
        assert_eq!(entropy(&[]), 0.0);
    }

    #[test]
    fn identical_columns_have_unit_su() {
        let x = column(&[0, 1, 0, 1], 2);
        let w = [1.0; 4];
        assert!((symmetrical_uncertainty(&x, &x, &w) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn independent_columns_have_zero_su() {
        let x = column(&[0, 0, 1, 1], 2);
        let y = column(&[0, 1, 0, 1], 2);
        let w = [1.0; 4];
        assert!(symmetrical_uncertainty(&x, &y, &w).abs() < 1e-12);
    }

    #[test]
    fn constant_columns_have_zero_su() {
        let x = column(&[0, 0, 0], 1);
        let w = [1.0; 3];
        assert_eq!(symmetrical_uncertainty(&x, &x, &w), 0.0);
    }

    #[test]
    fn su_is_symmetric() {
        let x = column(&[0, 1, 2, 2, 1, 0], 3);
        let y = column(&[0, 1, 1, 1, 0, 0], 2);
        let w = [1.0, 2.0, 1.0, 1.0, 0.5, 1.0];
        let xy = symmetrical_uncertainty(&x, &y, &w);
        let yx = symmetrical_uncertainty(&y, &x, &w);
        assert!((xy - yx).abs() < 1e-12);
        assert!(xy > 0.0 && xy < 1.0);
    }
}
