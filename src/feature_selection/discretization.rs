/// Attribute values mapped to bin codes in `0..cardinality`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteColumn {
    pub codes: Vec<usize>,
    pub cardinality: usize,
}

/// Supervised discretization of one attribute column.
///
/// Nominal attributes (`nominal_values = Some(m)`) keep their label indices.
/// Numeric attributes are cut with [`mdl_cut_points`] on the instance
/// `weights`. Missing or invalid values always land in a dedicated last bin.
pub fn discretize_attribute(
    values: &[f64],
    nominal_values: Option<usize>,
    classes: &[usize],
    weights: &[f64],
    num_classes: usize,
) -> DiscreteColumn {
    match nominal_values {
        Some(m) => DiscreteColumn {
            codes: values
                .iter()
                .map(|&v| {
                    if v.is_nan() || v < 0.0 || (v as usize) >= m {
                        m
                    } else {
                        v as usize
                    }
                })
                .collect(),
            cardinality: m + 1,
        },
        None => {
            let points: Vec<(f64, usize, f64)> = values
                .iter()
                .zip(classes)
                .zip(weights)
                .filter(|((v, _), _)| v.is_finite())
                .map(|((&v, &c), &w)| (v, c, w))
                .collect();
            let cuts = mdl_cut_points(&points, num_classes);
            let missing_bin = cuts.len() + 1;
            DiscreteColumn {
                codes: values
                    .iter()
                    .map(|&v| {
                        if v.is_finite() {
                            cuts.partition_point(|&c| c < v)
                        } else {
                            missing_bin
                        }
                    })
                    .collect(),
                cardinality: missing_bin + 1,
            }
        }
    }
}

/// Fayyad & Irani entropy-based cut points, accepted by the MDL criterion.
///
/// `points` holds `(value, class, weight)` with `class < num_classes`. Class
/// counts and the instance total are weighted; non-finite values and
/// non-positive weights are ignored. Returned cut points are ascending
/// midpoints between adjacent distinct values.
pub fn mdl_cut_points(points: &[(f64, usize, f64)], num_classes: usize) -> Vec<f64> {
    let mut sorted: Vec<(f64, usize, f64)> = points
        .iter()
        .copied()
        .filter(|&(v, c, w)| v.is_finite() && c < num_classes && w.is_finite() && w > 0.0)
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cuts = Vec::new();
    split_recursively(&sorted, num_classes, &mut cuts);
    cuts.sort_by(f64::total_cmp);
    cuts
}

fn class_counts(slice: &[(f64, usize, f64)], num_classes: usize) -> Vec<f64> {
    let mut counts = vec![0.0; num_classes];
    for &(_, c, w) in slice {
        counts[c] += w;
    }
    counts
}

fn classes_present(counts: &[f64]) -> i32 {
    counts.iter().filter(|&&c| c > 0.0).count() as i32
}

fn split_recursively(sorted: &[(f64, usize, f64)], num_classes: usize, cuts: &mut Vec<f64>) {
    if sorted.len() < 2 {
        return;
    }

    let total = class_counts(sorted, num_classes);
    let n: f64 = total.iter().sum();
    if n <= 1.0 {
        return;
    }
    let prior_entropy = super::entropy(&total);

    let mut left = vec![0.0; num_classes];
    let mut left_weight = 0.0;
    let mut best: Option<(usize, f64)> = None;
    for i in 1..sorted.len() {
        let (_, class, weight) = sorted[i - 1];
        left[class] += weight;
        left_weight += weight;
        if sorted[i].0 <= sorted[i - 1].0 {
            continue;
        }
        let right: Vec<f64> = total.iter().zip(&left).map(|(t, l)| t - l).collect();
        let split_entropy = (left_weight * super::entropy(&left)
            + (n - left_weight) * super::entropy(&right))
            / n;
        if best.is_none_or(|(_, e)| split_entropy < e) {
            best = Some((i, split_entropy));
        }
    }

    let Some((pos, split_entropy)) = best else {
        return;
    };

    let (lhs, rhs) = sorted.split_at(pos);
    let lhs_counts = class_counts(lhs, num_classes);
    let rhs_counts = class_counts(rhs, num_classes);

    let k = classes_present(&total);
    let k1 = classes_present(&lhs_counts);
    let k2 = classes_present(&rhs_counts);
    let delta = (3f64.powi(k) - 2.0).log2()
        - (k as f64 * prior_entropy
            - k1 as f64 * super::entropy(&lhs_counts)
            - k2 as f64 * super::entropy(&rhs_counts));
    let gain = prior_entropy - split_entropy;
    let min_gain = ((n - 1.0).log2() + delta) / n;
    if gain <= min_gain {
        return;
    }

    split_recursively(lhs, num_classes, cuts);
    cuts.push((sorted[pos - 1].0 + sorted[pos].0) / 2.0);
    split_recursively(rhs, num_classes, cuts);
}
