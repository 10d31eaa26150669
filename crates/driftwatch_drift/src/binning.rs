use ndarray::ArrayView1;
use num_traits::{Float, FromPrimitive};

/// Computes `bins + 1` quantile edges (0th through 100th percentile) of the
/// input using R-7 linear interpolation (Hyndman & Fan Type 7, the default in
/// both R and numpy), then drops duplicate edges produced by ties in the
/// underlying data. A zero-variance input collapses to a single edge, and an
/// empty input yields no edges.
pub fn quantile_edges<F>(values: &ArrayView1<F>, bins: usize) -> Vec<F>
where
    F: Float + FromPrimitive,
{
    if values.is_empty() {
        return Vec::new();
    }

    let mut data: Vec<F> = values.to_vec();
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = data.len();
    let mut edges = Vec::with_capacity(bins + 1);

    for i in 0..=bins {
        let p = i as f64 / bins as f64;

        // R-7: h = (n - 1) * p, linear interpolation between floor(h) and
        // floor(h) + 1
        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let frac = F::from_f64(h - lo as f64).unwrap_or_else(F::zero);

        let edge = data[lo] + frac * (data[hi] - data[lo]);
        edges.push(edge);
    }

    edges.dedup_by(|a, b| a == b);
    edges
}

/// Histograms values into the given edges with numpy semantics: bins are
/// left-closed, the last bin is also right-closed, and values outside the
/// edge span are not counted. A single-edge (degenerate) input produces one
/// bin holding the values equal to that edge.
pub fn histogram_counts(values: &ArrayView1<f64>, edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        let edge = edges[0];
        return vec![values.iter().filter(|&&v| v == edge).count()];
    }

    let mut counts = vec![0usize; edges.len() - 1];
    let last_bin = counts.len() - 1;
    let upper = edges[edges.len() - 1];

    for &value in values.iter() {
        if value < edges[0] || value > upper {
            continue;
        }

        let idx = edges.partition_point(|&e| e <= value);
        let bin = if idx == 0 { 0 } else { (idx - 1).min(last_bin) };
        counts[bin] += 1;
    }

    counts
}
