use crate::core::graph_metrics::{DirectedDegrees, GraphMetrics};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Graph-metric backend using the standard connectivity-toolbox formulations.
///
/// Clustering coefficients are computed in matrix-product form — powers of the
/// (symmetrized) adjacency count the closed triangles — so each routine costs
/// a small constant number of dense matrix multiplications per slice:
///
/// - binary undirected: Watts & Strogatz 1998
/// - binary directed: Fagiolo 2007
/// - weighted undirected: Onnela et al. 2005 (geometric mean of triangle weights)
/// - weighted directed: Fagiolo 2007
#[derive(Debug, Clone)]
pub struct BctMetrics;

fn nonzero_count(lane: ArrayView1<f64>) -> f64 {
    lane.iter().filter(|&&w| w != 0.0).count() as f64
}

impl GraphMetrics for BctMetrics {
    fn degrees_und(adjacency: ArrayView2<f64>) -> Array1<f64> {
        adjacency.map_axis(Axis(1), nonzero_count)
    }

    fn degrees_dir(adjacency: ArrayView2<f64>) -> DirectedDegrees {
        let in_degree = adjacency.map_axis(Axis(0), nonzero_count);
        let out_degree = adjacency.map_axis(Axis(1), nonzero_count);
        let degree = &in_degree + &out_degree;
        DirectedDegrees {
            in_degree,
            out_degree,
            degree,
        }
    }

    fn clustering_coef_bu(adjacency: ArrayView2<f64>) -> Array1<f64> {
        let n = adjacency.nrows();
        // diag(A^3) counts ordered pairs of connected neighbors.
        let a2 = adjacency.dot(&adjacency);
        let a3 = a2.dot(&adjacency);
        let mut coef = Array1::zeros(n);
        for u in 0..n {
            let k = adjacency.row(u).sum();
            if k >= 2.0 {
                coef[u] = a3[(u, u)] / (k * (k - 1.0));
            }
        }
        coef
    }

    fn clustering_coef_bd(adjacency: ArrayView2<f64>) -> Array1<f64> {
        let n = adjacency.nrows();
        let sym = &adjacency + &adjacency.t();
        let sym3 = sym.dot(&sym).dot(&sym);
        let a2 = adjacency.dot(&adjacency);
        let mut coef = Array1::zeros(n);
        for u in 0..n {
            // Directed triangles around u, in any edge orientation.
            let cyc3 = sym3[(u, u)] / 2.0;
            if cyc3 != 0.0 {
                let k = sym.row(u).sum();
                // False triangles formed by reciprocal edges are excluded.
                let possible = k * (k - 1.0) - 2.0 * a2[(u, u)];
                coef[u] = cyc3 / possible;
            }
        }
        coef
    }

    fn clustering_coef_wu(weights: ArrayView2<f64>) -> Array1<f64> {
        let n = weights.nrows();
        let roots = weights.mapv(f64::cbrt);
        let cyc3 = roots.dot(&roots).dot(&roots);
        let mut coef = Array1::zeros(n);
        for u in 0..n {
            let triangles = cyc3[(u, u)];
            if triangles != 0.0 {
                // Degree stays binary: weights only enter through the triangles.
                let k = nonzero_count(weights.row(u));
                coef[u] = triangles / (k * (k - 1.0));
            }
        }
        coef
    }

    fn clustering_coef_wd(weights: ArrayView2<f64>) -> Array1<f64> {
        let n = weights.nrows();
        let adjacency = weights.mapv(|w| if w != 0.0 { 1.0 } else { 0.0 });
        let sym_roots = weights.mapv(f64::cbrt) + weights.t().mapv(f64::cbrt);
        let sym3 = sym_roots.dot(&sym_roots).dot(&sym_roots);
        let a2 = adjacency.dot(&adjacency);
        let sym_adj = &adjacency + &adjacency.t();
        let mut coef = Array1::zeros(n);
        for u in 0..n {
            let cyc3 = sym3[(u, u)] / 2.0;
            if cyc3 != 0.0 {
                let k = sym_adj.row(u).sum();
                let possible = k * (k - 1.0) - 2.0 * a2[(u, u)];
                coef[u] = cyc3 / possible;
            }
        }
        coef
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn assert_close(actual: &Array1<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (u, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!((a - e).abs() < 1e-10, "node {u}: got {a}, expected {e}");
        }
    }

    #[test]
    fn test_degrees_und_path_graph() {
        let a = arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);
        assert_close(&BctMetrics::degrees_und(a.view()), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_degrees_und_counts_nonzero_weights() {
        let w = arr2(&[[0.0, 0.5, 0.0], [0.5, 0.0, 2.5], [0.0, 2.5, 0.0]]);
        assert_close(&BctMetrics::degrees_und(w.view()), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_degrees_dir_three_cycle() {
        // 0 -> 1 -> 2 -> 0
        let a = arr2(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let deg = BctMetrics::degrees_dir(a.view());
        assert_close(&deg.in_degree, &[1.0, 1.0, 1.0]);
        assert_close(&deg.out_degree, &[1.0, 1.0, 1.0]);
        assert_close(&deg.degree, &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_degrees_dir_chain() {
        // 0 -> 1 -> 2
        let a = arr2(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]);
        let deg = BctMetrics::degrees_dir(a.view());
        assert_close(&deg.in_degree, &[0.0, 1.0, 1.0]);
        assert_close(&deg.out_degree, &[1.0, 1.0, 0.0]);
        assert_close(&deg.degree, &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_clustering_bu_triangle_with_pendant() {
        // Triangle 0-1-2 plus pendant node 3 attached to 2.
        let a = arr2(&[
            [0.0, 1.0, 1.0, 0.0],
            [1.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        let c = BctMetrics::clustering_coef_bu(a.view());
        assert_close(&c, &[1.0, 1.0, 1.0 / 3.0, 0.0]);
    }

    #[test]
    fn test_clustering_bd_three_cycle() {
        // A directed 3-cycle has one of its two possible triangles: C = 1/2.
        let a = arr2(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let c = BctMetrics::clustering_coef_bd(a.view());
        assert_close(&c, &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_clustering_bd_reciprocal_pair_only() {
        // Two mutually connected nodes form no triangle.
        let a = arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let c = BctMetrics::clustering_coef_bd(a.view());
        assert_close(&c, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_clustering_wu_weighted_triangle() {
        // Triangle with weights 0.5, 0.5, 1.0 plus an isolated node.
        // Each node: cyc3 = 2 * cbrt(0.5 * 0.5 * 1.0), k = 2.
        let w = arr2(&[
            [0.0, 0.5, 0.5, 0.0],
            [0.5, 0.0, 1.0, 0.0],
            [0.5, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        let expected = 0.25_f64.cbrt();
        let c = BctMetrics::clustering_coef_wu(w.view());
        assert_close(&c, &[expected, expected, expected, 0.0]);
    }

    #[test]
    fn test_clustering_wu_uniform_complete_graph() {
        // Complete graph with uniform weight 0.5: cyc3 = 6 * 0.5, k = 3.
        let w = arr2(&[
            [0.0, 0.5, 0.5, 0.5],
            [0.5, 0.0, 0.5, 0.5],
            [0.5, 0.5, 0.0, 0.5],
            [0.5, 0.5, 0.5, 0.0],
        ]);
        let c = BctMetrics::clustering_coef_wu(w.view());
        assert_close(&c, &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_clustering_wd_weighted_three_cycle() {
        // C = cbrt(product of cycle weights) / 2 at every node.
        let w = arr2(&[[0.0, 0.8, 0.0], [0.0, 0.0, 0.5], [0.2, 0.0, 0.0]]);
        let expected = 0.08_f64.cbrt() / 2.0;
        let c = BctMetrics::clustering_coef_wd(w.view());
        assert_close(&c, &[expected, expected, expected]);
    }

    #[test]
    fn test_clustering_wd_matches_bd_on_binary_input() {
        let a = arr2(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let wd = BctMetrics::clustering_coef_wd(a.view());
        let bd = BctMetrics::clustering_coef_bd(a.view());
        assert_close(&wd, bd.as_slice().unwrap());
    }

    #[test]
    fn test_backend_debug_format() {
        let backend = BctMetrics;
        assert_eq!(format!("{:?}", backend.clone()), "BctMetrics");
    }
}
