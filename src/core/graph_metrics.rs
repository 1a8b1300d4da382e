use ndarray::{Array1, ArrayView2};

/// Per-node degree triple for a directed graph.
///
/// `degree` is always `in_degree + out_degree`; reciprocal connections
/// therefore count twice, matching the usual directed-degree convention.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedDegrees {
    pub in_degree: Array1<f64>,
    pub out_degree: Array1<f64>,
    pub degree: Array1<f64>,
}

/// Trait for graph-metric backends used in network analysis.
///
/// Designed for static polymorphism: the dispatcher is generic over
/// `B: GraphMetrics`, so the backend routine is resolved at compile time and
/// monomorphized into the per-slice loop. Swapping in an instrumented or
/// alternative backend is a type parameter change, not a runtime lookup.
///
/// Every routine takes one square node-by-node matrix and is invoked once per
/// (frequency, time) slice of the input. All routines assume a zero diagonal
/// (no self-connections). The `_bu`/`_bd` variants additionally assume binary
/// entries, and the `_wu`/`_wd` variants assume non-negative weights; the
/// dispatcher guarantees the former via classification and the caller is
/// responsible for the latter.
pub trait GraphMetrics: Clone + Send + Sync {
    /// Degree of each node in an undirected binary graph.
    ///
    /// Weighted input is implicitly binarized: any non-zero entry counts as
    /// one connection.
    fn degrees_und(adjacency: ArrayView2<f64>) -> Array1<f64>;

    /// In-, out-, and total degree of each node in a directed graph.
    ///
    /// Weighted input is implicitly binarized, as in [`GraphMetrics::degrees_und`].
    fn degrees_dir(adjacency: ArrayView2<f64>) -> DirectedDegrees;

    /// Clustering coefficient per node, binary undirected graph
    /// (Watts & Strogatz 1998).
    fn clustering_coef_bu(adjacency: ArrayView2<f64>) -> Array1<f64>;

    /// Clustering coefficient per node, binary directed graph
    /// (Fagiolo 2007).
    fn clustering_coef_bd(adjacency: ArrayView2<f64>) -> Array1<f64>;

    /// Clustering coefficient per node, weighted undirected graph
    /// (Onnela et al. 2005).
    fn clustering_coef_wu(weights: ArrayView2<f64>) -> Array1<f64>;

    /// Clustering coefficient per node, weighted directed graph
    /// (Fagiolo 2007).
    fn clustering_coef_wd(weights: ArrayView2<f64>) -> Array1<f64>;
}
