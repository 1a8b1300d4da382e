use crate::core::classify::{classify, Classification};
use crate::core::dimord::DimOrd;
use crate::core::graph_metrics::GraphMetrics;
use crate::errors::{NetworkError, Result};
use ndarray::{s, Array1, Array3, ArrayD, ArrayView2, ArrayView4, Axis, Ix4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Minimum number of (frequency, time) slices before the per-slice loop is
/// dispatched to rayon. Below this threshold, thread-dispatch overhead
/// exceeds parallelism gains.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_SLICES: usize = 8;

/// Connectivity metrics known to the dispatcher.
///
/// Parsing an unknown name fails with [`NetworkError::UnsupportedMetric`].
/// Requesting a listed metric that has no computation routine yet fails with
/// [`NetworkError::NotImplemented`] — a missing routine is an explicit error,
/// never a silently empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Assortativity,
    Betweenness,
    Charpath,
    ClusteringCoef,
    Degrees,
    Density,
    Distance,
    EdgeBetweenness,
    Efficiency,
    Transitivity,
}

impl Method {
    /// Every metric name the dispatcher recognizes.
    pub const ALL: [Method; 10] = [
        Method::Assortativity,
        Method::Betweenness,
        Method::Charpath,
        Method::ClusteringCoef,
        Method::Degrees,
        Method::Density,
        Method::Distance,
        Method::EdgeBetweenness,
        Method::Efficiency,
        Method::Transitivity,
    ];

    /// Canonical lowercase name, as accepted by `"...".parse::<Method>()`.
    pub fn name(self) -> &'static str {
        match self {
            Method::Assortativity => "assortativity",
            Method::Betweenness => "betweenness",
            Method::Charpath => "charpath",
            Method::ClusteringCoef => "clustering_coef",
            Method::Degrees => "degrees",
            Method::Density => "density",
            Method::Distance => "distance",
            Method::EdgeBetweenness => "edge_betweenness",
            Method::Efficiency => "efficiency",
            Method::Transitivity => "transitivity",
        }
    }

    /// Whether a computation routine exists for this metric.
    pub fn is_implemented(self) -> bool {
        matches!(self, Method::ClusteringCoef | Method::Degrees)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "assortativity" => Ok(Method::Assortativity),
            "betweenness" => Ok(Method::Betweenness),
            "charpath" => Ok(Method::Charpath),
            "clustering_coef" => Ok(Method::ClusteringCoef),
            "degrees" => Ok(Method::Degrees),
            "density" => Ok(Method::Density),
            "distance" => Ok(Method::Distance),
            "edge_betweenness" => Ok(Method::EdgeBetweenness),
            "efficiency" => Ok(Method::Efficiency),
            "transitivity" => Ok(Method::Transitivity),
            _ => Err(NetworkError::UnsupportedMetric(s.to_string())),
        }
    }
}

/// Compute `method` over a connectivity array, one slice at a time.
///
/// `input` must have rank 2 to 4 with the node pair on the two leading axes,
/// and `dimord` must describe exactly those axes. Missing frequency and time
/// axes are treated as singletons, the whole stack is classified once, and
/// the routine variant matching the `(is_binary, is_directed)` pair runs over
/// every (frequency, time) slice.
///
/// Returns the per-node values with the leading node axis collapsed — rank-r
/// input yields rank r-1 output — together with the collapsed descriptor.
pub fn dispatch<B: GraphMetrics>(
    input: &ArrayD<f64>,
    method: Method,
    dimord: &DimOrd,
) -> Result<(ArrayD<f64>, DimOrd)> {
    let rank = input.ndim();
    if !(2..=4).contains(&rank) {
        return Err(NetworkError::Config(format!(
            "connectivity array must have 2 to 4 axes, got {rank}"
        )));
    }
    if dimord.len() != rank {
        return Err(NetworkError::Config(format!(
            "dimord '{dimord}' describes {} axes but the connectivity array has {rank}",
            dimord.len()
        )));
    }
    if !dimord.is_node_pair() {
        return Err(NetworkError::Config(format!(
            "dimord '{dimord}' must start with a repeated node-axis token"
        )));
    }
    let shape = input.shape();
    if shape[0] != shape[1] {
        return Err(NetworkError::Config(format!(
            "node-pair axes must be square, got {}x{}",
            shape[0], shape[1]
        )));
    }

    let mut view = input.view();
    while view.ndim() < 4 {
        let trailing = view.ndim();
        view = view.insert_axis(Axis(trailing));
    }
    let stack = view
        .into_dimensionality::<Ix4>()
        .expect("view was just normalized to rank 4");

    let classification = classify(stack);
    debug!(
        "classified '{dimord}' stack as {} and {}",
        if classification.is_binary { "binary" } else { "weighted" },
        if classification.is_directed { "directed" } else { "undirected" },
    );

    let values = match method {
        Method::Degrees => degrees_stack::<B>(stack, classification),
        Method::ClusteringCoef => clustering_stack::<B>(stack, classification),
        other => return Err(NetworkError::NotImplemented(other)),
    };

    // Drop the singleton axes added during normalization; the node axis
    // itself has been collapsed by the routine.
    let mut values = values.into_dyn();
    while values.ndim() > rank - 1 {
        let trailing = values.ndim() - 1;
        values = values.remove_axis(Axis(trailing));
    }

    Ok((values, dimord.collapsed()))
}

/// Degrees is a binary-family metric: weighted stacks are binarized inside
/// the routine, with a single advisory per call.
fn degrees_stack<B: GraphMetrics>(
    stack: ArrayView4<f64>,
    classification: Classification,
) -> Array3<f64> {
    if !classification.is_binary {
        warn!("degrees of a weighted network: weights are ignored, any non-zero connection counts as one edge");
    }
    if classification.is_directed {
        // The record keeps the total (in + out) degree; the split is
        // available from the backend directly.
        per_slice(stack, |slice: ArrayView2<f64>| B::degrees_dir(slice).degree)
    } else {
        per_slice(stack, B::degrees_und)
    }
}

fn clustering_stack<B: GraphMetrics>(
    stack: ArrayView4<f64>,
    classification: Classification,
) -> Array3<f64> {
    let routine: fn(ArrayView2<f64>) -> Array1<f64> =
        match (classification.is_binary, classification.is_directed) {
            (true, false) => B::clustering_coef_bu,
            (true, true) => B::clustering_coef_bd,
            (false, false) => B::clustering_coef_wu,
            (false, true) => B::clustering_coef_wd,
        };
    per_slice(stack, routine)
}

/// Run one routine variant over every (frequency, time) slice and assemble
/// the `[N, F, T]` result. The variant is fixed by the caller; this loop only
/// applies it.
fn per_slice<F>(stack: ArrayView4<f64>, routine: F) -> Array3<f64>
where
    F: Fn(ArrayView2<f64>) -> Array1<f64> + Sync,
{
    let (n_node, _, n_freq, n_time) = stack.dim();
    let mut out = Array3::zeros((n_node, n_freq, n_time));

    #[cfg(feature = "parallel")]
    if n_freq * n_time >= MIN_PARALLEL_SLICES {
        per_slice_parallel(stack, &routine, &mut out);
    } else {
        per_slice_serial(stack, &routine, &mut out);
    }
    #[cfg(not(feature = "parallel"))]
    per_slice_serial(stack, &routine, &mut out);

    out
}

fn per_slice_serial<F>(stack: ArrayView4<f64>, routine: &F, out: &mut Array3<f64>)
where
    F: Fn(ArrayView2<f64>) -> Array1<f64>,
{
    let (_, _, n_freq, n_time) = stack.dim();
    for k in 0..n_freq {
        for m in 0..n_time {
            let values = routine(stack.slice(s![.., .., k, m]));
            out.slice_mut(s![.., k, m]).assign(&values);
        }
    }
}

/// Slices are independent, so they parallelize without coordination. Results
/// come back in index order and are written out sequentially.
#[cfg(feature = "parallel")]
fn per_slice_parallel<F>(stack: ArrayView4<f64>, routine: &F, out: &mut Array3<f64>)
where
    F: Fn(ArrayView2<f64>) -> Array1<f64> + Sync,
{
    use rayon::prelude::*;

    let (_, _, n_freq, n_time) = stack.dim();
    let columns: Vec<Array1<f64>> = (0..n_freq * n_time)
        .into_par_iter()
        .map(|idx| routine(stack.slice(s![.., .., idx / n_time, idx % n_time])))
        .collect();
    for (idx, values) in columns.into_iter().enumerate() {
        out.slice_mut(s![.., idx / n_time, idx % n_time])
            .assign(&values);
    }
}
