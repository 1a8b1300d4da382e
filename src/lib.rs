pub mod algorithms;
pub mod core;
pub mod errors;
pub mod metrics;

pub use crate::algorithms::dispatch::{dispatch, Method};
pub use crate::algorithms::network::network_analysis;
pub use crate::core::classify::{classify, Classification};
pub use crate::core::dimord::DimOrd;
pub use crate::core::graph_metrics::{DirectedDegrees, GraphMetrics};
pub use crate::core::record::{AnalysisConfig, ConnectivityData, NetworkRecord};
pub use crate::errors::{NetworkError, Result};
pub use crate::metrics::bct::BctMetrics;

/// High-level facade for network analysis, generic over the metric backend.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use netmetrics_rs::{AnalysisConfig, BctAnalyzer, ConnectivityData};
///
/// let adjacency = array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]].into_dyn();
/// let data = ConnectivityData::new("chan_chan".parse().unwrap())
///     .with_parameter("cohspctrm", adjacency);
/// let analyzer = BctAnalyzer::new(AnalysisConfig::new("degrees", "cohspctrm"));
/// let record = analyzer.analyze(&data).unwrap();
/// assert_eq!(record.value.as_slice().unwrap(), &[1.0, 2.0, 1.0]);
/// ```
pub struct NetworkAnalyzer<B: GraphMetrics> {
    config: AnalysisConfig,
    _backend: std::marker::PhantomData<B>,
}

impl<B: GraphMetrics> NetworkAnalyzer<B> {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            _backend: std::marker::PhantomData,
        }
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the configured analysis over a connectivity record.
    pub fn analyze(&self, data: &ConnectivityData) -> Result<NetworkRecord> {
        network_analysis::<B>(&self.config, data)
    }
}

/// Convenience type alias for the standard toolbox backend.
pub type BctAnalyzer = NetworkAnalyzer<BctMetrics>;
