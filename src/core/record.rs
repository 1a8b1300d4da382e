use crate::algorithms::dispatch::Method;
use crate::core::dimord::DimOrd;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-facing configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Name of the metric to compute (e.g. `"degrees"`, `"clustering_coef"`).
    pub method: String,
    /// Name of the connectivity field in the data record to analyze
    /// (e.g. `"cohspctrm"`, `"plvspctrm"`).
    pub parameter: String,
}

impl AnalysisConfig {
    pub fn new(method: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            parameter: parameter.into(),
        }
    }
}

/// Channel-level connectivity record: named node-by-node connectivity arrays
/// plus descriptive side fields.
///
/// Connectivity arrays have rank 2 to 4 with the node pair on the two leading
/// axes, so shapes are `[N, N]`, `[N, N, F]`, or `[N, N, F, T]`. All arrays in
/// one record share the same `dimord`. Side fields are optional; whichever are
/// present are copied verbatim into the result record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityData {
    /// Axis descriptor shared by the connectivity arrays in this record.
    pub dimord: DimOrd,
    /// Connectivity arrays keyed by parameter name.
    pub parameters: HashMap<String, ArrayD<f64>>,
    /// Channel labels, one per node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<String>>,
    /// Frequency axis in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<Vec<f64>>,
    /// Time axis in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<f64>>,
    /// Gradiometer description, opaque to the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grad: Option<serde_json::Value>,
    /// Electrode description, opaque to the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elec: Option<serde_json::Value>,
    /// Degrees of freedom of the underlying connectivity estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dof: Option<ArrayD<f64>>,
}

impl ConnectivityData {
    /// Create an empty record with the given axis descriptor.
    pub fn new(dimord: DimOrd) -> Self {
        Self {
            dimord,
            parameters: HashMap::new(),
            label: None,
            freq: None,
            time: None,
            grad: None,
            elec: None,
            dof: None,
        }
    }

    /// Attach a named connectivity array.
    pub fn with_parameter(mut self, name: impl Into<String>, array: ArrayD<f64>) -> Self {
        self.parameters.insert(name.into(), array);
        self
    }

    pub fn with_label(mut self, label: Vec<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_freq(mut self, freq: Vec<f64>) -> Self {
        self.freq = Some(freq);
        self
    }

    pub fn with_time(mut self, time: Vec<f64>) -> Self {
        self.time = Some(time);
        self
    }
}

/// Result record of one analysis run.
///
/// `value` holds the per-node metric with the leading node axis collapsed:
/// input shape `[N, N, F, T]` yields `[N, F, T]`, and `dimord` drops its
/// first token to match. Side fields are carried over from the input record
/// exactly when present there, and absent otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// The metric that was computed.
    pub method: Method,
    /// Per-node metric values.
    pub value: ArrayD<f64>,
    /// Axis descriptor of `value`.
    pub dimord: DimOrd,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grad: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elec: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dof: Option<ArrayD<f64>>,
}

impl NetworkRecord {
    /// Canonical name of the computed metric, usable as a storage key.
    pub fn metric_name(&self) -> &'static str {
        self.method.name()
    }
}
