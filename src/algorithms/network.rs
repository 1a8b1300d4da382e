use crate::algorithms::dispatch::{dispatch, Method};
use crate::core::graph_metrics::GraphMetrics;
use crate::core::record::{AnalysisConfig, ConnectivityData, NetworkRecord};
use crate::errors::{NetworkError, Result};
use tracing::info;

/// Run one network analysis: look up the configured connectivity parameter in
/// the data record, dispatch the metric over it, and assemble the result.
///
/// The configuration is checked before the data: an unknown metric name is
/// reported as [`NetworkError::UnsupportedMetric`] even when the data record
/// is itself malformed. Descriptive side fields (`label`, `freq`, `time`,
/// `grad`, `elec`, `dof`) are copied into the result exactly when present in
/// the input, and stay absent otherwise.
pub fn network_analysis<B: GraphMetrics>(
    config: &AnalysisConfig,
    data: &ConnectivityData,
) -> Result<NetworkRecord> {
    if config.method.is_empty() {
        return Err(NetworkError::Config(
            "config.method must name the metric to compute".to_string(),
        ));
    }
    if config.parameter.is_empty() {
        return Err(NetworkError::Config(
            "config.parameter must name the connectivity field to analyze".to_string(),
        ));
    }

    let method: Method = config.method.parse()?;
    let input = data.parameters.get(&config.parameter).ok_or_else(|| {
        NetworkError::Config(format!(
            "parameter '{}' is not present in the data record",
            config.parameter
        ))
    })?;

    info!("computing {method} over parameter '{}'", config.parameter);
    let (value, dimord) = dispatch::<B>(input, method, &data.dimord)?;

    Ok(NetworkRecord {
        method,
        value,
        dimord,
        label: data.label.clone(),
        freq: data.freq.clone(),
        time: data.time.clone(),
        grad: data.grad.clone(),
        elec: data.elec.clone(),
        dof: data.dof.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::bct::BctMetrics;
    use ndarray::arr2;
    use serde_json::json;

    fn path_graph_data() -> ConnectivityData {
        let adjacency = arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]]).into_dyn();
        ConnectivityData::new("chan_chan".parse().unwrap()).with_parameter("cohspctrm", adjacency)
    }

    #[test]
    fn test_degrees_end_to_end() {
        let config = AnalysisConfig::new("degrees", "cohspctrm");
        let record = network_analysis::<BctMetrics>(&config, &path_graph_data()).unwrap();
        assert_eq!(record.metric_name(), "degrees");
        assert_eq!(record.dimord.to_string(), "chan");
        assert_eq!(record.value.as_slice().unwrap(), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_side_fields_copied_when_present() {
        let mut data = path_graph_data()
            .with_label(vec!["Fz".into(), "Cz".into(), "Pz".into()])
            .with_freq(vec![10.0]);
        data.grad = Some(json!({"type": "ctf275"}));

        let config = AnalysisConfig::new("degrees", "cohspctrm");
        let record = network_analysis::<BctMetrics>(&config, &data).unwrap();
        assert_eq!(record.label.as_deref().unwrap(), &["Fz", "Cz", "Pz"]);
        assert_eq!(record.freq.as_deref().unwrap(), &[10.0]);
        assert_eq!(record.grad.as_ref().unwrap()["type"], "ctf275");
    }

    #[test]
    fn test_side_fields_absent_when_absent() {
        let config = AnalysisConfig::new("degrees", "cohspctrm");
        let record = network_analysis::<BctMetrics>(&config, &path_graph_data()).unwrap();
        assert!(record.label.is_none());
        assert!(record.freq.is_none());
        assert!(record.time.is_none());
        assert!(record.grad.is_none());
        assert!(record.elec.is_none());
        assert!(record.dof.is_none());
    }

    #[test]
    fn test_missing_parameter_is_config_error() {
        let config = AnalysisConfig::new("degrees", "plvspctrm");
        let result = network_analysis::<BctMetrics>(&config, &path_graph_data());
        assert!(matches!(result, Err(NetworkError::Config(_))));
    }

    #[test]
    fn test_empty_config_fields_rejected() {
        let data = path_graph_data();
        let no_method = AnalysisConfig::new("", "cohspctrm");
        let no_parameter = AnalysisConfig::new("degrees", "");
        assert!(matches!(
            network_analysis::<BctMetrics>(&no_method, &data),
            Err(NetworkError::Config(_))
        ));
        assert!(matches!(
            network_analysis::<BctMetrics>(&no_parameter, &data),
            Err(NetworkError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_method_reported_before_bad_data() {
        // Config checks come first: the metric name error wins even though
        // the array is not square.
        let bad = ConnectivityData::new("chan_chan".parse().unwrap())
            .with_parameter("cohspctrm", arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]).into_dyn());
        let config = AnalysisConfig::new("participation", "cohspctrm");
        assert!(matches!(
            network_analysis::<BctMetrics>(&config, &bad),
            Err(NetworkError::UnsupportedMetric(name)) if name == "participation"
        ));
    }
}
