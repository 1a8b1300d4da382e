//! Basic network analysis with netmetrics-rs.
//!
//! Computes node degrees and clustering coefficients over a small weighted
//! coherence matrix. Degrees is a binary-family metric, so running it on
//! weighted input logs a one-time advisory that the weights are ignored.
//!
//! Run with: cargo run --release --example basic_network

use ndarray::array;
use netmetrics_rs::{AnalysisConfig, BctAnalyzer, ConnectivityData};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter("netmetrics_rs=debug")
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let labels = ["Fz", "Cz", "Pz", "Oz"];
    // Symmetric weighted coherence with a zero diagonal.
    let coherence = array![
        [0.00, 0.82, 0.45, 0.10],
        [0.82, 0.00, 0.74, 0.31],
        [0.45, 0.74, 0.00, 0.55],
        [0.10, 0.31, 0.55, 0.00],
    ];

    let data = ConnectivityData::new("chan_chan".parse().unwrap())
        .with_parameter("cohspctrm", coherence.into_dyn())
        .with_label(labels.iter().map(|l| l.to_string()).collect());

    let degrees = BctAnalyzer::new(AnalysisConfig::new("degrees", "cohspctrm"))
        .analyze(&data)
        .unwrap();
    let clustering = BctAnalyzer::new(AnalysisConfig::new("clustering_coef", "cohspctrm"))
        .analyze(&data)
        .unwrap();

    println!("\noutput dimord: {}", degrees.dimord);
    println!("\nchannel   degree   clustering");
    for (i, label) in labels.iter().enumerate() {
        println!(
            "{label:>7}   {:>6.0}   {:>10.4}",
            degrees.value[[i]],
            clustering.value[[i]]
        );
    }
}
