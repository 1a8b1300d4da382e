use crate::errors::NetworkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimension descriptor for a connectivity array: one token per axis,
/// underscore-separated in its textual form (e.g. `"chan_chan_freq_time"`).
///
/// The token vocabulary is open — node axes may be labelled `chan`, `pos`,
/// `vertex`, or anything else — the only structural requirement (checked by
/// the dispatcher, not here) is that the first two tokens are equal.
///
/// # Examples
///
/// ```
/// use netmetrics_rs::DimOrd;
///
/// let dimord: DimOrd = "chan_chan_freq".parse().unwrap();
/// assert_eq!(dimord.len(), 3);
/// assert!(dimord.is_node_pair());
/// assert_eq!(dimord.collapsed().to_string(), "chan_freq");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DimOrd(Vec<String>);

impl DimOrd {
    /// The per-axis tokens, outermost first.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of axes described.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first two axes carry the same token (a node-by-node matrix).
    pub fn is_node_pair(&self) -> bool {
        self.0.len() >= 2 && self.0[0] == self.0[1]
    }

    /// The descriptor of a per-node result: the leading axis token dropped.
    ///
    /// `"chan_chan_freq"` collapses to `"chan_freq"`. Collapsing an empty
    /// descriptor yields an empty descriptor.
    pub fn collapsed(&self) -> DimOrd {
        DimOrd(self.0.get(1..).unwrap_or_default().to_vec())
    }
}

impl FromStr for DimOrd {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NetworkError::Config("dimord must not be empty".to_string()));
        }
        let tokens: Vec<String> = s.split('_').map(String::from).collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(NetworkError::Config(format!(
                "malformed dimord '{s}': empty axis token"
            )));
        }
        Ok(DimOrd(tokens))
    }
}

impl fmt::Display for DimOrd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("_"))
    }
}

impl TryFrom<String> for DimOrd {
    type Error = NetworkError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DimOrd> for String {
    fn from(dimord: DimOrd) -> String {
        dimord.to_string()
    }
}
