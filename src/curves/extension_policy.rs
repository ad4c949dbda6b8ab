use serde::{Deserialize, Serialize};

/// How a graph curve continues past its domain when an intersection query
/// asks for extended geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionPolicy {
    /// The curve ends at its domain. Probes outside it miss.
    #[default]
    None,
    /// Hold the height of the nearest endpoint.
    Clamp,
    /// Continue along the tangent at the nearest endpoint.
    Linear,
}

impl ExtensionPolicy {
    /// Height of the extension at `x`, continuing from the endpoint `anchor`
    /// where the curve has slope `slope`.
    pub fn extend(&self, anchor: (f64, f64), slope: f64, x: f64) -> Option<f64> {
        let (anchor_x, anchor_y) = anchor;
        match self {
            ExtensionPolicy::None => None,
            ExtensionPolicy::Clamp => Some(anchor_y),
            ExtensionPolicy::Linear => Some(anchor_y + slope * (x - anchor_x)),
        }
    }
}
