use super::frame::FrameIndex;
use serde::Serialize;

/// Buried surface area of one frame, in square angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaSample {
    pub frame: FrameIndex,
    #[serde(rename = "totalBSA")]
    pub total_bsa: f64,
    #[serde(rename = "polarBSA")]
    pub polar_bsa: f64,
    #[serde(rename = "nonPolarBSA")]
    pub non_polar_bsa: f64,
}
