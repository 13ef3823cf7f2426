use serde::{Deserialize, Serialize};
use strum::Display;

/// WGS84 point attached to sites and field reports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum EcosystemType {
    Mangrove,
    Seagrass,
    SaltMarsh,
}
