#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod router;
pub mod serialize;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// load the fixed demo dataset on startup
    pub seed_demo_data: bool,
    /// whether the health endpoint is available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
}
