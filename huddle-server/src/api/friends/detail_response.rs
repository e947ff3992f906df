use serde::Serialize;

/// Human-readable confirmation for mutating friend endpoints
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}
