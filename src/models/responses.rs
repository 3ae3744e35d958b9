use serde::{Deserialize, Serialize};
use crate::models::domain::LenderMatch;

/// Response for the match lenders endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLendersResponse {
    #[serde(rename = "eligibleLenders")]
    pub eligible_lenders: Vec<LenderMatch>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub lenders: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
