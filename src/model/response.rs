//! Response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Finding;

/// Result of a full four-axis analysis.
///
/// All four keys are always present; an axis with no notable statements
/// carries an empty list, never a missing key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    #[schema(value_type = Vec<Object>)]
    pub cct: Vec<Finding>,
    #[schema(value_type = Vec<Object>)]
    pub sst: Vec<Finding>,
    #[schema(value_type = Vec<Object>)]
    pub empathy: Vec<Finding>,
    #[schema(value_type = Vec<Object>)]
    pub partnership: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}
