use crate::{
    app_lib::{AppError, post_json},
    features::leads::types::LeadRequest,
};

/// Store a marketing contact. The response body is not needed.
pub async fn submit_lead(request: &LeadRequest) -> Result<(), AppError> {
    post_json("/api/leads", request).await
}
