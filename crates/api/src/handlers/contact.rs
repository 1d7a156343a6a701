//! Handler for the public contact form.

use axum::http::StatusCode;
use axum::Json;
use creative_hub_core::contact::ContactEnquiry;
use creative_hub_core::error::CoreError;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::SuccessResponse;

/// POST /api/v1/contact
///
/// Enquiries are validated and logged; they are not persisted.
pub async fn submit(
    ApiJson(enquiry): ApiJson<ContactEnquiry>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    enquiry.check().map_err(CoreError::InvalidFields)?;

    tracing::info!(
        email = %enquiry.email,
        name = %format!("{} {}", enquiry.first_name, enquiry.last_name),
        "Contact enquiry received"
    );

    Ok((StatusCode::ACCEPTED, Json(SuccessResponse::ok())))
}
