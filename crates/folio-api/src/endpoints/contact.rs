// Contact relay endpoint
//
// POST only. Any other method gets 405. A body that is not a JSON object of
// string fields is treated the same as a submission with missing fields.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Method;
use axum::response::Json;
use folio_services::{ContactRequest, ServiceError};

use crate::common::{ApiError, ApiResult, ContactResponse, SendEmailRequest};
use crate::transports::http::server::ApiState;

/// Relay a contact form submission by email
///
/// Notifies the site owner and attempts a confirmation to the sender. The
/// confirmation is best-effort and only changes the success message.
#[utoipa::path(
    post,
    path = "/api/send-email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Admin notification delivered", body = ContactResponse),
        (status = 400, description = "Missing fields or invalid email address", body = ContactResponse),
        (status = 405, description = "Method not allowed", body = ContactResponse),
        (status = 500, description = "SMTP configuration incomplete or delivery failed", body = ContactResponse)
    ),
    tag = "contact"
)]
pub async fn send_email(
    State(state): State<ApiState>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let request: ContactRequest = match payload {
        Ok(Json(body)) => body.into(),
        Err(rejection) => {
            tracing::warn!(target: "folio-api", "Unreadable contact body: {}", rejection.body_text());
            return Err(ServiceError::MissingField { field: "body" }.into());
        }
    };

    let outcome = state.contact_service.relay(request).await?;

    Ok(Json(ContactResponse::success(outcome.message())))
}

/// Fallback for every method other than POST on the contact route
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::warn!(target: "folio-api", "Rejected {} on contact endpoint", method);
    ApiError::method_not_allowed()
}
