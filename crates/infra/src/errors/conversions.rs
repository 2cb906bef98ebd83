//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use reqwest::StatusCode;
use serde::Deserialize;
use slotguard_domain::SlotGuardError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SlotGuardError);

impl From<InfraError> for SlotGuardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SlotGuardError> for InfraError {
    fn from(value: SlotGuardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSlotGuardError {
    fn into_slotguard(self) -> SlotGuardError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SlotGuardError */
/* -------------------------------------------------------------------------- */

impl IntoSlotGuardError for HttpError {
    fn into_slotguard(self) -> SlotGuardError {
        if self.is_timeout() {
            return SlotGuardError::provider(None, "HTTP request timed out");
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SlotGuardError::provider(None, "HTTP connection failure");
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        if self.is_decode() {
            return SlotGuardError::provider(None, format!("unreadable provider response: {self}"));
        }

        SlotGuardError::provider(None, self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_slotguard())
    }
}

/* -------------------------------------------------------------------------- */
/* HTTP status → SlotGuardError */
/* -------------------------------------------------------------------------- */

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Map a non-success status (and the provider's body, if read) to a domain
/// error. `404` and `410` both mean the event is gone.
pub fn status_error(status: StatusCode, body: Option<&str>) -> SlotGuardError {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let detail = body.and_then(provider_message);

    let message = match detail {
        Some(detail) => format!("HTTP {code} {reason}: {detail}"),
        None => format!("HTTP {code} {reason}"),
    };

    match code {
        404 | 410 => SlotGuardError::NotFound(message),
        _ => SlotGuardError::provider(Some(code), message),
    }
}

/// Google wraps failures as `{"error": {"message": …}}`; anything else is
/// passed through trimmed.
fn provider_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiErrorBody>(trimmed) {
        Ok(ApiErrorBody { error: ApiErrorDetail { message: Some(message) } }) => Some(message),
        _ => Some(trimmed.chars().take(500).collect()),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
