use serde::{Deserialize, Serialize};

/// Uniform response envelope of the booking backend.
///
/// Every JSON endpoint answers `{ success, data }` or
/// `{ success: false, error }`; the gateway client unwraps this before any
/// view code sees the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Unwrap into the payload or the backend's error message.
    ///
    /// A `success: true` envelope without data is treated as malformed.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "Malformed response: success without data".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Unknown backend error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_unwraps_to_data() {
        let env = ApiEnvelope::ok(42u32);
        assert_eq!(env.into_result(), Ok(42));
    }

    #[test]
    fn failed_envelope_carries_backend_message() {
        let env: ApiEnvelope<u32> = ApiEnvelope::fail("Slot no longer available");
        assert_eq!(env.into_result(), Err("Slot no longer available".to_string()));
    }

    #[test]
    fn success_without_data_is_malformed() {
        let env: ApiEnvelope<u32> = ApiEnvelope {
            success: true,
            data: None,
            error: None,
        };
        assert!(env.into_result().is_err());
    }

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{"success":true,"data":{"isAvailable":false}}"#;
        let env: ApiEnvelope<crate::usecases::u101_slot_booking::AvailabilityStatus> =
            serde_json::from_str(json).unwrap();
        assert!(!env.into_result().unwrap().is_available);
    }
}
