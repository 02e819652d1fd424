use serde::{Deserialize, Serialize};

/// Envelope shared by every successful response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self { success: true, message: None, data: Some(data), id: None }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, id: None }
    }

    pub fn created(id: i64, message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, id: Some(id) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::UserProfile;

    #[test]
    fn test_envelope_without_data_deserializes() {
        let body: ApiResponse<UserProfile> =
            serde_json::from_str(r#"{"success": true, "message": "Division created successfully", "id": 3}"#).unwrap();
        assert!(body.success);
        assert!(body.data.is_none());
        assert_eq!(body.id, Some(3));

        let body: ApiResponse<UserProfile> = serde_json::from_str(
            r#"{"success": true, "data": {"id": 1, "username": "admin", "email": "admin@hrd.local", "role": "admin"}}"#,
        ).unwrap();
        assert_eq!(body.data.map(|p| p.username), Some("admin".to_string()));
        assert!(body.message.is_none());
    }
}
