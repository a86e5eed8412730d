use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error returned by the backend as `{"error": "..."}` with a non-success status
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub public_reports: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            public_reports: false,
            theme: default_theme(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_role() -> String {
    "user".to_string()
}

/// User record as returned by `/api/auth/*` (password hash already stripped)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Partial profile for `PUT /api/auth/profile`
///
/// Only the fields the backend accepts for update exist here; `None` fields
/// are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.organization.is_none()
            && self.profile_picture.is_none()
            && self.preferences.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub organization: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    // Route handlers write `error`; the JWT layer writes `msg`
    #[serde(alias = "msg")]
    error: String,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub mongodb: bool,
    #[serde(default)]
    pub model_manager: bool,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Clone)]
pub struct DasperClient {
    base_url: String,
    client: Client,
}

impl DasperClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into `ApiError`, keeping the backend's message
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check(response).await?;

        let health: HealthStatus = response
            .json()
            .await
            .context("Failed to parse health response")?;

        Ok(health)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = Self::check(response).await?;

        let auth: AuthResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;

        Ok(auth)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let url = format!("{}/api/auth/register", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        let response = Self::check(response).await?;

        let auth: AuthResponse = response
            .json()
            .await
            .context("Failed to parse register response")?;

        Ok(auth)
    }

    pub async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        let url = format!("{}/api/auth/profile", self.base_url);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let response = Self::check(response).await?;

        let profile: ProfileResponse = response
            .json()
            .await
            .context("Failed to parse profile response")?;

        Ok(profile.user)
    }

    /// The backend only acknowledges the update; callers re-fetch the profile
    pub async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<()> {
        let url = format!("{}/api/auth/profile", self.base_url);
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_from_login_payload() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "email": "ana@example.com",
            "full_name": "Ana Reyes",
            "profile_picture": "",
            "phone": "",
            "organization": "NDRRMC",
            "role": "user",
            "created_at": "2024-05-01T12:34:56.123456",
            "last_login": null,
            "is_active": true,
            "email_verified": false,
            "preferences": {"notifications": true, "public_reports": false, "theme": "dark"}
        }"#;

        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "65f0c0ffee");
        assert_eq!(user.full_name, "Ana Reyes");
        assert_eq!(user.organization, "NDRRMC");
        assert!(user.last_login.is_none());
        assert!(user.preferences.notifications);
    }

    #[test]
    fn test_user_profile_missing_optional_fields() {
        let user: UserProfile = serde_json::from_str(r#"{"email": "x@y.io"}"#).unwrap();
        assert_eq!(user.role, "user");
        assert_eq!(user.preferences, Preferences::default());
        assert!(user.full_name.is_empty());
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            phone: Some("0917".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"phone": "0917"}));
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_register_request_omits_empty_optionals() {
        let request = RegisterRequest {
            email: "a@b.co".to_string(),
            password: "secret1".to_string(),
            full_name: "A B".to_string(),
            phone: String::new(),
            organization: "Red Cross".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("phone").is_none());
        assert_eq!(body["organization"], "Red Cross");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = DasperClient::new("http://10.0.0.2:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.2:5000");
    }
}
