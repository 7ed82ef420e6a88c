use serde::{Deserialize, Serialize};

/// The authenticated platform operator.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

/// Response of GET /auth/me.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Response of POST /auth/signin. The session itself arrives as a cookie;
/// the identity is re-fetched by the auth bootstrap after navigation, so
/// only the second-factor flag matters here.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    #[serde(default)]
    pub two_factor_required: bool,
}

/// Sign-in runs in two phases: credentials first, then the OTP challenge
/// when the backend answers with `twoFactorRequired`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SigninPhase {
    Credentials,
    Otp,
}

impl SigninPhase {
    /// Phase after a successful credentials submission.
    pub fn after_credentials(two_factor_required: bool) -> Self {
        if two_factor_required {
            SigninPhase::Otp
        } else {
            SigninPhase::Credentials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_factor_response_moves_to_otp_phase() {
        assert_eq!(
            SigninPhase::after_credentials(true),
            SigninPhase::Otp
        );
        assert_eq!(
            SigninPhase::after_credentials(false),
            SigninPhase::Credentials
        );
    }

    #[test]
    fn signin_response_defaults_to_no_second_factor() {
        let parsed: SigninResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.two_factor_required);
    }

    #[test]
    fn signin_response_ignores_unused_payload_fields() {
        // The backend also echoes the user; only the flag is consumed.
        let parsed: SigninResponse = serde_json::from_str(
            r#"{"twoFactorRequired":true,"user":{"_id":"u1","email":"ops@example.com"}}"#,
        )
        .unwrap();
        assert!(parsed.two_factor_required);
    }
}
