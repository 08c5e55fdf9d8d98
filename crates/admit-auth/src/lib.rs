//! Token issuance and verification for the admissions service.
//!
//! Stateless bearer-token auth: a single configured credential pair is
//! exchanged at login for a signed, time-limited JWT, and every protected
//! request presents that token. Validity is determined purely by signature
//! and expiry at verification time; there is no session store, no refresh,
//! and no revocation.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why token verification failed.
///
/// Carried for logging and tests only; clients always see the same generic
/// unauthenticated message regardless of cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFailure {
    /// Not a structurally valid token.
    Malformed,
    /// Signature does not match the process secret.
    Signature,
    /// Expiry timestamp has passed.
    Expired,
    /// Valid token whose subject is not a recognized user.
    UnknownSubject,
}

/// Authentication failures.
///
/// Display implementations stay generic: [`AuthError::InvalidCredentials`]
/// does not say whether the username or the password was wrong, and
/// [`AuthError::Unauthenticated`] never mentions its cause.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Authentication failed")]
    Unauthenticated(VerifyFailure),

    #[error("Token creation failed")]
    TokenCreation,
}

/// The username/password pair authorized to obtain tokens.
///
/// Fixed for the process lifetime and supplied by configuration.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies access tokens against a fixed credential pair.
///
/// Read-only after construction; safe to share across request handlers.
pub struct AuthGate {
    credentials: Credentials,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl AuthGate {
    /// Creates a gate signing with `secret` and recognizing `credentials`.
    ///
    /// Tokens expire `ttl_minutes` after issuance.
    pub fn new(secret: &str, credentials: Credentials, ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry; the default 60s leeway would keep just-expired
        // tokens verifying.
        validation.leeway = 0;

        Self {
            credentials,
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_minutes,
        }
    }

    /// Exchanges a credential pair for a signed access token.
    pub fn issue(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.credentials.username || password != self.credentials.password {
            return Err(AuthError::InvalidCredentials);
        }

        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_string(),
            iat,
            exp: iat + self.ttl_minutes * 60,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::TokenCreation)
    }

    /// Verifies a token and returns the embedded subject.
    ///
    /// Rejects tokens that are malformed, carry a bad signature, have
    /// expired, or name a subject that is not the recognized user.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::Unauthenticated(classify(&e)))?;

        if data.claims.sub != self.credentials.username {
            return Err(AuthError::Unauthenticated(VerifyFailure::UnknownSubject));
        }

        Ok(data.claims.sub)
    }
}

fn classify(err: &jsonwebtoken::errors::Error) -> VerifyFailure {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => VerifyFailure::Expired,
        ErrorKind::InvalidSignature => VerifyFailure::Signature,
        _ => VerifyFailure::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }

    fn gate() -> AuthGate {
        AuthGate::new(SECRET, credentials(), 60)
    }

    fn encode_claims(secret: &str, claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let gate = gate();
        let token = gate.issue("admin", "admin123").unwrap();
        let subject = gate.verify(&token).unwrap();
        assert_eq!(subject, "admin");
    }

    #[test]
    fn test_issue_rejects_bad_credentials() {
        let gate = gate();
        for (username, password) in [
            ("admin", "wrongpassword"),
            ("mallory", "admin123"),
            ("mallory", "letmein"),
            ("", ""),
        ] {
            assert_eq!(
                gate.issue(username, password),
                Err(AuthError::InvalidCredentials),
                "{username}/{password} should be rejected"
            );
        }
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let gate = gate();
        assert_eq!(
            gate.verify("not-a-token"),
            Err(AuthError::Unauthenticated(VerifyFailure::Malformed))
        );
    }

    #[test]
    fn test_verify_rejects_foreign_signature() {
        let gate = gate();
        let now = Utc::now().timestamp();
        let token = encode_claims(
            "some-other-secret",
            &Claims {
                sub: "admin".to_string(),
                iat: now,
                exp: now + 3600,
            },
        );
        assert_eq!(
            gate.verify(&token),
            Err(AuthError::Unauthenticated(VerifyFailure::Signature))
        );
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let gate = gate();
        let now = Utc::now().timestamp();
        let token = encode_claims(
            SECRET,
            &Claims {
                sub: "admin".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            },
        );
        assert_eq!(
            gate.verify(&token),
            Err(AuthError::Unauthenticated(VerifyFailure::Expired))
        );
    }

    #[test]
    fn test_verify_rejects_unknown_subject() {
        let gate = gate();
        let now = Utc::now().timestamp();
        let token = encode_claims(
            SECRET,
            &Claims {
                sub: "mallory".to_string(),
                iat: now,
                exp: now + 3600,
            },
        );
        assert_eq!(
            gate.verify(&token),
            Err(AuthError::Unauthenticated(VerifyFailure::UnknownSubject))
        );
    }

    #[test]
    fn test_errors_stay_generic() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Incorrect username or password"
        );
        for cause in [
            VerifyFailure::Malformed,
            VerifyFailure::Signature,
            VerifyFailure::Expired,
            VerifyFailure::UnknownSubject,
        ] {
            assert_eq!(
                AuthError::Unauthenticated(cause).to_string(),
                "Authentication failed"
            );
        }
    }
}
