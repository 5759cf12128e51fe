use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

/// Verifies HS256 bearer tokens signed with the shared secret.
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Token signature is invalid".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })?;

        if claims.sub.trim().is_empty() {
            return Err(AppError::Unauthorized(
                "Token does not identify a user".to_string(),
            ));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, test_utils::issue_token};
    use chrono::Utc;

    #[test]
    fn test_jwt_validate_issued_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);

        let token = issue_token(&config.jwt_secret, &Claims::new("user-7", 1));
        let claims = jwt_service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "user-7");
    }

    #[test]
    fn test_jwt_invalid_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);

        let result = jwt_service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_jwt_rejects_foreign_secret() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);
        let other = SecretString::from("another-secret-entirely-0123456789".to_string());

        let token = issue_token(&other, &Claims::new("user-7", 1));

        match jwt_service.validate_token(&token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("signature")),
            other => panic!("Expected Unauthorized error, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_jwt_rejects_expired_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);
        let long_ago = (Utc::now().timestamp() - 3600) as usize;
        let claims = Claims {
            sub: "user-7".to_string(),
            iat: long_ago - 60,
            exp: long_ago,
        };

        let token = issue_token(&config.jwt_secret, &claims);

        match jwt_service.validate_token(&token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("expired")),
            other => panic!("Expected Unauthorized error, got {:?}", other.map(|c| c.sub)),
        }
    }
}
