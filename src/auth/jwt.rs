use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::User,
};

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &SecretString) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
        }
    }

    pub fn create_token(&self, user: &User) -> AppResult<String> {
        let claims = Claims::new(user);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Token signature is invalid".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn jwt_service() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret)
    }

    #[test]
    fn test_jwt_create_and_validate() {
        let service = jwt_service();
        let user = User::test_user(42, "ada");

        let token = service.create_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
    }

    #[test]
    fn test_jwt_invalid_token() {
        let result = jwt_service().validate_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_jwt_tampered_signature() {
        let service = jwt_service();
        let user = User::test_user(42, "ada");

        let mut token = service.create_token(&user).unwrap();
        // Flip the last character of the signature segment.
        let last = if token.ends_with('A') { 'B' } else { 'A' };
        token.pop();
        token.push(last);

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_jwt_expired_token() {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let config = Config::test_config();
        let service = JwtService::new(&config.jwt_secret);

        let expired = Claims {
            sub: "42".to_string(),
            iat: 0,
            exp: 1, // 1970, well past any leeway
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(secrecy::ExposeSecret::expose_secret(&config.jwt_secret).as_bytes()),
        )
        .unwrap();

        let result = service.validate_token(&token);
        match result {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("expired")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }
}
