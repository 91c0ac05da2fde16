use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::errors::InternalError;
use crate::errors::internal::TokenError;
use crate::types::internal::auth::Claims;

/// Validates bearer JWTs issued by the identity provider
///
/// Tokens are HS256-signed with a shared secret. Issuing tokens is the identity
/// provider's job; `generate_jwt` exists for tooling and tests.
pub struct TokenProvider {
    jwt_secret: String,
}

impl TokenProvider {
    /// Create a new TokenProvider with the shared signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    /// Sign the given claims
    ///
    /// # Returns
    /// * `Ok(String)` - Encoded JWT
    /// * `Err(InternalError)` - Encoding failed
    pub fn generate_jwt(&self, claims: &Claims) -> Result<String, InternalError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::from(TokenError::Encoding(e.to_string())))
    }

    /// Validate a JWT and return the claims
    ///
    /// # Arguments
    /// * `token` - The JWT to validate
    ///
    /// # Returns
    /// * `Ok(Claims)` - Signature and expiry verified
    /// * `Err(InternalError)` - Expired, tampered or malformed token
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => InternalError::from(TokenError::Expired),
            _ => InternalError::from(TokenError::Invalid(e.to_string())),
        })
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}
