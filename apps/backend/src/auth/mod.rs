pub mod gate;
pub mod identity;
pub mod jwt;

pub use gate::{authenticate, extract_bearer, AuthFailure};
pub use identity::Identity;
pub use jwt::{mint_access_token, mint_access_token_with_ttl, verify_access_token, Claims, TokenError};
