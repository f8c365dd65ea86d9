pub mod auth_token;
pub mod basic_auth;
pub mod validated_json;

pub use auth_token::AuthToken;
pub use basic_auth::BasicCredentials;
pub use validated_json::ValidatedJson;
