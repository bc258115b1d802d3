//! Shared error vocabulary

/// Common error codes used across the application
pub mod error_codes {
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_SIGNATURE_INVALID: &str = "TOKEN_SIGNATURE_INVALID";
    pub const TOKEN_GENERATION_FAILED: &str = "TOKEN_GENERATION_FAILED";
    pub const CLAIM_MISSING: &str = "CLAIM_MISSING";
}
