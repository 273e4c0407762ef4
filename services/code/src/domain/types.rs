use std::time::Duration;

/// A code waiting to be verified for an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub email: String,
    pub code: u64,
    pub ttl: Duration,
}

/// Validated code settings consumed by the use cases.
#[derive(Debug, Clone)]
pub struct CodeSettings {
    /// Lifetime of a stored code. Always non-zero.
    pub ttl: Duration,
    /// Maximum number of decimal digits of a generated code.
    pub max_length: u32,
    /// Minimum number of decimal digits of a generated code.
    pub min_length: u32,
    /// Recipient name passed to the email service.
    pub display_name: String,
    /// Delete the stored code after a successful verification.
    pub consume_on_verify: bool,
}

/// Largest digit count for which every value of that length fits in `u64`.
pub const MAX_CODE_DIGITS: u32 = 19;

pub const DEFAULT_DISPLAY_NAME: &str = "new user";
