use thiserror::Error;

/// Why a string was rejected as CIDR notation.
///
/// Every variant carries the full input so the message stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid CIDR '{0}': expected <address>/<prefix>")]
    MissingPrefix(String),

    #[error("invalid IP address '{addr}' in CIDR '{cidr}'")]
    InvalidAddress { cidr: String, addr: String },

    #[error("invalid prefix length '{prefix}' in CIDR '{cidr}'")]
    InvalidPrefix { cidr: String, prefix: String },

    #[error("prefix length /{prefix} exceeds {bits} bits in CIDR '{cidr}'")]
    PrefixTooLong { cidr: String, prefix: String, bits: u8 },
}
