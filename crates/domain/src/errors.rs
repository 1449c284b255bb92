use thiserror::Error;

/// Failures of the wire-format codec.
///
/// Everything except `InvalidRecord` and `SectionTooLarge` is a decode-time
/// error caused by the bytes on the wire; those two are raised while encoding
/// and point at a message that was assembled incorrectly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Truncated input: buffer exhausted before a required field")]
    TruncatedInput,

    #[error("Invalid compression pointer at offset {pointer} to offset {target}")]
    InvalidPointer { pointer: usize, target: usize },

    #[error("Label too long: {0} bytes (max 63)")]
    LabelTooLong(usize),

    #[error("Domain name too long: {0} bytes encoded (max 255)")]
    NameTooLong(usize),

    #[error("Empty label inside a domain name")]
    EmptyLabel,

    #[error("Invalid record: type {rtype} requires {expected} bytes of RDATA, got {actual}")]
    InvalidRecord {
        rtype: u16,
        expected: usize,
        actual: usize,
    },

    #[error("Too many entries in {0} section")]
    SectionTooLarge(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error(transparent)]
    Wire(#[from] WireError),
}
