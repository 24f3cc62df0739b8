use thiserror::Error;

/// Failures raised while encoding or decoding a NAS message.
///
/// All but the last two variants are decode errors in the protocol
/// sense: the bytes are malformed or claim values outside the registered
/// ranges. `UnsupportedMessageType` means the bytes were well formed but
/// name a message this codec has no table for; `UnprotectedWrapper` is
/// the one encode-side failure. No partial message is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NasError {
    #[error("truncated {field}: needed {needed} more bytes, {remaining} remain")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("value {value:#04x} is not a registered {family}")]
    UnknownValue { family: &'static str, value: u8 },

    #[error("mandatory IE {ie} missing from {message}")]
    MissingIe {
        message: &'static str,
        ie: &'static str,
    },

    #[error("unknown IE {iei:#04x} has no determinable size and cannot be skipped")]
    UnskippableIe { iei: u8 },

    #[error("unsupported message type {value:#04x}")]
    UnsupportedMessageType { value: u8 },

    #[error("a security-protected wrapper cannot use the Not protected header type")]
    UnprotectedWrapper,
}
