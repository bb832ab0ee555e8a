use std::fmt;

/// The single failure kind raised by this crate.
///
/// There is no richer error hierarchy: every fallible operation in
/// [`bignum`](crate::bignum) and [`rsa`](crate::rsa) either runs to
/// completion or abandons it with one of these two causes. Propagation is
/// non-recoverable at the algorithm layer — on error the output slot is left
/// in an unspecified but memory-safe state, and callers are expected to
/// discard or overwrite it rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A slot write would have advanced past the end of its fixed region.
    Capacity,
    /// An operand violated a precondition: a zero divisor, an RSA plaintext
    /// too long to pad, an RSA ciphertext shorter than the key's block size,
    /// or a decrypted block whose leading limb isn't the PKCS#1 type-2
    /// marker.
    InvalidArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Capacity => f.write_str("slot capacity exceeded"),
            Error::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

impl std::error::Error for Error {}
