use derive_more::Display;
use std::error::Error;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Display, Debug)]
pub enum ErrorKind {
    /// Decode input matches no valid discriminant or terminator pattern.
    MalformedEncoding,
    /// Encode input exceeds a declared fixed capacity.
    ValueTooLarge,
    /// A null where the type has no null, a misplaced variant, or a schema mismatch.
    UnsupportedValue,
    /// The destination lacks room for the write.
    CapacityViolation,
}

/// The root cause carried by every `anyhow::Error` this crate returns.
///
/// Recover it with `err.downcast_ref::<CodecError>()`.
#[derive(PartialEq, Eq, Clone, Display, Debug)]
#[display(fmt = "{}: {}", kind, detail)]
pub struct CodecError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl Error for CodecError {}

impl CodecError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> anyhow::Error {
        Self::new(ErrorKind::MalformedEncoding, detail).into()
    }
    pub fn too_large(detail: impl Into<String>) -> anyhow::Error {
        Self::new(ErrorKind::ValueTooLarge, detail).into()
    }
    pub fn unsupported(detail: impl Into<String>) -> anyhow::Error {
        Self::new(ErrorKind::UnsupportedValue, detail).into()
    }
    pub fn capacity(detail: impl Into<String>) -> anyhow::Error {
        Self::new(ErrorKind::CapacityViolation, detail).into()
    }
}

/// The [`ErrorKind`] of an error produced by this crate, if it is one.
pub fn kind_of(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<CodecError>().map(|e| e.kind)
}
