use std::fmt;

/// The polymorphic families, each with its own closed set of discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Address,
    Input,
    Output,
    Signature,
    UnlockBlock,
    Transaction,
    Payload,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Address => "address",
            Family::Input => "input",
            Family::Output => "output",
            Family::Signature => "signature",
            Family::UnlockBlock => "unlock block",
            Family::Transaction => "transaction",
            Family::Payload => "payload",
        };
        f.write_str(name)
    }
}

/// Which amount rule an output broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SupplyRule {
    #[error("deposit amount must be greater than zero")]
    ZeroAmount,
    #[error("an output can not deposit more than the total supply")]
    ExceedsTotalSupply,
    #[error("accumulated output balance exceeds total supply")]
    SumExceedsTotalSupply,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("not enough data for {what}: need {need} bytes but {have} are available")]
    InsufficientData {
        what: &'static str,
        need: usize,
        have: usize,
    },

    #[error("{what} type denotation must be {expected} but is {actual}")]
    TypeMismatch {
        what: &'static str,
        expected: u8,
        actual: u8,
    },

    #[error("unknown {family} type {discriminator}")]
    UnknownType { family: Family, discriminator: u8 },

    #[error("invalid varint for {what}: {reason}")]
    InvalidVarint {
        what: &'static str,
        reason: &'static str,
    },

    #[error("{what} is {actual} but must be between {min} and {max}")]
    BoundsViolation {
        what: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },

    #[error("{what} must be in their lexical order (byte wise): element {index} should have been before element {previous}")]
    OrderViolation {
        what: &'static str,
        index: usize,
        previous: usize,
    },

    #[error("{what} must be unique: element {index} duplicates element {previous}")]
    UniquenessViolation {
        what: &'static str,
        index: usize,
        previous: usize,
    },

    #[error("unlock block {index} references {reference} which is not a previous signature unlock block")]
    ReferentialIntegrityViolation { index: usize, reference: u16 },

    #[error("{rule}: amount {amount}{}", .index.map(|i| format!(" in output {i}")).unwrap_or_default())]
    SupplyViolation {
        index: Option<usize>,
        amount: u64,
        rule: SupplyRule,
    },

    #[error("{what} length prefix denotes {declared} bytes but {actual} were consumed")]
    LengthMismatch {
        what: &'static str,
        declared: u64,
        actual: u64,
    },

    #[error("not all data has been consumed by {what}: {remaining} bytes are left over")]
    TrailingBytes { what: &'static str, remaining: usize },

    #[error("{what} is too long to be encoded")]
    LengthOverflow { what: &'static str },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("unable to deserialize {variant}: {source}")]
    Variant {
        variant: &'static str,
        source: Box<CodecError>,
    },
}

/// Fieldless view of [`CodecError`] for callers that branch on the error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InsufficientData,
    TypeMismatch,
    UnknownType,
    InvalidVarint,
    BoundsViolation,
    OrderViolation,
    UniquenessViolation,
    ReferentialIntegrityViolation,
    SupplyViolation,
    LengthMismatch,
    TrailingBytes,
    LengthOverflow,
    NotImplemented,
}

impl CodecError {
    /// The class of the underlying failure, looking through variant context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InsufficientData { .. } => ErrorKind::InsufficientData,
            CodecError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CodecError::UnknownType { .. } => ErrorKind::UnknownType,
            CodecError::InvalidVarint { .. } => ErrorKind::InvalidVarint,
            CodecError::BoundsViolation { .. } => ErrorKind::BoundsViolation,
            CodecError::OrderViolation { .. } => ErrorKind::OrderViolation,
            CodecError::UniquenessViolation { .. } => ErrorKind::UniquenessViolation,
            CodecError::ReferentialIntegrityViolation { .. } => {
                ErrorKind::ReferentialIntegrityViolation
            }
            CodecError::SupplyViolation { .. } => ErrorKind::SupplyViolation,
            CodecError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            CodecError::TrailingBytes { .. } => ErrorKind::TrailingBytes,
            CodecError::LengthOverflow { .. } => ErrorKind::LengthOverflow,
            CodecError::NotImplemented(_) => ErrorKind::NotImplemented,
            CodecError::Variant { source, .. } => source.kind(),
        }
    }

    /// The innermost error, with all variant context stripped.
    pub fn root(&self) -> &CodecError {
        match self {
            CodecError::Variant { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn in_variant(self, variant: &'static str) -> Self {
        CodecError::Variant {
            variant,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_looks_through_variant_context() {
        let err = CodecError::InsufficientData {
            what: "Ed25519 address",
            need: 33,
            have: 5,
        }
        .in_variant("Ed25519Address")
        .in_variant("SigLockedSingleDeposit");

        assert_eq!(err.kind(), ErrorKind::InsufficientData);
        assert!(matches!(err.root(), CodecError::InsufficientData { need: 33, .. }));
    }

    #[test]
    fn display_carries_context() {
        let err = CodecError::UnknownType {
            family: Family::UnlockBlock,
            discriminator: 100,
        };
        assert_eq!(err.to_string(), "unknown unlock block type 100");

        let err = CodecError::SupplyViolation {
            index: Some(2),
            amount: 0,
            rule: SupplyRule::ZeroAmount,
        }
        .in_variant("SigLockedSingleDeposit");
        assert_eq!(
            err.to_string(),
            "unable to deserialize SigLockedSingleDeposit: deposit amount must be greater than zero: amount 0 in output 2"
        );
    }
}
