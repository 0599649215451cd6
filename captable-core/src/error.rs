//! Error types for captable.
//!
//! Every failure of the dispatch machinery is reported through [`CapError`]:
//!
//! - [`CapError::ContractViolation`] - the operation is not declared in the contract
//! - [`CapError::UnboundCapability`] - the operation is declared but nothing is bound
//! - [`CapError::SignatureMismatch`] - binding or call types differ from the declaration
//! - [`CapError::Io`] - an implementation's output stream failed

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type CapResult<T> = Result<T, CapError>;

/// Top-level error type for all captable operations.
#[derive(Error, Debug)]
pub enum CapError {
    /// The requested operation is not declared in the contract.
    #[error("contract `{contract}` declares no operation `{operation}`")]
    ContractViolation {
        /// Contract name.
        contract: &'static str,
        /// Requested operation name.
        operation: String,
    },

    /// The operation is declared but no implementation was ever bound.
    #[error("capability `{contract}::{operation}` is not bound")]
    UnboundCapability {
        /// Contract name.
        contract: &'static str,
        /// Operation name.
        operation: &'static str,
    },

    /// Argument or return types differ from the declared signature.
    #[error("`{contract}::{operation}` expects `{expected}`, got `{found}`")]
    SignatureMismatch {
        /// Contract name.
        contract: &'static str,
        /// Operation name.
        operation: &'static str,
        /// Declared signature.
        expected: String,
        /// Signature used by the caller.
        found: String,
    },

    /// The underlying output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CapError {
    /// Build a [`CapError::ContractViolation`].
    pub fn contract_violation(contract: &'static str, operation: impl Into<String>) -> Self {
        CapError::ContractViolation {
            contract,
            operation: operation.into(),
        }
    }

    /// Whether this is a [`CapError::ContractViolation`].
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CapError::ContractViolation { .. })
    }

    /// Whether this is a [`CapError::UnboundCapability`].
    pub fn is_unbound(&self) -> bool {
        matches!(self, CapError::UnboundCapability { .. })
    }
}
