//! Operation error types
//!
//! This module defines [`OperationError`], covering everything that rejects an
//! operation at the boundary, before any store mutation and before any steps
//! are recorded.
//!
//! A failed search or a delete of an absent value is NOT an error: those are
//! valid pedagogical outcomes, narrated as a terminal not-found step in an
//! otherwise ordinary step sequence.

use std::fmt;

/// Errors that reject an operation before it touches a store
#[derive(Debug, Clone)]
pub enum OperationError {
    /// Malformed user input: non-numeric value, empty word, unknown command
    InvalidInput { message: String },

    /// Pop/extract/peek/dequeue on an empty structure
    EmptyStructure { structure: &'static str },

    /// Graph operation naming a node that does not exist
    UnknownNode { label: String },

    /// Operation issued against a session of the wrong structure kind
    WrongStructure {
        operation: &'static str,
        structure: &'static str,
    },
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            OperationError::EmptyStructure { structure } => {
                write!(f, "The {} is empty", structure)
            }
            OperationError::UnknownNode { label } => {
                write!(f, "No node labeled '{}'", label)
            }
            OperationError::WrongStructure {
                operation,
                structure,
            } => {
                write!(f, "Operation '{}' does not apply to a {}", operation, structure)
            }
        }
    }
}

impl std::error::Error for OperationError {}
