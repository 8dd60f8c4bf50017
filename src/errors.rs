//! Error type shared by every fallible heap operation.
//!
//! Construction problems come out of [`HeapBuilder::build`](crate::HeapBuilder::build)
//! and nowhere else. After a heap exists the only failure left is asking an
//! empty heap for its top element. Element type mismatches cannot happen at
//! runtime because the element type is a type parameter of the heap.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for heap construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` on a heap that holds no elements.
    Empty,

    /// A required builder parameter was never supplied.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A builder parameter was supplied more than once.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl HeapError {
    /// True for errors raised while configuring a heap.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::DuplicateParameter { .. }
        )
    }
}

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Empty => write!(f, "Heap is empty"),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

impl Error for HeapError {}
