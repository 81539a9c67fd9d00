//! Engine errors and their numeric codes.

use thiserror::Error;

/// Errors returned by registry and dispatch operations.
///
/// A failed operation never mutates the machine it addressed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StmError {
    /// Every slot of the registry is taken. Retrying fails the same way.
    #[error("Machine registry is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },

    /// A raw handle that can never be valid, such as a negative number.
    #[error("Handle {raw} is not a valid handle")]
    InvalidHandle { raw: i32 },

    #[error("Handle {index} is out of range ({issued} machines created)")]
    HandleOutOfRange { index: usize, issued: usize },

    /// The machine's current state is not on its state axis.
    #[error("Current state is not on the state axis")]
    UnknownState,

    #[error("Event is not on the event axis")]
    UnknownEvent,

    /// The matching cell carries no action.
    #[error("Cell (event {event_index}, state {state_index}) has no action")]
    NoAction {
        event_index: usize,
        state_index: usize,
    },

    /// A runtime-decided next state is not on the state axis. Only raised
    /// under [`NextStatePolicy::Verify`](crate::engine::NextStatePolicy::Verify).
    #[error("Action chose a next state that is not on the state axis")]
    NoNextState,
}

/// Numeric result codes for callers that speak integers.
///
/// `Ok` is zero and every failure is a small negative number, so a handle or
/// state id (non-negative) and an error can share one return slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum ErrorCode {
    Ok = 0,
    CapacityExhausted = -1,
    RangeError = -2,
    NoAction = -3,
    NoNextState = -4,
}

impl ErrorCode {
    pub const fn as_raw(self) -> i16 {
        self as i16
    }

    pub const fn is_error(self) -> bool {
        self.as_raw() < 0
    }

    /// Code for the outcome of any engine operation.
    pub fn of<T>(result: &Result<T, StmError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(error) => error.code(),
        }
    }
}

impl StmError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::CapacityExhausted { .. } => ErrorCode::CapacityExhausted,
            Self::InvalidHandle { .. }
            | Self::HandleOutOfRange { .. }
            | Self::UnknownState
            | Self::UnknownEvent => ErrorCode::RangeError,
            Self::NoAction { .. } => ErrorCode::NoAction,
            Self::NoNextState => ErrorCode::NoNextState,
        }
    }
}

impl From<StmError> for i16 {
    fn from(error: StmError) -> Self {
        error.code().as_raw()
    }
}
