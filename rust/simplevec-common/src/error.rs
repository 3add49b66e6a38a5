use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, size: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, size }.into())
    }

    pub fn allocation_failed(elements: usize, bytes: usize) -> Error {
        Error(ErrorKind::AllocationFailed { elements, bytes }.into())
    }

    pub fn capacity_overflow(elements: usize) -> Error {
        Error(ErrorKind::CapacityOverflow { elements }.into())
    }

    /// Returns `true` if this error was caused by a failed checked access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if this error was caused by the allocator (or by a request
    /// too large to describe with a valid layout).
    pub fn is_allocation_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AllocationFailed { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} >= size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("failed to allocate {elements} elements ({bytes} bytes)")]
    AllocationFailed { elements: usize, bytes: usize },

    #[error("capacity overflow: {elements} elements exceed the maximum allocation size")]
    CapacityOverflow { elements: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
