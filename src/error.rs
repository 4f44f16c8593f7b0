use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeapError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("attempted to create a heap whose capacity {requested} exceeds allowed maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// The heap's internal state does not describe a properly constructed heap.
    #[error("heap object is corrupt")]
    UninitializedAccess,

    #[error("invalid heap limits: minimum capacity {min} is above maximum {max}")]
    InvalidLimits { min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::HeapError;

    #[test]
    fn capacity_message() {
        let err = HeapError::CapacityExceeded {
            requested: 20_000,
            max: 10_000,
        };
        assert_eq!(
            err.to_string(),
            "attempted to create a heap whose capacity 20000 exceeds allowed maximum of 10000"
        );
    }
}
