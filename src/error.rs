use thiserror::Error;

/// Failures reported by [`RingBuffer`](crate::RingBuffer) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid capacity {capacity}: a ring buffer needs at least one slot")]
    InvalidCapacity { capacity: usize },

    #[error("index {index} out of range for ring buffer of capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = Error::InvalidCapacity { capacity: 0 };
        assert_eq!(e.to_string(), "invalid capacity 0: a ring buffer needs at least one slot");

        let e = Error::IndexOutOfRange { index: 5, capacity: 3 };
        assert_eq!(e.to_string(), "index 5 out of range for ring buffer of capacity 3");
    }
}
