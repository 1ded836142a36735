#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Invalid sort range [{low}, {high}] for a sequence of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    #[error("Sequence is not sorted: element at index {index} is greater than its successor")]
    Unsorted { index: usize },
}
