/// Errors returned by the fallible sort entry points.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The comparison function yielded no ordering for two adjacent elements. The slice is left a
    /// permutation of the input, possibly partially sorted.
    #[error("elements at positions {left} and {right} cannot be ordered")]
    IncomparableElements { left: usize, right: usize },
}
