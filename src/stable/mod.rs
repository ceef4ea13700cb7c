pub mod bubble;
pub mod merge;
pub mod rust_std;
