pub mod quicksort;
pub mod rust_std;
