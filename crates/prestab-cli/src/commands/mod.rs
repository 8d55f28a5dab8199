pub mod count;
pub mod estimate;
