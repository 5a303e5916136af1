pub mod batch;
pub mod count;
pub mod sample;
