pub mod picks;
pub mod results;
pub mod scoring;
