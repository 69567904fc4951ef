pub mod health;
pub mod picks;
pub mod results;
