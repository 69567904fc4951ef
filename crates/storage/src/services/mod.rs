pub mod accuracy;
pub mod leaderboard;
pub mod picks;
pub mod results;
pub mod source;

#[cfg(test)]
mod memory;
