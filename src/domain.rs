mod greeting;
mod leaderboard;

pub use greeting::*;
pub use leaderboard::*;
