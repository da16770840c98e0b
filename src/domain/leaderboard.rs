#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: i32,
}

pub struct Leaderboard;

impl Leaderboard {
    pub const LIMIT: i64 = 10;

    /// Render entries as `"{name} {count}\n"` lines, in the order given.
    pub fn render(entries: &[LeaderboardEntry]) -> String {
        entries
            .iter()
            .map(|entry| format!("{} {}\n", entry.name, entry.count))
            .collect()
    }
}
