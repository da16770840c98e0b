mod greeting_db;

pub use greeting_db::*;
