use strum::{Display, EnumString};

/// Whether a visitor has been greeted before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum UserType {
    FirstTime,
    Known,
}

impl UserType {
    /// Classify a visitor by the counter value stored after their latest visit.
    pub fn from_visit_count(count: i32) -> Self {
        if count > 1 {
            Self::Known
        } else {
            Self::FirstTime
        }
    }
}

pub const UNKNOWN_USER: &str = "unknown user";

pub fn say_hello_to(name: &str, user_type: UserType) -> String {
    let name = if name.is_empty() { UNKNOWN_USER } else { name };

    match user_type {
        UserType::FirstTime => format!("Hello, {}!\n", name),
        UserType::Known => format!("Hi again, {}!\n", name),
    }
}
