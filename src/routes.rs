mod health_check;
mod hello;
mod top10;

pub use health_check::*;
pub use hello::*;
pub use top10::*;
