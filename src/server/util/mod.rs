pub mod money;
pub mod parse;
pub mod time;
