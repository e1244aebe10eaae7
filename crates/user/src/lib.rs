mod command;
pub mod digest;
mod repository;

pub use command::*;
pub use repository::Account;
