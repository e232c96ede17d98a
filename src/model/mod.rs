pub mod board;
pub mod category;
pub mod config;

pub use board::*;
pub use category::*;
pub use config::*;
