pub mod check;
pub mod navigator;
pub mod view;

pub use navigator::{Location, Navigator, Resolution};
