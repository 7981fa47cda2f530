pub mod aggregate;

pub use aggregate::{Category, CategoryCount, CategoryScope};
