pub mod aggregate;

pub use aggregate::{check_path, favorite_path, FavoriteStatus};
