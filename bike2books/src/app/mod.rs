mod bike2books_app;
mod bike2books_config;
mod origin_args;

pub use bike2books_app::{Bike2BooksApp, Bike2BooksOperation};
pub use bike2books_config::{Bike2BooksConfig, DEFAULT_CONFIG};
pub use origin_args::OriginArgs;
