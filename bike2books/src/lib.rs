pub mod app;
pub mod error;
pub mod model;

pub use error::Bike2BooksError;
