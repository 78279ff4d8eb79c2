use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog is empty: at least one product is required")]
    EmptyCatalog,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid rating {value}: must be between 1 and 5")]
    InvalidRating { value: f64 },

    #[error("Invalid feature configuration: {0}")]
    Configuration(String),
}
