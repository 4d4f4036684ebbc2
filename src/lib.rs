pub mod catalog;
pub mod clenshaw_curtis;
pub mod error;
pub mod harness;
pub mod integral;
pub mod interpolatory;
pub mod quadrature;
pub mod sample;

pub use error::{QuadratureError, Result};
