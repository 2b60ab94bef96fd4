//! Model assembly helpers.

mod builder;

pub use builder::ModelBuilder;
