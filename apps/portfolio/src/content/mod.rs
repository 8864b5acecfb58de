// Content model: the fixed, read-only description of the page.
// Built once at startup, validated, then shared behind an Arc.

pub mod data;
pub mod models;
pub mod validation;

pub use data::portfolio;
pub use models::Portfolio;
pub use validation::validate_portfolio;
