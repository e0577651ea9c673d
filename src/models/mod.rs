//! Omie resource models.

mod company;
pub(crate) mod lenient;
mod product;
mod sales_order;
mod tax_recommendation;

pub use company::*;
pub use product::*;
pub use sales_order::*;
pub use tax_recommendation::*;
