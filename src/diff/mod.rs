//! Analytic gradients.
//!
//! Each submodule differentiates one forward quantity from `core`
//! with respect to a single chain point.

pub mod potential_grad;
pub mod regularization_grad;

pub use potential_grad::potential_gradient;
pub use regularization_grad::regularization_gradient;
