//! Application services (use cases).

pub mod purchase;

pub use purchase::{PurchaseFlow, PurchaseSettings};
