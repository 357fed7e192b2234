//! Port definitions: the interfaces the purchase flow is written against.

pub mod outbound;

pub use outbound::marketplace::Marketplace;
pub use outbound::strategy::StrategyInvoker;
