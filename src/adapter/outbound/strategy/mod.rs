//! On-chain strategy contract adapter.

mod contract;

pub use contract::StrategyContract;
