//! Run state machine.

use std::fmt;

use super::{EncodedCall, TransactionResult};

/// Stage of a purchase run.
///
/// A run moves strictly forward:
/// `Idle -> FetchingListing -> FetchingFulfillment -> Encoding -> Invoking`,
/// ending in `Confirmed`, `Encoded` (dry run) or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    FetchingListing,
    FetchingFulfillment,
    Encoding,
    Invoking,
    Confirmed,
    Encoded,
    Failed,
}

impl RunState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Encoded | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Idle, Self::FetchingListing)
            | (Self::FetchingListing, Self::FetchingFulfillment)
            | (Self::FetchingFulfillment, Self::Encoding)
            | (Self::Encoding, Self::Invoking | Self::Encoded)
            | (Self::Invoking, Self::Confirmed) => true,
            (from, Self::Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::FetchingListing => "fetching_listing",
            Self::FetchingFulfillment => "fetching_fulfillment",
            Self::Encoding => "encoding",
            Self::Invoking => "invoking",
            Self::Confirmed => "confirmed",
            Self::Encoded => "encoded",
            Self::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Successful end of a run.
#[derive(Debug, Clone)]
pub enum PurchaseOutcome {
    /// The strategy transaction was mined with a success status.
    Confirmed(TransactionResult),
    /// Dry run: the call was encoded but not submitted.
    DryRun(EncodedCall),
}
