#![allow(dead_code)]

pub mod fixtures;
pub mod recording_invoker;
pub mod recording_marketplace;
