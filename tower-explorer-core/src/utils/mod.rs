//! Utility helpers

pub mod currency;
