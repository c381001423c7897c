//! API route tables

pub mod v1;
