//! HTTP request handlers

pub mod health;
pub mod leads;
