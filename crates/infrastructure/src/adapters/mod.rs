//! Adapters - Concrete helpers backing the application's security needs

mod admin_key_hasher;

pub use admin_key_hasher::{AdminKeyHashError, AdminKeyHasher, AdminKeyStore};
