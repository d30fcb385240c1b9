mod auth;
pub mod client;
pub mod endpoints;
mod orders;
mod products;
mod profile;
mod subscriptions;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
