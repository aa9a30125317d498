//! SMS provider contract and registry
//!
//! Providers are looked up by a string key and opened from a connection
//! string. Implementations register an [`Opener`] under their name, callers
//! open a provider with [`open`] and then only ever talk to the
//! [`SmsProvider`] trait.

mod registry;
mod traits;

#[cfg(test)]
mod tests;

pub use registry::{open, register, registered_providers, Opener, ProviderRegistry};
pub use traits::SmsProvider;
