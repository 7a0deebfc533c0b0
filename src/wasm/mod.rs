mod bridge;
pub mod constants;
mod contract;
mod convert;
mod provider;

pub use bridge::WasmTokenBridge;
pub use contract::TokenContract;
pub use provider::Eip1193Provider;

// Re-export constants functions
pub use constants::*;
