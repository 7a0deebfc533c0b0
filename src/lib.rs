//! wasm-erc20: WASM wallet/contract bridge for a deployed ERC20-style token.
//!
//! This crate connects a browser wallet extension (an injected EIP-1193
//! provider), reads the token's on-chain metadata (name, symbol, supply,
//! owner), and submits transfer, burn and mint calls signed by the connected
//! account. The contract itself is external and pre-deployed; it is
//! addressed by a fixed address and a typed interface descriptor.
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//!
//! 1. **Core layer** (`src/*.rs`) - Pure Rust logic, no WASM dependencies:
//!    ABI bindings, amount conversion, address handling, RPC payload types,
//!    and the UI state container.
//! 2. **WASM layer** (`src/wasm/`) - Thin wrappers that expose the bridge to
//!    JavaScript: provider detection, the contract handle, and the exported
//!    [`WasmTokenBridge`].
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_erc20::{parse_amount, format_amount};
//!
//! let raw = parse_amount("1000.0").unwrap();
//! assert_eq!(format_amount(raw).unwrap(), "1000.0");
//! ```

pub mod abi;
pub mod address;
mod error;
pub mod rpc;
pub mod session;
pub mod units;
pub mod wasm;

// Re-export core types at crate root
pub use address::{addresses_match, parse_address};
pub use error::WasmErc20Error;
pub use session::{FormField, FormInput, SessionState, TokenSnapshot, TxState};
pub use units::{format_amount, parse_amount, TOKEN_DECIMALS};

// Re-export WASM types
pub use wasm::{Eip1193Provider, TokenContract, WasmTokenBridge};
