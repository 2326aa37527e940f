//! Margin pool protocol support
//!
//! Read-only decoding of margin-lending pool state: parameter read
//! batching over a simulation gateway, positional result decoding, unit
//! conversion, and the kinked utilization interest model.
//!
//! The crate owns no keys, addresses, or transports. Callers supply pool
//! targets and a `ReadGateway` implementation; signing and state-changing
//! flows live elsewhere.

pub mod calculator;
pub mod calls;
pub mod config;
pub mod constants;
pub mod decode;
pub mod fetch;
pub mod registry;
pub mod state;

pub use calculator::*;
pub use calls::*;
pub use config::*;
pub use decode::*;
pub use fetch::*;
pub use registry::*;
pub use state::*;
