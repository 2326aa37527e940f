//! Margin pool protocol constants

/// Fixed-point scale for rate-like on-chain quantities.
/// A value of `RATE_SCALE` means 1.0 (nine fractional decimal digits).
pub const RATE_SCALE: u64 = 1_000_000_000;

/// On-chain contract surface targeted by parameter reads
pub mod contract {
    /// Module exposing the pool parameter accessor functions
    pub const MARGIN_POOL_MODULE: &str = "margin_pool";
}
