//! Error taxonomy for quote resolution and fixed-point arithmetic
//!
//! Every failure is reported synchronously to the caller of `quote` /
//! `get_amount_out`. Nothing here is retried or silently recovered: the
//! router never substitutes a fallback source once resolution has picked
//! one, and arithmetic overflow is always fatal to the call.

use thiserror::Error;

/// Errors surfaced by quote resolution and the price-source adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Caller lacks permission to mutate routing state
    #[error("caller is not authorized to mutate routing state")]
    Unauthorized,

    /// Resolution walked every tier without finding a source
    #[error("no price source configured for the requested pair")]
    NoSourceConfigured,

    /// Constant-product pool has an empty reserve on either side
    #[error("pool has no liquidity for the requested pair")]
    InsufficientLiquidity,

    /// No pool exists for the requested pair at the configured factory
    #[error("no pool exists for the requested pair")]
    PairNotFound,

    /// Time-weighted quote requested with a zero-length window
    #[error("time-weighted window must be greater than zero")]
    InvalidWindow,

    /// Pool observation history does not cover the requested window
    #[error("pool does not have enough observation history for the window")]
    InsufficientObservations,

    /// Price feed reported stale, zero, or negative data
    #[error("price feed returned stale or invalid data")]
    InvalidPriceData,

    /// Aggregator failed or found no route between the tokens
    #[error("aggregator found no route for the requested pair")]
    NoRouteFound,

    /// Swap simulation against the external quoter reverted
    #[error("swap simulation failed: {0}")]
    QuoteSimulationFailed(String),

    /// Upstream read failed for a reason the adapter does not classify
    #[error("upstream call failed: {0}")]
    Upstream(String),

    /// Arithmetic failure inside an adapter's fixed-point calculation
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Division by zero in fixed-point arithmetic
    #[error("division by zero in fixed-point arithmetic")]
    DivisionByZero,

    /// Intermediate or final result exceeds 256 bits
    #[error("overflow: result exceeds maximum representable value")]
    Overflow,

    /// Tick is outside the representable price range
    #[error("tick {0} is outside the supported range")]
    TickOutOfRange(i32),

    /// Decimal scale cannot be represented in 256 bits
    #[error("decimal scale {0} is not representable")]
    DecimalsOutOfRange(u8),
}
