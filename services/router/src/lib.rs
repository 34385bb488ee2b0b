//! # Quote Router - Layered Source Resolution
//!
//! ## Purpose
//!
//! Owns the resolution table that decides which price source answers each
//! query, and delegates the quote to whichever source wins. Precedence is
//! strict and deterministic — pair override, then the selling token's
//! override, then the default — because these rules govern real value
//! transfer and must never depend on iteration order or timing.
//!
//! ## Integration Points
//!
//! - **Input Sources**: `SourceHandle`s built from the adapters in
//!   `quote-sources`; caller identity for gated mutation
//! - **Output Destinations**: the resolved source's answer, returned to the
//!   caller unmodified — no post-processing, slippage, or fee logic here
//! - **Failure policy**: resolution happens once per query; if the chosen
//!   source fails, the whole query fails. The router never substitutes a
//!   fallback source.
//!
//! ## Ownership Model
//!
//! One `Router` instance owns the whole table. Mutators take `&mut self` and
//! an explicit caller identity checked against the owner fixed at
//! construction; queries take `&self`. Each top-level call is atomic, and no
//! upstream answer is ever cached across calls.

pub mod router;

pub use router::Router;
