//! holdem-equity: exact heads-up Texas Hold'em equity
//!
//! Goals:
//! - Exhaustive enumeration of every unknown turn/river completion
//! - Deterministic results; no sampling
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: equity on the turn
//! ```
//! use holdem_equity::equity::{calculate, count_outcomes, EquityRequest};
//!
//! let req = EquityRequest::new(
//!     "AS AH".parse().unwrap(),
//!     "KS KH".parse().unwrap(),
//!     "AD KD 2C 7H".parse().unwrap(),
//! ).unwrap();
//!
//! let counts = count_outcomes(&req).unwrap();
//! assert_eq!(counts.total(), 44);
//!
//! let eq = calculate(&req).unwrap();
//! println!("{eq}");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem-equity -- --p1 "As Ah" --p2 "Ks Kh" --board "Ad Kd 2c 7h"
//! ```
//!
//! Build with `--features parallel` to spread completions across a rayon pool.

pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
