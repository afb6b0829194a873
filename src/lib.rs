//! # Errors as Values
//!
//! Small, runnable examples contrasting two ways of dealing with things that
//! can go wrong, and showing how Rust turns failure into an ordinary value.
//!
//! ## Patterns Covered
//!
//! 1. **Safe indexing** - `slice::get` instead of an out-of-bounds panic
//! 2. **Ask forgiveness (EAFP)** - try the access, recover once at the end
//! 3. **Look before you leap (LBYL)** - check the precondition, then act
//! 4. **Swallowing async errors** - a quotation that turns any lookup error into zero
//! 5. **Errors as values** - the same quotation with a typed [`LookupFailure`]
//! 6. **Explicit deadlines** - racing a lookup against a timer on request
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin quotation_demo
//! RUST_LOG=debug cargo run --bin quotation_demo -- --pricing pricing.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the library error types
//! - `anyhow` - Opaque errors for the "anything may fail" lookup
//! - `tokio` - Async runtime and timers
//! - `serde` / `toml` / `serde_json` - Pricing rules and user records
//! - `tracing` - Logging the failures that get recovered

pub mod config;
pub mod directory;
pub mod error;
pub mod greeting;
pub mod indexing;
pub mod model;
pub mod quotation;

pub use config::PricingRule;
pub use directory::InMemoryDirectory;
pub use error::{AccessError, ConfigError, LookupFailure};
pub use greeting::{greet, greet_safe};
pub use indexing::square_of_second_element;
pub use model::{LookupResult, User, UserDetails};
pub use quotation::{
    get_quotation_with_exception_handling, get_quotation_with_result_type, try_quotation,
    with_deadline, Quoter, NO_QUOTATION,
};
