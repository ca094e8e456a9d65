//! Drills Core - domain and application layers for the `cash` and `mario`
//! console drills.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         drills-cli (cash, mario)        │
//! │     (Builds services, maps errors)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ChangeService, PyramidService)      │
//! │   Prompt loop + output orchestration    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │               (Console)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    drills-adapters (Infrastructure)     │
//! │     (StreamConsole, MemoryConsole)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (calculate_coins, Pyramid, parsers)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drills_core::domain::{Cents, RowCount, calculate_coins, render_pyramid};
//!
//! assert_eq!(calculate_coins(Cents::new(41)), 4);
//!
//! let rows = RowCount::new(3).unwrap();
//! assert_eq!(render_pyramid(rows, '#'), vec!["  #", " ##", "###"]);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ChangeService, Prompter, PyramidService, ports::Console};
    pub use crate::domain::{
        Cents, CoinBreakdown, DENOMINATIONS, Pyramid, RowCount, calculate_coins, parse_owed,
        parse_rows, render_pyramid, tally_coins,
    };
    pub use crate::error::{DrillsError, DrillsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
