//! Domain layer: the two computations and the input parsers.
//!
//! Everything in here is pure. Nothing reads from or writes to a console;
//! the application layer owns that.

pub mod change;
pub mod error;
pub mod pyramid;
pub mod validation;

pub use change::{Cents, CoinBreakdown, DENOMINATIONS, calculate_coins, tally_coins};
pub use error::DomainError;
pub use pyramid::{DEFAULT_MARKER, Pyramid, RowCount, render_pyramid};
pub use validation::{parse_integer, parse_owed, parse_rows};
