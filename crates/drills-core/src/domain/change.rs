//! Change making over the fixed coin set {25, 10, 5, 1}.
//!
//! The greedy reduction is only optimal because this set is canonical. Do
//! not reuse [`tally_coins`] for an arbitrary denomination list.

use std::fmt;

/// Coin values, largest first. The greedy loop depends on this order.
pub const DENOMINATIONS: [u64; 4] = [25, 10, 5, 1];

// ── Cents ────────────────────────────────────────────────────────────────────

/// An amount owed, in indivisible currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Cents {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── CoinBreakdown ────────────────────────────────────────────────────────────

/// How many coins of each denomination a reduction handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinBreakdown {
    counts: [u64; DENOMINATIONS.len()],
}

impl CoinBreakdown {
    /// Total number of coins.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of coins used for `denomination`, or `None` if it is not part
    /// of the coin set.
    pub fn count_of(&self, denomination: u64) -> Option<u64> {
        DENOMINATIONS
            .iter()
            .position(|&d| d == denomination)
            .map(|slot| self.counts[slot])
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        DENOMINATIONS.iter().copied().zip(self.counts.iter().copied())
    }

    /// Sum of the coin values; equals the amount that was reduced.
    pub fn value(&self) -> Cents {
        Cents(self.iter().map(|(d, n)| d * n).sum())
    }
}

impl fmt::Display for CoinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denomination, count) in self.iter().filter(|&(_, n)| n > 0) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{count}x{denomination}")?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

// ── Reduction ────────────────────────────────────────────────────────────────

/// Greedy reduction: take as many of the largest coin that fits as
/// possible, then move on to the next, until nothing is owed.
///
/// Each pass exhausts one denomination, so the loop runs at most
/// `DENOMINATIONS.len()` times whatever the amount.
pub fn tally_coins(owed: Cents) -> CoinBreakdown {
    let mut remaining = owed.get();
    let mut breakdown = CoinBreakdown::default();

    while remaining > 0 {
        // Unreachable while 1 is a denomination; stops the loop if it is not.
        let Some(slot) = DENOMINATIONS.iter().position(|&d| d <= remaining) else {
            break;
        };
        let coin = DENOMINATIONS[slot];
        breakdown.counts[slot] += remaining / coin;
        remaining %= coin;
    }

    breakdown
}

/// Minimum number of coins needed to pay `owed`.
pub fn calculate_coins(owed: Cents) -> u64 {
    tally_coins(owed).total()
}
