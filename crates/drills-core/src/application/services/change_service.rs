//! Change Service - the `cash` program flow.
//!
//! 1. Ask how much is owed (≥ 0)
//! 2. Count coins with the greedy reduction
//! 3. Print the count on its own line

use tracing::{debug, info, instrument};

use crate::{
    application::{Prompter, ports::Console},
    domain::{Cents, parse_owed, tally_coins},
    error::DrillsResult,
};

pub const OWED_PROMPT: &str = "How much? ";

pub struct ChangeService {
    console: Box<dyn Console>,
}

impl ChangeService {
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Prompt until a non-negative amount is entered.
    pub fn request_owed(&mut self) -> DrillsResult<Cents> {
        Prompter::request(self.console.as_mut(), OWED_PROMPT, parse_owed)
    }

    /// Run the whole program once and return the coin count that was printed.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> DrillsResult<u64> {
        let owed = self.request_owed()?;

        let breakdown = tally_coins(owed);
        let coins = breakdown.total();
        info!(%owed, coins, "change calculated");
        debug!(%breakdown, "coin breakdown");

        self.console.write(&format!("{coins}\n"))?;
        Ok(coins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConsole;

    #[test]
    fn prints_count_after_valid_amount() {
        let mut console = MockConsole::new();
        let mut lines = vec!["-3\n".to_owned(), "99\n".to_owned()].into_iter();
        console.expect_read_line().returning(move || Ok(lines.next()));
        console
            .expect_write()
            .withf(|text| text == OWED_PROMPT)
            .times(2)
            .returning(|_| Ok(()));
        console
            .expect_write()
            .withf(|text| text == "9\n")
            .times(1)
            .returning(|_| Ok(()));

        let mut service = ChangeService::new(Box::new(console));
        assert_eq!(service.run().unwrap(), 9);
    }

    #[test]
    fn zero_owed_prints_zero() {
        let mut console = MockConsole::new();
        let mut lines = vec!["0\n".to_owned()].into_iter();
        console.expect_read_line().returning(move || Ok(lines.next()));
        console
            .expect_write()
            .withf(|text| text == OWED_PROMPT)
            .returning(|_| Ok(()));
        console
            .expect_write()
            .withf(|text| text == "0\n")
            .times(1)
            .returning(|_| Ok(()));

        let mut service = ChangeService::new(Box::new(console));
        assert_eq!(service.run().unwrap(), 0);
    }
}
