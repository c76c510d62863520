use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ledger::{LedgerError, LedgerResult};

pub const DEFAULT_PREFIX: &str = "TKT";
pub const DEFAULT_RANGE: u32 = 9999;

/// Random draws before falling back to probing for a free number.
const MAX_RANDOM_ATTEMPTS: usize = 32;

/// Issues `<prefix><n>` ids with `n` in `[0, range)`.
///
/// Every number handed out is remembered for the generator's lifetime, so an
/// id is never issued twice, even after its ticket is cancelled.
pub struct TicketIdGenerator {
    rng: StdRng,
    prefix: String,
    range: u32,
    issued: HashSet<u32>,
}

impl TicketIdGenerator {
    pub fn new(prefix: impl Into<String>, range: u32) -> Self {
        Self::with_rng(prefix, range, StdRng::from_entropy())
    }

    /// Deterministic sequence, for tests.
    pub fn seeded(prefix: impl Into<String>, range: u32, seed: u64) -> Self {
        Self::with_rng(prefix, range, StdRng::seed_from_u64(seed))
    }

    fn with_rng(prefix: impl Into<String>, range: u32, rng: StdRng) -> Self {
        Self {
            rng,
            prefix: prefix.into(),
            range,
            issued: HashSet::new(),
        }
    }

    pub fn next_id(&mut self) -> LedgerResult<String> {
        if self.issued.len() as u64 >= self.range as u64 {
            return Err(LedgerError::IdSpaceExhausted { range: self.range });
        }

        let mut candidate = 0;
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            candidate = self.rng.gen_range(0..self.range);
            if self.issued.insert(candidate) {
                return Ok(self.format(candidate));
            }
        }

        // Space is nearly full; walk forward from the last draw.
        loop {
            candidate = (candidate + 1) % self.range;
            if self.issued.insert(candidate) {
                tracing::debug!(issued = self.issued.len(), "Ticket id found by probing");
                return Ok(self.format(candidate));
            }
        }
    }

    fn format(&self, n: u32) -> String {
        format!("{}{}", self.prefix, n)
    }
}

impl Default for TicketIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_carry_prefix_and_stay_in_range() {
        let mut generator = TicketIdGenerator::seeded("TKT", 9999, 7);
        for _ in 0..100 {
            let id = generator.next_id().unwrap();
            let n: u32 = id.strip_prefix("TKT").unwrap().parse().unwrap();
            assert!(n < 9999);
        }
    }

    #[test]
    fn test_ids_never_repeat_until_exhausted() {
        let mut generator = TicketIdGenerator::seeded("T", 50, 42);
        let ids: HashSet<String> = (0..50).map(|_| generator.next_id().unwrap()).collect();
        assert_eq!(ids.len(), 50);

        assert!(matches!(
            generator.next_id(),
            Err(LedgerError::IdSpaceExhausted { range: 50 })
        ));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = TicketIdGenerator::seeded("TKT", 9999, 1);
        let mut b = TicketIdGenerator::seeded("TKT", 9999, 1);
        assert_eq!(a.next_id().unwrap(), b.next_id().unwrap());
    }
}
