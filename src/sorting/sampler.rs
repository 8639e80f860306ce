use std::time::{SystemTime, UNIX_EPOCH};

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

/// Linear congruential generator for bar heights in `1..=100`.
///
/// Deterministic for a given seed, which keeps traces reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySampler {
    state: u64,
}

impl ArraySampler {
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    pub fn next_value(&mut self) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        let span = u64::from(MAX_VALUE - MIN_VALUE + 1);
        MIN_VALUE + ((self.next_u64() >> 33) % span) as u32
    }

    pub fn sample(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_value()).collect()
    }
}
