//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no external rand crate.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Random integer in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits → uniform in [0, 1) with full f32 mantissa coverage.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Random float in [lo, hi).
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// True with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}
