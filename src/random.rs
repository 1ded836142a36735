use rand::rand_core::impls;
use rand::{Rng, RngCore};

/// Draws `batch_size` integers uniformly over the whole `i64` range.
pub fn generate<R: Rng + ?Sized>(batch_size: usize, rng: &mut R) -> Vec<i64> {
    (0..batch_size).map(|_| rng.random::<i64>()).collect()
}

/// Draws `batch_size` integers from fresh OS-seeded entropy.
pub fn generate_from_entropy(batch_size: usize) -> Vec<i64> {
    generate(batch_size, &mut rand::rng())
}

/// xoroshiro128+ over signed 64-bit state.
///
/// A given seed yields the same input sequence on every platform.
/// Shifts are arithmetic on the signed state, which means `rotl` smears the
/// sign bit instead of being a true rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    s: [i64; 2],
}

impl Xoroshiro128Plus {
    pub fn seed_from(seed: u64) -> Self {
        let seed = seed as i64;
        let mut rng = Xoroshiro128Plus { s: [seed, seed] };
        let seed0 = seed.wrapping_add(rng.xorshift64());
        let seed1 = seed.wrapping_add(rng.xorshift64());
        rng.s = [seed0, seed1];
        rng
    }

    pub fn next_i64(&mut self) -> i64 {
        let [s0, mut s1] = self.s;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s[0] = rotl(s0, 24) ^ s1 ^ (s1 << 16);
        self.s[1] = rotl(s1, 37);

        result
    }

    // Only used while seeding.
    fn xorshift64(&mut self) -> i64 {
        let mut x = self.s[0];
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.s[0] = x;
        x
    }
}

fn rotl(x: i64, k: u32) -> i64 {
    (x << k) | (x >> (64 - k))
}

impl RngCore for Xoroshiro128Plus {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_i64() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
