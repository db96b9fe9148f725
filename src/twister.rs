use rand::{Error as RandError, RngCore, SeedableRng};

use crate::error::{Result, TwisterError};
use crate::seed::time_seed;

/// Number of words in the state vector.
const N: usize = 624;
/// Recurrence offset into the state vector.
const M: usize = 397;
/// Word width the parameterisation was designed for.
const W: u32 = 32;
/// Split point between the upper and lower masks.
const R: u32 = 31;

const WORD_MASK: u64 = (1 << W) - 1;
const UPPER_MASK: u64 = WORD_MASK << R;
const LOWER_MASK: u64 = WORD_MASK >> (W - R);

/// Twist constant of the recurrence matrix.
const A: u64 = 0x9908_b0df;

// Tempering shifts and masks.
const U: u32 = 11;
const S: u32 = 7;
const B: u64 = 0x9d2c_5680;
const T: u32 = 15;
const C: u64 = 0xefc6_0000;
const L: u32 = 18;

/// Knuth multiplier used by the seeding recurrence.
const F: u64 = 1_812_433_253;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 19_650_218;

/// Consecutive rejected words tolerated before an accepted draw gives up.
const RETRY_LIMIT: usize = 10_000;

/// Inclusive bounds a raw word must fall inside before it counts as
/// generator output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    lower: u64,
    upper: u64,
}

impl Window {
    /// The bounds the generator was tuned with. Roughly half of all raw
    /// words land inside, so an accepted draw costs about two raw draws
    /// on average.
    pub const DEFAULT: Self = Self {
        lower: 1_000_000_000_000_000_000,
        upper: 10_000_000_000_000_000_000,
    };

    /// Panics unless `lower < upper`.
    pub fn new(lower: u64, upper: u64) -> Self {
        assert!(lower < upper, "window bounds out of order: [{lower}, {upper}]");
        Self { lower, upper }
    }

    pub fn lower(self) -> u64 {
        self.lower
    }

    pub fn upper(self) -> u64 {
        self.upper
    }

    fn contains(self, word: u64) -> bool {
        (self.lower..=self.upper).contains(&word)
    }

    /// Position of `word` inside the window as a fraction of its span,
    /// 0.0 at the lower bound and 1.0 at the upper.
    fn unit(self, word: u64) -> f64 {
        (word as f64 - self.lower as f64) / (self.upper as f64 - self.lower as f64)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A 64-bit rework of the 624-word Mersenne twister.
///
/// The classic 32-bit recurrence and tempering constants are applied to
/// unmasked 64-bit words, so state words outgrow 32 bits after seeding and
/// raw output covers the full `u64` range. Draws that feed the typed
/// accessors are filtered through an acceptance [`Window`] first.
#[derive(Clone)]
pub struct Twister64 {
    state: [u64; N],
    index: usize,
    window: Window,
}

impl Default for Twister64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Twister64 {
    /// Seeds all 624 state words from `seed`. Same seed, same sequence,
    /// on every platform.
    pub fn new(seed: u64) -> Self {
        Self::with_window(seed, Window::DEFAULT)
    }

    /// As [`new`](Self::new), with caller-chosen acceptance bounds.
    pub fn with_window(seed: u64, window: Window) -> Self {
        let mut state = [0; N];
        state[0] = seed;

        let mut word = seed;
        for (i, slot) in state.iter_mut().enumerate().skip(1) {
            word = F.wrapping_mul(word ^ (word >> (W - 2))).wrapping_add(i as u64);
            *slot = word;
        }

        Self { state, index: 0, window }
    }

    /// Seeds from a scrambling of the system clock.
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Produces the next raw tempered word and advances the state one step.
    ///
    /// The recurrence writes its new state word one slot ahead of the
    /// cursor and then moves the cursor onto it, wrapping at the end of
    /// the vector, so the cursor never leaves `0..624`.
    pub fn next_word(&mut self) -> u64 {
        let k = self.index;

        let j = (k + 1) % N;
        let mixed = (self.state[k] & UPPER_MASK) | (self.state[j] & LOWER_MASK);
        let mut twisted = mixed >> 1;
        if mixed & 1 == 1 {
            twisted ^= A;
        }

        let j = (k + M) % N;
        let word = self.state[j] ^ twisted;
        self.state[(k + 1) % N] = word;
        self.index = (k + 1) % N;

        let y = word ^ (word >> U);
        let y = y ^ ((y << S) & B);
        let y = y ^ ((y << T) & C);
        y ^ (y >> L)
    }

    /// Draws raw words until one lands inside the acceptance window and
    /// returns it. Rejected words are discarded. Gives up with
    /// [`TwisterError::RangeUnsatisfiable`] after 10_000 consecutive
    /// rejections so a window no output can hit cannot hang the caller.
    pub fn accepted_word(&mut self) -> Result<u64> {
        for _ in 0..RETRY_LIMIT {
            let word = self.next_word();
            if self.window.contains(word) {
                return Ok(word);
            }
        }

        Err(TwisterError::RangeUnsatisfiable {
            lower: self.window.lower,
            upper: self.window.upper,
            rejected: RETRY_LIMIT,
        })
    }

    /// Exactly `count` accepted words, in draw order. Rejected words do
    /// not count towards `count`.
    pub fn accepted_words(&mut self, count: usize) -> Result<Vec<u64>> {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(self.accepted_word()?);
        }

        Ok(words)
    }

    /// A double in `[0, range]`: the accepted word's position inside the
    /// window, rescaled so the lower bound maps to 0.0 and the upper
    /// bound to `range`.
    pub fn rand_double(&mut self, range: f64) -> Result<f64> {
        let word = self.accepted_word()?;
        Ok(self.window.unit(word) * range)
    }

    /// As [`rand_double`](Self::rand_double), narrowed to single precision
    /// on return. The scaling itself runs in double precision.
    pub fn rand_float(&mut self, range: f32) -> Result<f32> {
        let word = self.accepted_word()?;
        Ok((self.window.unit(word) * f64::from(range)) as f32)
    }

    /// An integer in `[0, range]`, both ends reachable. `range` must be
    /// non-negative.
    pub fn rand_int(&mut self, range: i32) -> Result<i32> {
        let word = self.accepted_word()?;
        Ok(scale_int(self.window.unit(word), range))
    }
}

/// Truncating map from a unit fraction onto `0..=range`. Scaling by
/// `range + 1` keeps the top value reachable under truncation; the `min`
/// folds the exact 1.0 draw back onto `range`.
fn scale_int(unit: f64, range: i32) -> i32 {
    ((unit * (f64::from(range) + 1.0)) as i32).min(range)
}

impl RngCore for Twister64 {
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Twister64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        // The default impl remixes the seed; this must agree with new().
        Self::new(seed)
    }
}
