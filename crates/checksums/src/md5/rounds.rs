//! crates/checksums/src/md5/rounds.rs
//!
//! The MD5 compression function (RFC 1321 section 3.4).
//!
//! The 64 steps are grouped into four rounds of sixteen. Each round is
//! described by a [`Round`] entry holding its mixing function, the schedule
//! that picks a message word for a given step, and its four shift amounts.
//! All register arithmetic wraps at 32 bits.

use super::constants::{BLOCK_LEN, INIT_A, INIT_B, INIT_C, INIT_D, STEPS_PER_ROUND, T};

/// The four chaining registers.
///
/// A fresh value is created for every digest computation and threaded through
/// the block loop by value, so no state survives between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) a: u32,
    pub(crate) b: u32,
    pub(crate) c: u32,
    pub(crate) d: u32,
}

impl State {
    pub(crate) const fn initial() -> Self {
        Self {
            a: INIT_A,
            b: INIT_B,
            c: INIT_C,
            d: INIT_D,
        }
    }

    /// Serialises the registers as `A || B || C || D`, each little-endian.
    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut out = [0_u8; 16];
        for (chunk, register) in out
            .chunks_exact_mut(4)
            .zip([self.a, self.b, self.c, self.d])
        {
            chunk.copy_from_slice(&register.to_le_bytes());
        }
        out
    }
}

/// Static description of one round of sixteen steps.
#[derive(Clone, Copy)]
struct Round {
    mix: fn(u32, u32, u32) -> u32,
    word: fn(usize) -> usize,
    shifts: [u32; 4],
}

#[inline(always)]
const fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
const fn g(b: u32, c: u32, d: u32) -> u32 {
    (b & d) | (c & !d)
}

#[inline(always)]
const fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
const fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

const fn word_sequential(step: usize) -> usize {
    step % 16
}

const fn word_stride_five(step: usize) -> usize {
    (5 * step + 1) % 16
}

const fn word_stride_three(step: usize) -> usize {
    (3 * step + 5) % 16
}

const fn word_stride_seven(step: usize) -> usize {
    (7 * step) % 16
}

const ROUNDS: [Round; 4] = [
    Round {
        mix: f,
        word: word_sequential,
        shifts: [7, 12, 17, 22],
    },
    Round {
        mix: g,
        word: word_stride_five,
        shifts: [5, 9, 14, 20],
    },
    Round {
        mix: h,
        word: word_stride_three,
        shifts: [4, 11, 16, 23],
    },
    Round {
        mix: i,
        word: word_stride_seven,
        shifts: [6, 10, 15, 21],
    },
];

/// Loads the sixteen little-endian message words of a 64-byte block.
#[inline]
fn load_words(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), BLOCK_LEN);
    let mut words = [0_u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Runs the 64 steps over one block and folds the result into `state`.
pub(crate) fn compress(state: State, block: &[u8]) -> State {
    let x = load_words(block);
    let State {
        mut a,
        mut b,
        mut c,
        mut d,
    } = state;

    for (round_index, round) in ROUNDS.iter().enumerate() {
        for offset in 0..STEPS_PER_ROUND {
            let step = round_index * STEPS_PER_ROUND + offset;
            let sum = (round.mix)(b, c, d)
                .wrapping_add(x[(round.word)(step)])
                .wrapping_add(T[step])
                .wrapping_add(a);
            let rotated = sum.rotate_left(round.shifts[offset % 4]).wrapping_add(b);

            a = d;
            d = c;
            c = b;
            b = rotated;
        }
    }

    State {
        a: state.a.wrapping_add(a),
        b: state.b.wrapping_add(b),
        c: state.c.wrapping_add(c),
        d: state.d.wrapping_add(d),
    }
}
