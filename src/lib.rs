//! A small Reed-Solomon-style erasure coding engine over GF(2^m), m <= 8.
//!
//! Given `k` data bytes, [`coder::Coder`] produces `p` parity bytes such
//! that the resulting `n = k + p` codeword tolerates the loss of any `p`
//! symbols: from any `k` of the `n` encoded bytes, together with the
//! positions those bytes occupied, the original `k` data bytes can be
//! reconstructed.
//!
//! Layers, leaves first: [`field`] (GF(2^m) arithmetic), [`matrix`] (dense
//! matrices over a field), [`coder`] (generator matrix, encode, decode),
//! [`queue`] (a bounded blocking FIFO), and [`harness`] (an exhaustive
//! decode verifier built on the other four). [`rng`] and [`fmt`] are thin,
//! deliberately unengineered collaborators — random data generation and
//! diagnostic printing — that never participate in correctness.

pub mod coder;
pub mod error;
pub mod field;
pub mod fmt;
pub mod harness;
pub mod matrix;
pub mod queue;
pub mod rng;

pub use coder::Coder;
pub use error::{Error, Result};
pub use field::Field;
pub use matrix::Matrix;
pub use queue::BoundedQueue;
