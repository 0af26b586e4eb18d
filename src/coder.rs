//! The erasure coder: generator-matrix construction, encode, decode.
//!
//! Derived impl of `erasure_code.c`'s `ec_init`/`ec_encode`/`ec_decode`,
//! committed to the Cauchy construction per the Design Notes (no
//! construction-time column reduction needed, and invertibility of every
//! k-row subset follows directly from Cauchy matrix theory).

use crate::error::{Error, Result};
use crate::field::Field;
use crate::matrix::Matrix;

/// The standard GF(2^8) parameters this coder is specified to use:
/// `x^8 + x^4 + x^3 + x + 1`.
pub const STANDARD_DEGREE: u32 = 8;
pub const STANDARD_MODULUS: u32 = 283;

/// Holds `k`, `p`, `n = k + p` and the `n x k` generator matrix `G`.
///
/// The top `k` rows of `G` are the identity (systematic code); the bottom
/// `p` rows are the Cauchy parity rows. Any `k`-row subset of `G` is
/// invertible, so any `k` surviving codeword positions suffice to decode.
pub struct Coder<'f> {
    field: &'f Field,
    k: usize,
    p: usize,
    n: usize,
    generator: Matrix,
}

impl<'f> Coder<'f> {
    /// Builds a coder for `k` data bytes and `p` parity bytes against
    /// `field`.
    ///
    /// Fails with [`Error::InvalidParameter`] if `k == 0`, `p == 0`, or
    /// `n = k + p` exceeds `field.order()` (the Cauchy construction needs
    /// every `r + c` value, `r, c` in `0..n`, to be distinct and
    /// representable in the field).
    pub fn new(field: &'f Field, k: usize, p: usize) -> Result<Coder<'f>> {
        if k == 0 || p == 0 {
            return Err(Error::InvalidParameter("k and p must both be >= 1".into()));
        }
        let n = k + p;
        if n > field.order() {
            return Err(Error::InvalidParameter(format!(
                "n = k + p ({}) exceeds field order ({})",
                n,
                field.order()
            )));
        }

        let mut generator = Matrix::create(n, k)?;
        cauchy_matrix_gen(field, &mut generator, k);

        Ok(Coder { field, k, p, n, generator })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// The `n x k` generator matrix, for inspection/printing.
    pub fn generator(&self) -> &Matrix {
        &self.generator
    }

    /// Encodes `data` (length `k`) into a freshly allocated `p`-byte parity
    /// vector. The full codeword is `[data, parity].concat()`, since the
    /// top of `G` is the identity.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut parity = vec![0u8; self.p];
        self.encode_into(data, &mut parity)?;
        Ok(parity)
    }

    /// Encodes into a caller-supplied `parity` buffer without allocating a
    /// result vector (the generator matrix's bottom `p` rows are still
    /// borrowed as a view, but no copy of it is made).
    pub fn encode_into(&self, data: &[u8], parity: &mut [u8]) -> Result<()> {
        if data.len() != self.k {
            return Err(Error::ShapeMismatch(format!(
                "encode: expected {} data bytes, got {}",
                self.k,
                data.len()
            )));
        }
        if parity.len() != self.p {
            return Err(Error::ShapeMismatch(format!(
                "encode: expected {} parity bytes, got {}",
                self.p,
                parity.len()
            )));
        }
        for r in 0..self.p {
            let mut acc = 0u8;
            for c in 0..self.k {
                acc = self.field.add(acc, self.field.mul(self.generator.get(self.k + r, c), data[c]));
            }
            parity[r] = acc;
        }
        Ok(())
    }

    /// Recovers the original `k` data bytes from `input`, a length-`k`
    /// selection of surviving codeword bytes, given the original codeword
    /// `indices` (in `0..n`) those bytes occupied.
    ///
    /// `indices` must be distinct; duplicates are a contract violation that
    /// yields [`Error::DecodeSingular`] rather than undefined behavior.
    pub fn decode(&self, input: &[u8], indices: &[usize]) -> Result<Vec<u8>> {
        let mut result = vec![0u8; self.k];
        self.decode_into(input, indices, &mut result)?;
        Ok(result)
    }

    /// Decodes into a caller-supplied `result` buffer.
    pub fn decode_into(&self, input: &[u8], indices: &[usize], result: &mut [u8]) -> Result<()> {
        if input.len() != self.k || indices.len() != self.k {
            return Err(Error::ShapeMismatch(format!(
                "decode: expected {} input bytes and indices, got {} and {}",
                self.k,
                input.len(),
                indices.len()
            )));
        }
        if result.len() != self.k {
            return Err(Error::ShapeMismatch(format!(
                "decode: expected {} result bytes, got {}",
                self.k,
                result.len()
            )));
        }

        let mut decode_m = Matrix::create(self.k, self.k)?;
        for (i, &row) in indices.iter().enumerate() {
            if row >= self.n {
                return Err(Error::InvalidParameter(format!(
                    "decode: index {} out of range for n = {}",
                    row, self.n
                )));
            }
            for c in 0..self.k {
                decode_m.set(i, c, self.generator.get(row, c));
            }
        }

        let decode_inv = match decode_m.invert(self.field) {
            Ok(inv) => inv,
            Err(Error::Singular) | Err(Error::NonSquare) => return Err(Error::DecodeSingular),
            Err(e) => return Err(e),
        };

        for i in 0..self.k {
            let mut acc = 0u8;
            for c in 0..self.k {
                acc = self.field.add(acc, self.field.mul(decode_inv.get(i, c), input[c]));
            }
            result[i] = acc;
        }

        Ok(())
    }
}

/// Fills `m` (shape `n x k`) as a Cauchy generator matrix: identity on top,
/// `mul_inv(add(r, c))` on the bottom `p = n - k` rows.
fn cauchy_matrix_gen(field: &Field, m: &mut Matrix, k: usize) {
    m.identity();
    for r in k..m.rows() {
        for c in 0..m.cols() {
            let sum = field.add(r as u8, c as u8);
            // sum == 0 only if r == c, which cannot happen since r >= k > c;
            // Coder::new's n <= field.order() bound keeps r, c representable.
            m.set(r, c, field.mul_inv(sum));
        }
    }
}
