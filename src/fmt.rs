//! The printer collaborator (spec §6): formats byte arrays and matrices for
//! diagnostics. Optional and out of scope for the core — it never
//! participates in correctness, only in human-readable output for the CLI
//! binaries.

use crate::matrix::Matrix;

/// Formats a byte slice as space-separated two-digit hex, e.g. `"de ad be
/// ef"`.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

/// Formats a slice of indices as space-separated decimal.
pub fn format_indices(indices: &[usize]) -> String {
    indices.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

/// Renders a matrix as a hex grid with row/column headers, in the style of
/// `gf_matrix_print`/`gf_print_mult_tbl` from the reference implementation.
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    out.push_str("     ");
    for c in 0..m.cols() {
        out.push_str(&format!("{:02x} ", c));
    }
    out.push('\n');
    for r in 0..m.rows() {
        out.push_str(&format!("{:02x} | ", r));
        for c in 0..m.cols() {
            out.push_str(&format!("{:02x} ", m.get(r, c)));
        }
        out.push('\n');
    }
    out
}

/// Hex-encoded SHA-256 digest of `bytes`, for fingerprinting a codeword or
/// vector across diagnostic print-outs without printing the whole thing.
/// Generalizes the teacher's `print_sha256` test helper into a reusable
/// formatter.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::Digest;
    let mut digest = sha2::Sha256::new();
    digest.update(bytes);
    digest.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn formats_bytes_as_hex() {
        assert_eq!(format_bytes(&[0xde, 0xad, 0xbe, 0xef]), "de ad be ef");
    }

    #[test]
    fn formats_indices_as_decimal() {
        assert_eq!(format_indices(&[0, 1, 4, 5]), "0 1 4 5");
    }

    #[test]
    fn formats_matrix_with_headers() {
        let mut m = Matrix::create(2, 2).unwrap();
        m.identity();
        let text = format_matrix(&m);
        assert!(text.contains("00 | 01 00"));
        assert!(text.contains("01 | 00 01"));
    }

    #[test]
    fn sha256_hex_is_stable_and_deterministic() {
        let digest = sha256_hex(b"de ad be ef");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, sha256_hex(b"de ad be ef"));
        assert_ne!(digest, sha256_hex(b"de ad be ee"));
    }
}
