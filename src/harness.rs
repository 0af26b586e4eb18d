//! Exhaustive decode harness (spec §4.5).
//!
//! For a given codeword, enumerates every `C(n, k)` selection of `k`
//! surviving positions, decodes each one (dispatched to a pool of worker
//! threads through a [`BoundedQueue`]), and verifies perfect recovery. This
//! both exercises the core and defines its correctness contract.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::coder::Coder;
use crate::error::Error;
use crate::queue::BoundedQueue;

/// How long a worker waits on an empty queue before re-checking whether
/// enumeration has finished (spec: "a 1-second deadline").
const WORKER_POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// A single combination whose decode didn't reproduce the original data,
/// either because the decoder itself errored or because its output
/// differed from the original (spec §4.5, "Failure semantics").
#[derive(Debug, Clone)]
pub struct Failure {
    pub indices: Vec<usize>,
    pub reason: String,
}

/// Totals and failures from a full `run_exhaustive` sweep.
#[derive(Debug)]
pub struct HarnessReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

impl HarnessReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.passed == self.total
    }
}

#[derive(Default)]
struct Counters {
    passed: usize,
    failed: usize,
}

/// Recursive lexicographic enumerator of `k`-element subsets of
/// `{0, ..., n-1}`, matching the spec's `comb(pos, start)` shape exactly:
/// emit when `pos == k`, otherwise try every `i` in `start..=(n - k + pos)`.
fn comb(n: usize, k: usize, combo: &mut Vec<usize>, pos: usize, start: usize, sink: &mut dyn FnMut(&[usize])) {
    if pos == k {
        sink(&combo[..pos]);
        return;
    }
    for i in start..=(n - k + pos) {
        if combo.len() == pos {
            combo.push(i);
        } else {
            combo[pos] = i;
        }
        comb(n, k, combo, pos + 1, i + 1, sink);
    }
}

/// Collects all `C(n, k)` combinations of `k`-subsets of `0..n`, in
/// lexicographic order. Used by tests and by small harness runs; large
/// sweeps should stream through [`run_exhaustive`] instead of materializing
/// every combination up front.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::with_capacity(binomial(n, k));
    let mut combo = Vec::with_capacity(k);
    comb(n, k, &mut combo, 0, 0, &mut |c| result.push(c.to_vec()));
    result
}

/// `C(n, k)`, computed iteratively to avoid intermediate factorial
/// overflow.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result as usize
}

/// Worker pool size: `std::thread::available_parallelism()`, the Rust
/// analogue of the C original's "online processor count" — unless
/// `EC_HARNESS_WORKERS` is set, the environment-configured alternative the
/// spec's Design Notes explicitly allow.
fn worker_count() -> usize {
    if let Ok(v) = env::var("EC_HARNESS_WORKERS") {
        if let Ok(n) = v.parse::<usize>() {
            if n > 0 {
                return n;
            }
        }
    }
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Runs the full `C(n, k)` exhaustive decode sweep over `codeword`
/// (expected to be `data` encoded by `coder`), returning totals and any
/// failures.
///
/// Workers pop index sets from a bounded queue, gather the corresponding
/// `codeword` bytes, call `coder.decode`, and compare against `data`. A
/// decode error and a successful-but-wrong decode both count as failures.
pub fn run_exhaustive(coder: &Coder, data: &[u8], codeword: &[u8]) -> HarnessReport {
    let k = coder.k();
    let n = coder.n();
    let total = binomial(n, k);

    let queue: BoundedQueue<Vec<usize>> = BoundedQueue::new(worker_count().max(1) * 4);
    let counters = Mutex::new(Counters::default());
    let failures = Mutex::new(Vec::new());
    let work_done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..worker_count() {
            scope.spawn(|| loop {
                match queue.timed_get(WORKER_POLL_TIMEOUT) {
                    Ok(Some(indices)) => {
                        let to_decode: Vec<u8> = indices.iter().map(|&i| codeword[i]).collect();
                        let outcome = coder.decode(&to_decode, &indices);
                        let mut c = counters.lock().unwrap();
                        match outcome {
                            Ok(decoded) if decoded == data => c.passed += 1,
                            Ok(decoded) => {
                                c.failed += 1;
                                failures.lock().unwrap().push(Failure {
                                    indices,
                                    reason: format!("decoded {:?}, expected {:?}", decoded, data),
                                });
                            }
                            Err(e) => {
                                c.failed += 1;
                                failures.lock().unwrap().push(Failure { indices, reason: e.to_string() });
                            }
                        }
                    }
                    Ok(None) => break,
                    Err(Error::Timeout) => {
                        if work_done.load(Ordering::Acquire) {
                            break;
                        }
                    }
                    Err(e) => unreachable!("queue get should only ever time out: {:?}", e),
                }
            });
        }

        let mut combo = Vec::with_capacity(k);
        comb(n, k, &mut combo, 0, 0, &mut |c| {
            queue.put(c.to_vec());
        });
        work_done.store(true, Ordering::Release);
        queue.close();
    });

    let counters = counters.into_inner().unwrap();
    HarnessReport {
        total,
        passed: counters.passed,
        failed: counters.failed,
        failures: failures.into_inner().unwrap(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coder::{STANDARD_DEGREE, STANDARD_MODULUS};
    use crate::field::Field;
    use itertools::Itertools;

    #[test]
    fn enumerator_matches_itertools_combinations() {
        for &(n, k) in &[(5usize, 3usize), (6, 2), (8, 4), (1, 1)] {
            let ours: Vec<Vec<usize>> = combinations(n, k);
            let expected: Vec<Vec<usize>> = (0..n).combinations(k).collect();
            assert_eq!(ours, expected);
            assert_eq!(ours.len(), binomial(n, k));
        }
    }

    #[test]
    fn binomial_matches_known_values() {
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(12, 8), 495);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(4, 5), 0);
    }

    #[test]
    fn exhaustive_k3_p2_all_pass() {
        let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
        let coder = Coder::new(&field, 3, 2).unwrap();
        let data = [0x01u8, 0x02, 0x03];
        let parity = coder.encode(&data).unwrap();
        let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();

        let report = run_exhaustive(&coder, &data, &codeword);
        assert_eq!(report.total, 10);
        assert_eq!(report.passed, 10);
        assert_eq!(report.failed, 0);
        assert!(report.all_passed());
    }

    #[test]
    fn exhaustive_k8_p4_all_pass() {
        let field = Field::new(STANDARD_DEGREE, STANDARD_MODULUS).unwrap();
        let coder = Coder::new(&field, 8, 4).unwrap();
        let data: Vec<u8> = (0..8).map(|i| (i * 17 + 3) as u8).collect();
        let parity = coder.encode(&data).unwrap();
        let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();

        let report = run_exhaustive(&coder, &data, &codeword);
        assert_eq!(report.total, 495);
        assert!(report.all_passed());
    }
}
