//! The random-source collaborator (spec §6): supplies `k` bytes of data
//! whose values the implementation cannot predict. Out of scope for the
//! core per spec §1 — this is a thin wrapper over `rand`, not an engineered
//! subsystem.

use rand::Rng;

/// Fills `out` with uniformly random bytes using the thread-local RNG.
pub fn fill_random(out: &mut [u8]) {
    let mut rng = rand::thread_rng();
    rng.fill(out);
}

/// Returns a freshly allocated vector of `len` uniformly random bytes.
pub fn random_vec(len: usize) -> Vec<u8> {
    let mut v = vec![0u8; len];
    fill_random(&mut v);
    v
}
