//!
//! Thread-local PRNG backing `Guid` generation.
//!
//! Each thread owns its own `ChaCha20Rng`, so `RefCell` is enough and no
//! locking is involved. A thread that was never seeded draws its seed from
//! OS entropy on first use; call [`seed_from`] beforehand for reproducible
//! Guids.
//!
use crate::log::Topic;
use rand_chacha::{
    ChaCha20Rng,
    rand_core::{RngCore, SeedableRng},
};
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<Option<ChaCha20Rng>> = const { RefCell::new(None) };
}

/// Seed this thread's RNG with a 32-byte value.
pub fn seed_from(seed: [u8; 32]) {
    RNG.with_borrow_mut(|rng| {
        *rng = Some(ChaCha20Rng::from_seed(seed));
    });

    crate::log!(Topic::Rand, Info, "rng seeded explicitly");
}

fn with_rng<T>(f: impl FnOnce(&mut ChaCha20Rng) -> T) -> T {
    RNG.with_borrow_mut(|rng| {
        let rand = rng.get_or_insert_with(|| {
            crate::log!(Topic::Rand, Debug, "rng seeded from entropy");
            ChaCha20Rng::from_seed(::rand::random())
        });

        f(rand)
    })
}

/// Fill the provided buffer with random bytes.
pub(crate) fn fill_bytes(dest: &mut [u8]) {
    with_rng(|rand| rand.fill_bytes(dest));
}

///
/// TESTS
///
