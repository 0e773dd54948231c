use crate::NodeSource;
use rand::Rng;

/// A [`NodeSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically, which satisfies the collision
/// requirements for randomly generated node bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl NodeSource for ThreadRandom {
    fn fill_node(&self, node: &mut [u8]) {
        rand::rng().fill(node);
    }
}
