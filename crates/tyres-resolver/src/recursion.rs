//! Cycle detection and depth limiting for declaration chains.
//!
//! `RecursionGuard` tracks the names currently on a resolution chain. It
//! combines two safety mechanisms:
//! 1. **Cycle detection** via a visiting set (`FxHashSet<K>`)
//! 2. **Depth limiting** so a pathological map cannot exhaust time or stack
//!
//! The chain itself is kept in order so a detected cycle can be reported
//! name by name.
//!
//! ```ignore
//! let mut guard = RecursionGuard::with_profile(RecursionProfile::AliasChain);
//!
//! match guard.enter(name) {
//!     RecursionResult::Entered => follow(name),
//!     RecursionResult::Cycle => report(guard.cycle_from(name)),
//!     RecursionResult::DepthExceeded => bail(),
//! }
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::hash::Hash;

/// Default limit on the number of declarations followed in one chain.
pub const MAX_ALIAS_CHAIN_DEPTH: u32 = 512;

/// Named recursion limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Following alias / enum declarations from a type reference.
    ///
    /// depth = 512
    AliasChain,

    /// Custom limits for configured resolvers and tests.
    Custom { max_depth: u32 },
}

impl RecursionProfile {
    /// Maximum chain depth for this profile.
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::AliasChain => MAX_ALIAS_CHAIN_DEPTH,
            Self::Custom { max_depth } => max_depth,
        }
    }
}

/// Result of attempting to enter a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key is already on the chain.
    Cycle,
    /// Maximum chain depth exceeded.
    DepthExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    #[inline]
    pub fn is_cycle(self) -> bool {
        matches!(self, Self::Cycle)
    }
}

/// Tracks the keys on the current chain.
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    path: SmallVec<[K; 8]>,
    max_depth: u32,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    pub fn new(max_depth: u32) -> Self {
        Self {
            visiting: FxHashSet::default(),
            path: SmallVec::new(),
            max_depth,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth())
    }

    /// Try to push `key` onto the chain.
    ///
    /// On [`RecursionResult::Entered`] the key stays on the chain until
    /// [`leave`](Self::leave) is called with it.
    pub fn enter(&mut self, key: K) -> RecursionResult {
        if self.visiting.contains(&key) {
            return RecursionResult::Cycle;
        }
        if self.path.len() as u32 >= self.max_depth {
            return RecursionResult::DepthExceeded;
        }

        self.visiting.insert(key);
        self.path.push(key);
        RecursionResult::Entered
    }

    /// Pop `key`, which must be the most recently entered key.
    pub fn leave(&mut self, key: K) {
        let was_present = self.visiting.remove(&key);
        debug_assert!(
            was_present,
            "RecursionGuard::leave() called with a key that is not on the chain"
        );
        debug_assert!(
            self.path.last() == Some(&key),
            "RecursionGuard::leave() called out of order"
        );
        self.path.pop();
    }

    /// The cycle closed by `key`: the chain from `key`'s first occurrence,
    /// followed by `key` again. Empty if `key` is not on the chain.
    pub fn cycle_from(&self, key: K) -> Vec<K> {
        match self.path.iter().position(|k| *k == key) {
            Some(start) => {
                let mut cycle: Vec<K> = self.path[start..].to_vec();
                cycle.push(key);
                cycle
            }
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn is_visiting(&self, key: &K) -> bool {
        self.visiting.contains(key)
    }

    /// Number of keys on the chain.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.path.len() as u32
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The chain in traversal order.
    pub fn path(&self) -> &[K] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut guard = RecursionGuard::with_profile(RecursionProfile::AliasChain);
        assert_eq!(guard.max_depth(), MAX_ALIAS_CHAIN_DEPTH);

        assert!(guard.enter("A").is_entered());
        assert!(guard.enter("B").is_entered());
        assert_eq!(guard.depth(), 2);
        assert_eq!(guard.path(), &["A", "B"]);

        guard.leave("B");
        assert!(!guard.is_visiting(&"B"));
        assert!(guard.is_visiting(&"A"));
        assert_eq!(guard.depth(), 1);
    }

    #[test]
    fn test_cycle_detection() {
        let mut guard = RecursionGuard::new(10);
        guard.enter("Start");
        guard.enter("A");
        guard.enter("B");

        assert!(guard.enter("A").is_cycle());
        assert_eq!(guard.cycle_from("A"), vec!["A", "B", "A"]);
        assert!(guard.cycle_from("Missing").is_empty());
        // A denied entry leaves the chain untouched.
        assert_eq!(guard.depth(), 3);
    }

    #[test]
    fn test_depth_limit() {
        let mut guard = RecursionGuard::with_profile(RecursionProfile::Custom { max_depth: 2 });
        assert_eq!(guard.enter(1u32), RecursionResult::Entered);
        assert_eq!(guard.enter(2u32), RecursionResult::Entered);
        assert_eq!(guard.enter(3u32), RecursionResult::DepthExceeded);
        // Cycle takes precedence over the depth limit.
        assert_eq!(guard.enter(1u32), RecursionResult::Cycle);
    }
}
