//! Resolver configuration.
//!
//! Read from the `resolver` section of a `tyres.json` file:
//!
//! ```json
//! { "resolver": { "maxChainDepth": 64 } }
//! ```

use crate::recursion::{MAX_ALIAS_CHAIN_DEPTH, RecursionProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Maximum number of declarations followed from one annotation.
    pub max_chain_depth: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_chain_depth: MAX_ALIAS_CHAIN_DEPTH,
        }
    }
}

impl ResolverConfig {
    pub(crate) fn recursion_profile(self) -> RecursionProfile {
        if self.max_chain_depth == MAX_ALIAS_CHAIN_DEPTH {
            RecursionProfile::AliasChain
        } else {
            RecursionProfile::Custom {
                max_depth: self.max_chain_depth,
            }
        }
    }
}
