//! Gather configuration parameters.

/// How much checking a gather performs on its index list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndexPolicy {
    /// No checks. The caller guarantees every index is in range; a bad
    /// index panics during the copy.
    Unchecked,
    /// Every index must be in range. Repeated indices are allowed and
    /// copy the same source record more than once.
    Bounded,
    /// Every index must be in range and no index may repeat.
    #[default]
    Unique,
}

impl IndexPolicy {
    /// Whether this policy checks index bounds.
    pub fn checks_bounds(self) -> bool {
        !matches!(self, Self::Unchecked)
    }

    /// Whether this policy rejects repeated indices.
    pub fn checks_uniqueness(self) -> bool {
        matches!(self, Self::Unique)
    }
}

/// Configuration for policy-driven gathers.
///
/// Immutable once built; cheap to copy into every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GatherConfig {
    /// Index checks performed before copying.
    ///
    /// Default: [`IndexPolicy::Unique`].
    pub policy: IndexPolicy,
}

impl GatherConfig {
    /// Default policy: bounds and uniqueness checks.
    pub const DEFAULT_POLICY: IndexPolicy = IndexPolicy::Unique;

    /// Create a config with the default policy.
    pub fn new() -> Self {
        Self {
            policy: Self::DEFAULT_POLICY,
        }
    }

    /// Replace the index policy.
    pub fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self::new()
    }
}
