// Path: crates/types/src/chain.rs
//! Chain identities and the per-chain parameter table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A unique identifier for a network, used as the sole key into every
/// [`ChainValue`] table.
#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash,
)]
#[serde(transparent)] // Ensures JSON/TOML is just the raw u64
pub struct ChainId(pub u64);

impl ChainId {
    /// Flare mainnet.
    pub const FLARE: ChainId = ChainId(14);
    /// Coston2, the Flare test network.
    pub const COSTON2: ChainId = ChainId(114);
    /// Songbird, the Flare canary network.
    pub const SONGBIRD: ChainId = ChainId(19);
    /// Coston, the Songbird test network.
    pub const COSTON: ChainId = ChainId(16);
    /// The internal staging network.
    pub const STAGING: ChainId = ChainId(161);
    /// A local network configured with Flare parameters.
    pub const LOCAL_FLARE: ChainId = ChainId(162);
    /// A local network configured with Songbird parameters.
    pub const LOCAL: ChainId = ChainId(4_294_967_295);

    /// Networks running the Flare parameter family.
    pub const FLARE_FAMILY: [ChainId; 4] = [
        ChainId::FLARE,
        ChainId::COSTON2,
        ChainId::STAGING,
        ChainId::LOCAL_FLARE,
    ];
    /// Networks running the Songbird parameter family.
    pub const SONGBIRD_FAMILY: [ChainId; 3] = [ChainId::SONGBIRD, ChainId::COSTON, ChainId::LOCAL];
}

impl From<u64> for ChainId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<ChainId> for u64 {
    fn from(c: ChainId) -> Self {
        c.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lookup from chain identity to a per-chain value, with a declared default
/// for unrecognized chains.
///
/// Tables are assembled once with the chaining builder and never mutated
/// afterwards:
///
/// ```
/// use flare_types::chain::{ChainId, ChainValue};
///
/// let gas = ChainValue::new(3_000_000u64)
///     .with(ChainId::SONGBIRD, 2_000_000)
///     .with_all(&[ChainId::COSTON, ChainId::LOCAL], 1_000_000);
///
/// assert_eq!(*gas.get(ChainId::SONGBIRD), 2_000_000);
/// assert_eq!(*gas.get(ChainId(9999)), 3_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainValue<V> {
    default: V,
    values: BTreeMap<ChainId, V>,
}

impl<V> ChainValue<V> {
    /// Creates a table that answers `default` for every chain.
    pub fn new(default: V) -> Self {
        Self {
            default,
            values: BTreeMap::new(),
        }
    }

    /// Maps `chain` to `value`, replacing any earlier mapping.
    pub fn with(mut self, chain: ChainId, value: V) -> Self {
        self.insert(chain, value);
        self
    }

    /// Maps `chain` to `value` in place.
    pub fn insert(&mut self, chain: ChainId, value: V) {
        self.values.insert(chain, value);
    }

    /// Maps every chain in `chains` to a copy of `value`.
    pub fn with_all(mut self, chains: &[ChainId], value: V) -> Self
    where
        V: Clone,
    {
        for chain in chains {
            self.values.insert(*chain, value.clone());
        }
        self
    }

    /// Returns the value mapped to `chain`, or the default.
    pub fn get(&self, chain: ChainId) -> &V {
        self.values.get(&chain).unwrap_or(&self.default)
    }

    /// Returns the default value answered for unmapped chains.
    pub fn default_value(&self) -> &V {
        &self.default
    }
}

impl<V: Default> Default for ChainValue<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

/// A value that changes at fixed block times.
///
/// The initial value is active from time zero; each later era is active when
/// the block time is at or after its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<V> {
    initial: V,
    later: Vec<(u64, V)>,
}

impl<V> Schedule<V> {
    /// Creates a schedule with a single era starting at time zero.
    pub fn new(initial: V) -> Self {
        Self {
            initial,
            later: Vec::new(),
        }
    }

    /// Adds an era active from `start` onwards.
    pub fn then(mut self, start: u64, value: V) -> Self {
        let pos = self.later.partition_point(|(s, _)| *s <= start);
        self.later.insert(pos, (start, value));
        self
    }

    /// Returns the value active at `time`.
    pub fn at(&self, time: u64) -> &V {
        self.later
            .iter()
            .rev()
            .find(|(start, _)| *start <= time)
            .map(|(_, v)| v)
            .unwrap_or(&self.initial)
    }
}

/// Returns true if `time` is at or after `threshold`.
pub fn is_active(time: u64, threshold: u64) -> bool {
    time >= threshold
}
