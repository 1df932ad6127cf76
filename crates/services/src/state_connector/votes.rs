// Path: crates/services/src/state_connector/votes.rs

use alloy_primitives::Address;
use std::collections::BTreeMap;

/// Returns true if `support` is strictly more than half of `queried`.
///
/// Abstentions are part of `queried`, so they count against a majority.
pub fn has_majority(support: usize, queried: usize) -> bool {
    support > queried / 2
}

/// The outcome of querying one attestor set for a single round.
///
/// A successful but empty answer is grouped under the empty commitment and is
/// never a candidate for the plurality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttestationVotes {
    /// Every attestor queried, in query order.
    pub attestors: Vec<Address>,
    /// Attestors grouped by the raw commitment they returned.
    pub by_commitment: BTreeMap<Vec<u8>, Vec<Address>>,
    /// Attestors whose query failed.
    pub abstained: Vec<Address>,
    /// The most supported non-empty commitment.
    pub plurality: Option<Vec<u8>>,
    /// Attestors backing the plurality.
    pub plurality_attestors: Vec<Address>,
    /// Attestors that answered with something other than the plurality.
    pub divergent: Vec<Address>,
    /// Whether the plurality is backed by a strict majority of `attestors`.
    pub reached_majority: bool,
}

impl AttestationVotes {
    /// Tallies `answers`, where `None` marks an abstention.
    ///
    /// Ties between equally supported commitments go to the lexicographically
    /// smallest commitment.
    pub fn tally<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = (Address, Option<Vec<u8>>)>,
    {
        let mut votes = Self::default();
        for (attestor, answer) in answers {
            votes.attestors.push(attestor);
            match answer {
                Some(bytes) => votes.by_commitment.entry(bytes).or_default().push(attestor),
                None => votes.abstained.push(attestor),
            }
        }

        let mut best: Option<(&Vec<u8>, &Vec<Address>)> = None;
        for (commitment, backers) in votes.by_commitment.iter() {
            if commitment.is_empty() {
                continue;
            }
            if best.map_or(true, |(_, b)| backers.len() > b.len()) {
                best = Some((commitment, backers));
            }
        }

        if let Some((commitment, backers)) = best {
            let (commitment, backers) = (commitment.clone(), backers.clone());
            votes.divergent = votes
                .by_commitment
                .iter()
                .filter(|(c, _)| **c != commitment)
                .flat_map(|(_, a)| a.iter().copied())
                .collect();
            votes.reached_majority = has_majority(backers.len(), votes.attestors.len());
            votes.plurality = Some(commitment);
            votes.plurality_attestors = backers;
        } else {
            votes.divergent = votes.by_commitment.values().flatten().copied().collect();
        }
        votes
    }

    /// The plurality commitment, if it reached a majority.
    pub fn majority_decision(&self) -> Option<&[u8]> {
        self.plurality
            .as_deref()
            .filter(|_| self.reached_majority)
    }
}
