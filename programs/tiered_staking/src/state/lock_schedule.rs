use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// A lock tier: deposits made in tier `n` stay locked for `n` weeks and
/// accrue reward scaled by `reward_multiplier / 100`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockTier {
    pub tier_index: u16,
    pub reward_multiplier: u32,
}

impl LockTier {
    pub const LEN: usize = 2 + 4;

    /// Lock duration in seconds.
    pub fn lock_duration(&self) -> i64 {
        i64::from(self.tier_index) * SECONDS_PER_WEEK
    }
}

/// Tier definitions, kept sorted by `tier_index`. Entries are only ever
/// inserted or overwritten, never removed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LockSchedule {
    pub tiers: Vec<LockTier>,
}

impl LockSchedule {
    pub const LEN: usize = 4 + MAX_LOCK_TIERS * LockTier::LEN;

    pub fn get(&self, tier_index: u16) -> Option<&LockTier> {
        self.tiers
            .binary_search_by_key(&tier_index, |t| t.tier_index)
            .ok()
            .map(|i| &self.tiers[i])
    }

    /// Insert or overwrite tier multipliers pairwise.
    ///
    /// Either every pair is applied or none is.
    pub fn set_lock_factors(&mut self, tier_indices: &[u16], multipliers: &[u32]) -> Result<()> {
        require!(
            !tier_indices.is_empty() && tier_indices.len() == multipliers.len(),
            StakingError::InvalidInput
        );

        let mut tiers = self.tiers.clone();
        for (&tier_index, &reward_multiplier) in tier_indices.iter().zip(multipliers) {
            let tier = LockTier {
                tier_index,
                reward_multiplier,
            };
            match tiers.binary_search_by_key(&tier_index, |t| t.tier_index) {
                Ok(i) => tiers[i] = tier,
                Err(i) => tiers.insert(i, tier),
            }
        }
        require!(tiers.len() <= MAX_LOCK_TIERS, StakingError::LockScheduleFull);

        self.tiers = tiers;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lock_factors_inserts_sorted() {
        let mut schedule = LockSchedule::default();
        schedule.set_lock_factors(&[4, 0, 1], &[300, 100, 200]).unwrap();

        let indices: Vec<u16> = schedule.tiers.iter().map(|t| t.tier_index).collect();
        assert_eq!(indices, vec![0, 1, 4]);
        assert_eq!(schedule.get(4).unwrap().reward_multiplier, 300);
        assert!(schedule.get(2).is_none());
    }

    #[test]
    fn test_set_lock_factors_overwrites_existing() {
        let mut schedule = LockSchedule::default();
        schedule.set_lock_factors(&[0, 1], &[100, 200]).unwrap();
        schedule.set_lock_factors(&[1], &[250]).unwrap();

        assert_eq!(schedule.tiers.len(), 2);
        assert_eq!(schedule.get(1).unwrap().reward_multiplier, 250);
    }

    #[test]
    fn test_set_lock_factors_rejects_mismatched_lengths() {
        let mut schedule = LockSchedule::default();
        let err = schedule.set_lock_factors(&[0, 1], &[100]).unwrap_err();
        assert_eq!(err, StakingError::InvalidInput.into());
        assert!(schedule.tiers.is_empty());

        let err = schedule.set_lock_factors(&[], &[]).unwrap_err();
        assert_eq!(err, StakingError::InvalidInput.into());
    }

    #[test]
    fn test_set_lock_factors_capacity_is_all_or_nothing() {
        let mut schedule = LockSchedule::default();
        let indices: Vec<u16> = (0..MAX_LOCK_TIERS as u16).collect();
        let multipliers = vec![100; MAX_LOCK_TIERS];
        schedule.set_lock_factors(&indices, &multipliers).unwrap();

        // Overwriting still fits, one new index does not.
        let err = schedule
            .set_lock_factors(&[0, MAX_LOCK_TIERS as u16], &[500, 100])
            .unwrap_err();
        assert_eq!(err, StakingError::LockScheduleFull.into());
        assert_eq!(schedule.get(0).unwrap().reward_multiplier, 100);
    }

    #[test]
    fn test_lock_duration_counts_weeks() {
        let tier = LockTier {
            tier_index: 2,
            reward_multiplier: 300,
        };
        assert_eq!(tier.lock_duration(), 14 * 86_400);
        assert_eq!(LockTier::default().lock_duration(), 0);
    }
}
