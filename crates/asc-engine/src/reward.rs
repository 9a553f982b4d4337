//! Experience calculator: converts an action outcome into an XP award.
//!
//! The base value comes from the reward table; a failed action earns a
//! fraction of it; a random jitter factor is applied; the result is rounded
//! to a step and floored at a minimum. Randomness is injected through
//! [`Jitter`] so tests can pin it.

use asc_tables::ProgressionTables;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the multiplicative jitter applied to a base reward.
pub trait Jitter {
    /// A factor in `[min, max]`.
    fn factor(&mut self, min: f64, max: f64) -> f64;
}

/// Uniform jitter drawn from a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Deterministic jitter from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Jitter seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Jitter for SeededJitter {
    fn factor(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// A constant jitter factor, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn factor(&mut self, min: f64, max: f64) -> f64 {
        if min <= max {
            self.0.clamp(min, max)
        } else {
            min
        }
    }
}

/// Tunable parameters of the reward formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardPolicy {
    /// Lower bound of the jitter factor.
    pub jitter_min: f64,
    /// Upper bound of the jitter factor.
    pub jitter_max: f64,
    /// A failed action earns the base reward divided by this (floored).
    pub failure_divisor: u32,
    /// Awards are rounded to the nearest multiple of this.
    pub round_to: u32,
    /// No award is ever smaller than this.
    pub minimum: u32,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            jitter_min: 0.9,
            jitter_max: 1.1,
            failure_divisor: 2,
            round_to: 5,
            minimum: 5,
        }
    }
}

impl RewardPolicy {
    /// Set the jitter range. The bounds are reordered if given backwards.
    pub fn with_jitter(mut self, min: f64, max: f64) -> Self {
        self.jitter_min = min.min(max);
        self.jitter_max = min.max(max);
        self
    }

    /// Set the failure divisor (at least 1).
    pub fn with_failure_divisor(mut self, divisor: u32) -> Self {
        self.failure_divisor = divisor.max(1);
        self
    }

    /// Set the rounding step (at least 1).
    pub fn with_rounding(mut self, step: u32) -> Self {
        self.round_to = step.max(1);
        self
    }

    /// Set the minimum award.
    pub fn with_minimum(mut self, minimum: u32) -> Self {
        self.minimum = minimum;
        self
    }
}

/// Computes XP awards from the reward table.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceCalculator<'t> {
    tables: &'t ProgressionTables,
    policy: RewardPolicy,
}

impl<'t> ExperienceCalculator<'t> {
    /// A calculator using the default policy.
    pub fn new(tables: &'t ProgressionTables) -> Self {
        Self {
            tables,
            policy: RewardPolicy::default(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: RewardPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active policy.
    pub fn policy(&self) -> &RewardPolicy {
        &self.policy
    }

    /// XP earned for an action of `action_type` at `difficulty`.
    ///
    /// Unknown action types and difficulties fall back to the table defaults;
    /// this never fails.
    pub fn calculate_reward(
        &self,
        action_type: &str,
        difficulty: &str,
        success: bool,
        jitter: &mut impl Jitter,
    ) -> u32 {
        let policy = &self.policy;
        let rewards = self.tables.rewards();
        if !rewards.is_known_action(action_type) {
            tracing::debug!(action_type, "unknown action type, using fallback rewards");
        }

        let mut base = rewards.base_reward(action_type, difficulty);
        if !success {
            base /= policy.failure_divisor.max(1);
        }

        let factor = jitter.factor(policy.jitter_min, policy.jitter_max);
        let step = f64::from(policy.round_to.max(1));
        let rounded = (f64::from(base) * factor / step).round_ties_even() * step;

        // Float to int casts saturate, so a huge table value cannot wrap.
        let award = (rounded as u32).max(policy.minimum);
        tracing::debug!(action_type, difficulty, success, base, factor, award, "calculated reward");
        award
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low() -> FixedJitter {
        FixedJitter(0.9)
    }

    #[test]
    fn table_rewards_with_low_jitter() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        assert_eq!(calc.calculate_reward("combat", "easy", true, &mut low()), 90);
        assert_eq!(calc.calculate_reward("combat", "hard", true, &mut low()), 360);
        assert_eq!(calc.calculate_reward("quest", "major", true, &mut low()), 1080);
    }

    #[test]
    fn failure_halves_before_jitter() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        assert_eq!(calc.calculate_reward("combat", "medium", false, &mut low()), 90);
    }

    #[test]
    fn unknown_action_uses_fallback() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        assert_eq!(calc.calculate_reward("unknown_type", "medium", true, &mut low()), 90);
        assert_eq!(
            calc.calculate_reward("unknown_type", "nonsense", true, &mut FixedJitter(1.0)),
            100
        );
    }

    #[test]
    fn keys_are_case_insensitive() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        assert_eq!(calc.calculate_reward("Combat", "HARD", true, &mut FixedJitter(1.0)), 400);
    }

    #[test]
    fn floor_applies_to_tiny_awards() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables)
            .with_policy(RewardPolicy::default().with_failure_divisor(1000));
        assert_eq!(calc.calculate_reward("roleplay", "minor", false, &mut low()), 5);
    }

    #[test]
    fn rounds_to_nearest_step() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        // 150 * 1.03 = 154.5 -> 155
        assert_eq!(calc.calculate_reward("puzzle", "easy", true, &mut FixedJitter(1.03)), 155);
        // 150 * 0.98 = 147 -> 145
        assert_eq!(calc.calculate_reward("puzzle", "easy", true, &mut FixedJitter(0.98)), 145);
    }

    #[test]
    fn fixed_jitter_is_clamped() {
        assert_eq!(FixedJitter(2.0).factor(0.9, 1.1), 1.1);
        assert_eq!(FixedJitter(0.1).factor(0.9, 1.1), 0.9);
    }

    #[test]
    fn seeded_jitter_stays_in_range_and_repeats() {
        let mut a = SeededJitter::from_seed(7);
        let mut b = SeededJitter::from_seed(7);
        for _ in 0..100 {
            let x = a.factor(0.9, 1.1);
            assert!((0.9..=1.1).contains(&x));
            assert_eq!(x, b.factor(0.9, 1.1));
        }
    }

    #[test]
    fn seeded_rewards_are_bounded() {
        let tables = ProgressionTables::standard();
        let calc = ExperienceCalculator::new(&tables);
        let mut jitter = SeededJitter::from_seed(42);
        for _ in 0..200 {
            let xp = calc.calculate_reward("combat", "boss", true, &mut jitter);
            assert!((900..=1100).contains(&xp), "{xp}");
            assert_eq!(xp % 5, 0);
        }
    }

    #[test]
    fn policy_builder() {
        let policy = RewardPolicy::default()
            .with_jitter(1.2, 0.8)
            .with_rounding(0)
            .with_minimum(1);
        assert_eq!(policy.jitter_min, 0.8);
        assert_eq!(policy.jitter_max, 1.2);
        assert_eq!(policy.round_to, 1);
        assert_eq!(policy.minimum, 1);
    }
}
