//! Release arithmetic for the locked allocations.
//!
//! Everything here is pure: callers pass the stored state and the current
//! ledger time and get back the amounts to transfer plus the next state. The
//! contract decides whether to persist the result.

use crate::types::{
    Allocations, ReleaseSchedule, ReleaseState, TeamVesting, UnlockReport, VestingAccumulator,
    VESTING_PERIOD,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VestingError {
    NoPeriodElapsed,
    Overflow,
}

/// Result of evaluating an unlock at a given time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockPlan {
    pub report: UnlockReport,
    pub rewards: ReleaseState,
    pub marketing: ReleaseState,
    pub team: TeamVesting,
    /// Team vesting has started but the current period is not complete.
    pub team_waiting: bool,
}

pub fn periods_elapsed(last_release_time: u64, now: u64) -> u64 {
    now.saturating_sub(last_release_time) / VESTING_PERIOD
}

/// Computes the next partial team release.
///
/// The amount is `team_total / periods` and never exceeds what is left of the
/// allocation. `last_release_time` moves to `now` regardless of how many
/// periods were skipped.
pub fn release_team(
    team_total: i128,
    acc: &VestingAccumulator,
    now: u64,
) -> Result<(i128, TeamVesting), VestingError> {
    let remaining = team_total
        .checked_sub(acc.released)
        .ok_or(VestingError::Overflow)?;
    if remaining <= 0 {
        return Ok((0, TeamVesting::FullyReleased));
    }

    let periods = periods_elapsed(acc.last_release_time, now);
    if periods == 0 {
        return Err(VestingError::NoPeriodElapsed);
    }

    let amount = (team_total / i128::from(periods)).min(remaining);
    let released = acc
        .released
        .checked_add(amount)
        .ok_or(VestingError::Overflow)?;

    let next = if released == team_total {
        TeamVesting::FullyReleased
    } else {
        TeamVesting::Vesting(VestingAccumulator {
            last_release_time: now,
            released,
        })
    };
    Ok((amount, next))
}

pub fn plan_unlock(
    allocations: &Allocations,
    schedule: &ReleaseSchedule,
    rewards: ReleaseState,
    marketing: ReleaseState,
    team: &TeamVesting,
    now: u64,
) -> Result<UnlockPlan, VestingError> {
    let mut plan = UnlockPlan {
        report: UnlockReport::default(),
        rewards,
        marketing,
        team: team.clone(),
        team_waiting: false,
    };

    if rewards == ReleaseState::Locked && now >= schedule.rewards_release_at {
        plan.report.rewards = allocations.rewards;
        plan.rewards = ReleaseState::Released;
    }

    if marketing == ReleaseState::Locked && now >= schedule.marketing_release_at {
        plan.report.marketing = allocations.marketing;
        plan.marketing = ReleaseState::Released;
    }

    if now >= schedule.team_vesting_start_at {
        if let TeamVesting::Vesting(acc) = team {
            match release_team(allocations.team, acc, now) {
                Ok((amount, next)) => {
                    plan.report.team = amount;
                    plan.team = next;
                }
                Err(VestingError::NoPeriodElapsed) => plan.team_waiting = true,
                Err(err) => return Err(err),
            }
        }
    }

    plan.report.total = plan
        .report
        .rewards
        .checked_add(plan.report.marketing)
        .and_then(|sum| sum.checked_add(plan.report.team))
        .ok_or(VestingError::Overflow)?;

    Ok(plan)
}
