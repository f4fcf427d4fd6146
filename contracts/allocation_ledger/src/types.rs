use soroban_sdk::{contracttype, Address, Env};

/// Length of one vesting period: three fixed 30-day months.
pub const VESTING_PERIOD: u64 = 3 * 30 * 24 * 60 * 60;

/// Delay between arming and the marketing/team release thresholds.
pub const MARKETING_DELAY: u64 = VESTING_PERIOD;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocations {
    pub presale: i128,
    pub team: i128,
    pub marketing: i128,
    pub rewards: i128,
}

impl Allocations {
    pub fn is_valid(&self) -> bool {
        self.presale > 0
            && self.team > 0
            && self.marketing > 0
            && self.rewards > 0
            && self.total().is_some()
    }

    /// Amount held back by the ledger itself (everything except presale).
    pub fn locked(&self) -> Option<i128> {
        self.team
            .checked_add(self.marketing)?
            .checked_add(self.rewards)
    }

    pub fn total(&self) -> Option<i128> {
        self.locked()?.checked_add(self.presale)
    }
}

/// Minting is a one-way latch; the closed state remembers the sale contract
/// that received the presale allocation and is the only caller allowed to arm.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum MintState {
    Open,
    Closed(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReleaseSchedule {
    pub rewards_release_at: u64,
    pub marketing_release_at: u64,
    pub team_vesting_start_at: u64,
}

impl ReleaseSchedule {
    pub fn starting_at(armed_at: u64) -> Self {
        let quarter_later = armed_at.saturating_add(MARKETING_DELAY);
        Self {
            rewards_release_at: armed_at,
            marketing_release_at: quarter_later,
            team_vesting_start_at: quarter_later,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ScheduleState {
    Unarmed,
    Armed(ReleaseSchedule),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingAccumulator {
    pub last_release_time: u64,
    pub released: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum TeamVesting {
    Locked,
    Vesting(VestingAccumulator),
    FullyReleased,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ReleaseState {
    Locked,
    Released,
}

/// Breakdown of a single unlock call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct UnlockReport {
    pub rewards: i128,
    pub marketing: i128,
    pub team: i128,
    pub total: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LedgerStatus {
    pub schedule: ScheduleState,
    pub rewards: ReleaseState,
    pub marketing: ReleaseState,
    pub team: TeamVesting,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    Allocations,
    Mint,
    Schedule,
    Rewards,
    Marketing,
    Team,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
