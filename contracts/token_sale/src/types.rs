use soroban_sdk::{contracttype, Address};

/// Caps, minimum contributions and rates of the two sale phases.
///
/// Caps and minimums are in payment-token units; rates are sale-token units
/// per payment-token unit.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PhaseConfig {
    pub early_cap: i128,
    pub early_minimum: i128,
    pub early_rate: i128,
    pub late_cap: i128,
    pub late_minimum: i128,
    pub late_rate: i128,
}

impl PhaseConfig {
    pub fn combined_cap(&self) -> Option<i128> {
        self.early_cap.checked_add(self.late_cap)
    }

    pub fn is_valid(&self) -> bool {
        self.early_cap > 0
            && self.late_cap > 0
            && self.early_rate > 0
            && self.late_rate > 0
            && (0..=self.early_cap).contains(&self.early_minimum)
            && (0..=self.late_cap).contains(&self.late_minimum)
            && self.combined_cap().is_some()
    }

    pub fn phase_at(&self, fund_collected: i128) -> Phase {
        if fund_collected < self.early_cap {
            Phase::Early
        } else if self.combined_cap().map_or(false, |cap| fund_collected < cap) {
            Phase::Late
        } else {
            Phase::Ended
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,         // token sold
    pub payment_token: Address, // base currency accepted
    pub treasury: Address,      // receives accepted funds
    pub ledger: Address,        // allocation ledger armed at the cap
    pub phases: PhaseConfig,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Pending,
    Open,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Phase {
    Early,
    Late,
    Ended,
}

/// Outcome of pricing one contribution against the current fund total.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub accepted: i128,
    pub refund: i128,
    pub early_amount: i128,
    pub late_amount: i128,
    pub tokens: i128,
    pub fund_collected: i128,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct ContributorRecord {
    pub contributed: i128,
    pub tokens_bought: i128,
    pub refunded: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Operator,
    Status,
    FundCollected,
    Contribution(Address),
    ReentrancyLock,
}
