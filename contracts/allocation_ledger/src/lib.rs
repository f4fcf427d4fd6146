#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;
pub mod vesting;

#[cfg(test)]
mod test;

pub use contract::{AllocationLedger, AllocationLedgerClient};
pub use errors::Error;
pub use events::{InitialMintedEvent, ScheduleArmedEvent, TokensUnlockedEvent};
pub use types::{
    Allocations, LedgerStatus, MintState, ReleaseSchedule, ReleaseState, ScheduleState,
    TeamVesting, UnlockReport, VestingAccumulator, MARKETING_DELAY, VESTING_PERIOD,
};
