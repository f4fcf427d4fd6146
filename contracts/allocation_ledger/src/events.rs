use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{Allocations, ReleaseSchedule, UnlockReport};

// Published under ("ALLOC", <kind>) so indexers can follow one ledger.

#[derive(Clone)]
#[contracttype]
pub struct LedgerInitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub allocations: Allocations,
}

#[derive(Clone)]
#[contracttype]
pub struct InitialMintedEvent {
    pub sale: Address,
    pub presale: i128,
    pub locked: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ScheduleArmedEvent {
    pub schedule: ReleaseSchedule,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensUnlockedEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub rewards: i128,
    pub marketing: i128,
    pub team: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub owner: Address,
}

pub fn emit_initialized(env: &Env, owner: Address, token: Address, allocations: Allocations) {
    env.events().publish(
        ("ALLOC", symbol_short!("INIT")),
        LedgerInitializedEvent {
            owner,
            token,
            allocations,
        },
    );
}

pub fn emit_initial_minted(env: &Env, sale: Address, presale: i128, locked: i128) {
    env.events().publish(
        ("ALLOC", symbol_short!("MINTED")),
        InitialMintedEvent {
            sale,
            presale,
            locked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_schedule_armed(env: &Env, schedule: ReleaseSchedule) {
    env.events().publish(
        ("ALLOC", symbol_short!("ARMED")),
        ScheduleArmedEvent {
            schedule,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_unlocked(env: &Env, beneficiary: Address, report: &UnlockReport) {
    env.events().publish(
        ("ALLOC", symbol_short!("UNLOCKED")),
        TokensUnlockedEvent {
            beneficiary,
            amount: report.total,
            rewards: report.rewards,
            marketing: report.marketing,
            team: report.team,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous: Address, owner: Address) {
    env.events().publish(
        ("ALLOC", symbol_short!("OWNER")),
        OwnershipTransferredEvent { previous, owner },
    );
}
