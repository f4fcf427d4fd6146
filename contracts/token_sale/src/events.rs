use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{PhaseConfig, Purchase};

// Topics are ("SALE", <kind>).

#[derive(Clone)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub operator: Address,
    pub token: Address,
    pub treasury: Address,
    pub phases: PhaseConfig,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensBoughtEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub paid: i128,
    pub fund_collected: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RefundedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleOpenedEvent {
    pub operator: Address,
    pub tokens_for_sale: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensReclaimedEvent {
    pub operator: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct CapReachedEvent {
    pub ledger: Address,
    pub fund_collected: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(
    env: &Env,
    operator: Address,
    token: Address,
    treasury: Address,
    phases: PhaseConfig,
) {
    env.events().publish(
        ("SALE", symbol_short!("INIT")),
        SaleInitializedEvent {
            operator,
            token,
            treasury,
            phases,
        },
    );
}

pub fn emit_opened(env: &Env, operator: Address, tokens_for_sale: i128) {
    env.events().publish(
        ("SALE", symbol_short!("OPENED")),
        SaleOpenedEvent {
            operator,
            tokens_for_sale,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_bought(env: &Env, beneficiary: Address, purchase: &Purchase) {
    env.events().publish(
        ("SALE", symbol_short!("BOUGHT")),
        TokensBoughtEvent {
            beneficiary,
            amount: purchase.tokens,
            paid: purchase.accepted,
            fund_collected: purchase.fund_collected,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_refunded(env: &Env, contributor: Address, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("REFUND")),
        RefundedEvent {
            contributor,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_tokens_reclaimed(env: &Env, operator: Address, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("RECLAIM")),
        TokensReclaimedEvent { operator, amount },
    );
}

pub fn emit_cap_reached(env: &Env, ledger: Address, fund_collected: i128) {
    env.events().publish(
        ("SALE", symbol_short!("CAPPED")),
        CapReachedEvent {
            ledger,
            fund_collected,
            timestamp: env.ledger().timestamp(),
        },
    );
}
