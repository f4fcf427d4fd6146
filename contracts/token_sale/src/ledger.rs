use soroban_sdk::{contractclient, Address, Env};

/// The part of the allocation ledger the sale calls into.
#[allow(dead_code)]
#[contractclient(name = "LedgerClient")]
pub trait AllocationLedgerInterface {
    fn arm_schedule(env: Env, caller: Address);
}
