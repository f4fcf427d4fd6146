use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_operator(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(Error::NotInitialized)
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

pub fn get_status(env: &Env) -> SaleStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(SaleStatus::Pending)
}

pub fn set_status(env: &Env, status: SaleStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_fund_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FundCollected)
        .unwrap_or(0)
}

pub fn set_fund_collected(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::FundCollected, &amount);
}

pub fn get_contribution(env: &Env, user: &Address) -> ContributorRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(user.clone()))
        .unwrap_or_default()
}

pub fn set_contribution(env: &Env, user: &Address, record: &ContributorRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(user.clone()), record);
}
