use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_allocations(env: &Env) -> Result<Allocations, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Allocations)
        .ok_or(Error::NotInitialized)
}

pub fn set_allocations(env: &Env, allocations: &Allocations) {
    env.storage()
        .instance()
        .set(&DataKey::Allocations, allocations);
}

pub fn get_mint_state(env: &Env) -> MintState {
    env.storage()
        .instance()
        .get(&DataKey::Mint)
        .unwrap_or(MintState::Open)
}

pub fn set_mint_state(env: &Env, state: &MintState) {
    env.storage().instance().set(&DataKey::Mint, state);
}

pub fn get_schedule_state(env: &Env) -> ScheduleState {
    env.storage()
        .instance()
        .get(&DataKey::Schedule)
        .unwrap_or(ScheduleState::Unarmed)
}

pub fn set_schedule_state(env: &Env, state: &ScheduleState) {
    env.storage().instance().set(&DataKey::Schedule, state);
}

pub fn get_rewards_state(env: &Env) -> ReleaseState {
    env.storage()
        .instance()
        .get(&DataKey::Rewards)
        .unwrap_or(ReleaseState::Locked)
}

pub fn set_rewards_state(env: &Env, state: ReleaseState) {
    env.storage().instance().set(&DataKey::Rewards, &state);
}

pub fn get_marketing_state(env: &Env) -> ReleaseState {
    env.storage()
        .instance()
        .get(&DataKey::Marketing)
        .unwrap_or(ReleaseState::Locked)
}

pub fn set_marketing_state(env: &Env, state: ReleaseState) {
    env.storage().instance().set(&DataKey::Marketing, &state);
}

pub fn get_team_vesting(env: &Env) -> TeamVesting {
    env.storage()
        .instance()
        .get(&DataKey::Team)
        .unwrap_or(TeamVesting::Locked)
}

pub fn set_team_vesting(env: &Env, state: &TeamVesting) {
    env.storage().instance().set(&DataKey::Team, state);
}
