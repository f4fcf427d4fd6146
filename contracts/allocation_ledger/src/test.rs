#![allow(clippy::unwrap_used)]

use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{token, Address, Env, String, TryFromVal};

use crate::{
    AllocationLedger, AllocationLedgerClient, Allocations, Error, ReleaseState, TeamVesting,
    TokensUnlockedEvent, UnlockReport, VestingAccumulator, VESTING_PERIOD,
};

const PRESALE: i128 = 7_000_000;
const TEAM: i128 = 1_200_000;
const MARKETING: i128 = 800_000;
const REWARDS: i128 = 1_000_000;
const ARMED_AT: u64 = 1_000;

struct Setup<'a> {
    env: Env,
    owner: Address,
    sale: Address,
    ledger_id: Address,
    client: AllocationLedgerClient<'a>,
    token: token::TokenClient<'a>,
}

fn allocations() -> Allocations {
    Allocations {
        presale: PRESALE,
        team: TEAM,
        marketing: MARKETING,
        rewards: REWARDS,
    }
}

fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let ledger_id = env.register_contract(None, AllocationLedger);
    let client = AllocationLedgerClient::new(&env, &ledger_id);
    let token_id = env
        .register_stellar_asset_contract_v2(ledger_id.clone())
        .address();

    let owner = Address::generate(&env);
    let sale = Address::generate(&env);
    client.initialize(&owner, &token_id, &allocations());

    let token = token::TokenClient::new(&env, &token_id);
    Setup {
        env,
        owner,
        sale,
        ledger_id,
        client,
        token,
    }
}

/// Minted and armed at `ARMED_AT`.
fn armed<'a>() -> Setup<'a> {
    let s = setup();
    s.client.initial_mint(&s.owner, &s.sale);
    set_time(&s.env, ARMED_AT);
    s.client.arm_schedule(&s.sale);
    s
}

fn team_start() -> u64 {
    ARMED_AT + VESTING_PERIOD
}

#[test]
fn test_initialize_only_once() {
    let s = setup();
    let res = s
        .client
        .try_initialize(&s.owner, &s.token.address, &allocations());
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(s.client.get_allocations(), allocations());
}

#[test]
fn test_initialize_rejects_empty_allocation() {
    let env = Env::default();
    env.mock_all_auths();
    let ledger_id = env.register_contract(None, AllocationLedger);
    let client = AllocationLedgerClient::new(&env, &ledger_id);

    let mut bad = allocations();
    bad.marketing = 0;
    let res = client.try_initialize(&Address::generate(&env), &Address::generate(&env), &bad);
    assert_eq!(res, Err(Ok(Error::InvalidConfig)));
}

#[test]
fn test_initial_mint_splits_supply() {
    let s = setup();
    s.client.initial_mint(&s.owner, &s.sale);

    assert_eq!(s.token.balance(&s.sale), PRESALE);
    assert_eq!(s.token.balance(&s.ledger_id), TEAM + MARKETING + REWARDS);
    assert_eq!(s.client.get_sale(), Some(s.sale.clone()));
}

#[test]
fn test_initial_mint_twice_fails() {
    let s = setup();
    s.client.initial_mint(&s.owner, &s.sale);

    let res = s.client.try_initial_mint(&s.owner, &s.sale);
    assert_eq!(res, Err(Ok(Error::MintingClosed)));
    assert_eq!(s.token.balance(&s.sale), PRESALE);
}

#[test]
fn test_initial_mint_requires_owner() {
    let s = setup();
    let stranger = Address::generate(&s.env);
    let res = s.client.try_initial_mint(&stranger, &s.sale);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));
    assert_eq!(s.client.get_sale(), None);
}

#[test]
fn test_initial_mint_rejects_invalid_target() {
    let s = setup();

    let res = s.client.try_initial_mint(&s.owner, &s.ledger_id);
    assert_eq!(res, Err(Ok(Error::InvalidTarget)));

    let account = Address::from_string(&String::from_str(
        &s.env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ));
    let res = s.client.try_initial_mint(&s.owner, &account);
    assert_eq!(res, Err(Ok(Error::InvalidTarget)));
}

#[test]
fn test_arm_schedule_sets_quarter_offsets() {
    let s = armed();
    let schedule = s.client.get_schedule().unwrap();

    assert_eq!(schedule.rewards_release_at, ARMED_AT);
    assert_eq!(schedule.marketing_release_at, ARMED_AT + 90 * 24 * 60 * 60);
    assert_eq!(schedule.team_vesting_start_at, schedule.marketing_release_at);
    assert_eq!(
        s.client.get_team_vesting(),
        TeamVesting::Vesting(VestingAccumulator {
            last_release_time: schedule.team_vesting_start_at,
            released: 0,
        })
    );
}

#[test]
fn test_arm_schedule_only_by_sale() {
    let s = setup();

    // nothing minted yet, so no sale is registered
    assert_eq!(
        s.client.try_arm_schedule(&s.sale),
        Err(Ok(Error::Unauthorized))
    );

    s.client.initial_mint(&s.owner, &s.sale);
    assert_eq!(
        s.client.try_arm_schedule(&s.owner),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.client.get_schedule(), None);
}

#[test]
fn test_arm_schedule_twice_fails() {
    let s = armed();
    set_time(&s.env, ARMED_AT + 10);

    assert_eq!(
        s.client.try_arm_schedule(&s.sale),
        Err(Ok(Error::AlreadyArmed))
    );
    assert_eq!(
        s.client.get_schedule().unwrap().rewards_release_at,
        ARMED_AT
    );
}

#[test]
fn test_unlock_before_arming_has_nothing() {
    let s = setup();
    s.client.initial_mint(&s.owner, &s.sale);

    let res = s.client.try_unlock(&s.owner);
    assert_eq!(res, Err(Ok(Error::NothingToRelease)));
}

#[test]
fn test_unlock_requires_owner() {
    let s = armed();
    let stranger = Address::generate(&s.env);
    assert_eq!(
        s.client.try_unlock(&stranger),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_rewards_released_at_arming() {
    let s = armed();

    let report = s.client.unlock(&s.owner);
    assert_eq!(
        report,
        UnlockReport {
            rewards: REWARDS,
            marketing: 0,
            team: 0,
            total: REWARDS,
        }
    );
    assert_eq!(s.token.balance(&s.owner), REWARDS);

    // rewards are single-shot, nothing else has matured yet
    assert_eq!(
        s.client.try_unlock(&s.owner),
        Err(Ok(Error::NothingToRelease))
    );
}

#[test]
fn test_marketing_released_while_team_period_runs() {
    let s = armed();
    set_time(&s.env, team_start());

    let report = s.client.unlock(&s.owner);
    assert_eq!(report.rewards, REWARDS);
    assert_eq!(report.marketing, MARKETING);
    assert_eq!(report.team, 0);

    // second call in the same period: no team release possible
    set_time(&s.env, team_start() + VESTING_PERIOD - 1);
    assert_eq!(
        s.client.try_unlock(&s.owner),
        Err(Ok(Error::NoPeriodElapsed))
    );
    assert_eq!(s.token.balance(&s.owner), REWARDS + MARKETING);
}

#[test]
fn test_team_single_period_exhausts_allocation() {
    let s = armed();
    set_time(&s.env, team_start());
    s.client.unlock(&s.owner);

    set_time(&s.env, team_start() + VESTING_PERIOD);
    let report = s.client.unlock(&s.owner);
    assert_eq!(report.team, TEAM);
    assert_eq!(s.client.get_team_vesting(), TeamVesting::FullyReleased);

    set_time(&s.env, team_start() + 10 * VESTING_PERIOD);
    assert_eq!(
        s.client.try_unlock(&s.owner),
        Err(Ok(Error::NothingToRelease))
    );
    assert_eq!(s.token.balance(&s.owner), REWARDS + MARKETING + TEAM);
    assert_eq!(s.token.balance(&s.ledger_id), 0);
}

#[test]
fn test_team_release_divides_by_periods_and_never_overpays() {
    let s = armed();

    set_time(&s.env, team_start() + 4 * VESTING_PERIOD);
    let first = s.client.unlock(&s.owner);
    assert_eq!(first.team, TEAM / 4);
    assert_eq!(first.total, REWARDS + MARKETING + TEAM / 4);

    set_time(&s.env, team_start() + 5 * VESTING_PERIOD);
    let second = s.client.unlock(&s.owner);
    assert_eq!(second.rewards + second.marketing, 0);
    assert_eq!(first.team + second.team, TEAM);

    let status = s.client.get_status();
    assert_eq!(status.rewards, ReleaseState::Released);
    assert_eq!(status.marketing, ReleaseState::Released);
    assert_eq!(status.team, TeamVesting::FullyReleased);
}

#[test]
fn test_releasable_is_read_only() {
    let s = armed();
    set_time(&s.env, team_start());

    let preview = s.client.releasable();
    assert_eq!(preview.total, REWARDS + MARKETING);
    assert_eq!(s.client.releasable(), preview);
    assert_eq!(s.token.balance(&s.owner), 0);
    assert_eq!(s.client.unlock(&s.owner), preview);
}

#[test]
fn test_unlock_emits_event() {
    let s = armed();
    s.client.unlock(&s.owner);

    let (contract, _topics, data) = s.env.events().all().last().unwrap();
    assert_eq!(contract, s.ledger_id);
    let event = TokensUnlockedEvent::try_from_val(&s.env, &data).unwrap();
    assert_eq!(event.beneficiary, s.owner);
    assert_eq!(event.amount, REWARDS);
    assert_eq!(event.timestamp, ARMED_AT);
}

#[test]
fn test_transfer_ownership_moves_unlock_rights() {
    let s = armed();
    let new_owner = Address::generate(&s.env);
    s.client.transfer_ownership(&s.owner, &new_owner);

    assert_eq!(s.client.get_owner(), new_owner);
    assert_eq!(
        s.client.try_unlock(&s.owner),
        Err(Ok(Error::Unauthorized))
    );
    s.client.unlock(&new_owner);
    assert_eq!(s.token.balance(&new_owner), REWARDS);
}
