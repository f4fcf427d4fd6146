use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::*;
use crate::vesting::{self, UnlockPlan};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, xdr::ToXdr, Address, Env,
};

contractmeta!(
    key = "Description",
    val = "Fixed-supply allocation ledger with time-locked releases"
);

#[contract]
pub struct AllocationLedger;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

// XDR of an ScVal::Address is two big-endian words: the ScVal tag, then the
// ScAddress tag (0 = account, 1 = contract).
fn is_contract_address(env: &Env, address: &Address) -> bool {
    address.clone().to_xdr(env).get(7) == Some(1)
}

fn evaluate_unlock(env: &Env) -> Result<UnlockPlan, Error> {
    let schedule = match get_schedule_state(env) {
        ScheduleState::Armed(schedule) => schedule,
        ScheduleState::Unarmed => return Err(Error::NothingToRelease),
    };
    let allocations = get_allocations(env)?;

    let plan = vesting::plan_unlock(
        &allocations,
        &schedule,
        get_rewards_state(env),
        get_marketing_state(env),
        &get_team_vesting(env),
        get_ledger_timestamp(env),
    )?;

    if plan.report.total <= 0 {
        if plan.team_waiting {
            return Err(Error::NoPeriodElapsed);
        }
        return Err(Error::NothingToRelease);
    }
    Ok(plan)
}

#[contractimpl]
impl AllocationLedger {
    /// Set the owner, the managed token and the fixed allocation sizes.
    ///
    /// The ledger must be the admin of `token` for `initial_mint` to succeed.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        allocations: Allocations,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if !allocations.is_valid() {
            return Err(Error::InvalidConfig);
        }

        set_owner(&env, &owner);
        set_token(&env, &token);
        set_allocations(&env, &allocations);
        set_mint_state(&env, &MintState::Open);
        set_schedule_state(&env, &ScheduleState::Unarmed);

        events::emit_initialized(&env, owner, token, allocations);
        Ok(())
    }

    /// Mint the whole supply: presale to the sale contract, the rest here.
    pub fn initial_mint(env: Env, caller: Address, sale: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        if let MintState::Closed(_) = get_mint_state(&env) {
            return Err(Error::MintingClosed);
        }
        if sale == env.current_contract_address() || !is_contract_address(&env, &sale) {
            return Err(Error::InvalidTarget);
        }

        let allocations = get_allocations(&env)?;
        let locked = allocations.locked().ok_or(Error::ArithmeticOverflow)?;

        set_mint_state(&env, &MintState::Closed(sale.clone()));

        let minter = token::StellarAssetClient::new(&env, &get_token(&env)?);
        minter.mint(&sale, &allocations.presale);
        minter.mint(&env.current_contract_address(), &locked);

        events::emit_initial_minted(&env, sale, allocations.presale, locked);
        Ok(())
    }

    /// Fix the release timestamps. Only the sale contract recorded at mint
    /// time may call this, and only once.
    pub fn arm_schedule(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        match get_mint_state(&env) {
            MintState::Closed(sale) if sale == caller => {}
            _ => return Err(Error::Unauthorized),
        }
        if let ScheduleState::Armed(_) = get_schedule_state(&env) {
            return Err(Error::AlreadyArmed);
        }

        let schedule = ReleaseSchedule::starting_at(get_ledger_timestamp(&env));
        set_schedule_state(&env, &ScheduleState::Armed(schedule.clone()));
        set_team_vesting(
            &env,
            &TeamVesting::Vesting(VestingAccumulator {
                last_release_time: schedule.team_vesting_start_at,
                released: 0,
            }),
        );

        log!(&env, "release schedule armed", schedule.rewards_release_at);
        events::emit_schedule_armed(&env, schedule);
        Ok(())
    }

    /// Transfer every matured amount to the owner.
    pub fn unlock(env: Env, caller: Address) -> Result<UnlockReport, Error> {
        require_owner(&env, &caller)?;

        let plan = evaluate_unlock(&env)?;
        if plan.team_waiting {
            log!(&env, "team vesting period not complete, skipping team release");
        }

        set_rewards_state(&env, plan.rewards);
        set_marketing_state(&env, plan.marketing);
        set_team_vesting(&env, &plan.team);

        let token_client = token::TokenClient::new(&env, &get_token(&env)?);
        let sent = token_client.try_transfer(
            &env.current_contract_address(),
            &caller,
            &plan.report.total,
        );
        if !matches!(sent, Ok(Ok(()))) {
            return Err(Error::TransferFailed);
        }

        events::emit_tokens_unlocked(&env, caller, &plan.report);
        Ok(plan.report)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    // View functions

    /// What `unlock` would transfer right now, without touching state.
    pub fn releasable(env: Env) -> Result<UnlockReport, Error> {
        evaluate_unlock(&env).map(|plan| plan.report)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }

    pub fn get_allocations(env: Env) -> Result<Allocations, Error> {
        get_allocations(&env)
    }

    pub fn get_sale(env: Env) -> Option<Address> {
        match get_mint_state(&env) {
            MintState::Closed(sale) => Some(sale),
            MintState::Open => None,
        }
    }

    pub fn get_schedule(env: Env) -> Option<ReleaseSchedule> {
        match get_schedule_state(&env) {
            ScheduleState::Armed(schedule) => Some(schedule),
            ScheduleState::Unarmed => None,
        }
    }

    pub fn get_team_vesting(env: Env) -> TeamVesting {
        get_team_vesting(&env)
    }

    pub fn get_status(env: Env) -> LedgerStatus {
        LedgerStatus {
            schedule: get_schedule_state(&env),
            rewards: get_rewards_state(&env),
            marketing: get_marketing_state(&env),
            team: get_team_vesting(&env),
        }
    }
}
