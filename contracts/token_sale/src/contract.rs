use crate::errors::Error;
use crate::events;
use crate::guard::ReentrancyGuard;
use crate::ledger::LedgerClient;
use crate::pricing;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Two-phase capped token sale that arms the allocation ledger"
);

#[contract]
pub struct TokenSaleContract;

fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_operator(env)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::TokenClient::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

fn open_purchase(env: &Env, config: &SaleConfig, amount: i128) -> Result<Purchase, Error> {
    if get_status(env) != SaleStatus::Open {
        return Err(Error::SaleClosed);
    }
    Ok(pricing::price(
        &config.phases,
        get_fund_collected(env),
        amount,
    )?)
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the token sale contract
    pub fn initialize(
        env: Env,
        operator: Address,
        token: Address,
        payment_token: Address,
        treasury: Address,
        ledger: Address,
        phases: PhaseConfig,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        operator.require_auth();

        if !phases.is_valid() || token == payment_token {
            return Err(Error::InvalidConfig);
        }

        let config = SaleConfig {
            token: token.clone(),
            payment_token,
            treasury: treasury.clone(),
            ledger,
            phases: phases.clone(),
        };

        set_config(&env, &config);
        set_operator(&env, &operator);
        set_status(&env, SaleStatus::Pending);
        set_fund_collected(&env, 0);

        events::emit_initialized(&env, operator, token, treasury, phases);
        Ok(())
    }

    /// Start accepting contributions. One-way.
    pub fn open(env: Env, caller: Address) -> Result<(), Error> {
        require_operator(&env, &caller)?;

        if get_status(&env) == SaleStatus::Open {
            return Err(Error::AlreadyOpen);
        }

        let config = get_config(&env)?;
        let for_sale =
            token::TokenClient::new(&env, &config.token).balance(&env.current_contract_address());
        if for_sale <= 0 {
            return Err(Error::InsufficientBalance);
        }

        set_status(&env, SaleStatus::Open);
        events::emit_opened(&env, caller, for_sale);
        Ok(())
    }

    /// Buy sale tokens with `amount` of the payment token.
    ///
    /// The whole amount is taken from the contributor; the accepted part goes
    /// to the treasury and anything above the combined cap comes straight
    /// back. Reaching the cap arms the allocation ledger.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<Purchase, Error> {
        contributor.require_auth();
        let _lock = ReentrancyGuard::acquire(&env)?;

        let config = get_config(&env)?;
        let purchase = open_purchase(&env, &config, amount)?;
        let cap = config
            .phases
            .combined_cap()
            .ok_or(Error::ArithmeticOverflow)?;

        // Effects
        set_fund_collected(&env, purchase.fund_collected);

        let mut record = get_contribution(&env, &contributor);
        record.contributed += purchase.accepted;
        record.tokens_bought += purchase.tokens;
        record.refunded += purchase.refund;
        set_contribution(&env, &contributor, &record);

        // Interactions
        let this = env.current_contract_address();
        transfer(&env, &config.payment_token, &contributor, &this, amount)?;
        transfer(
            &env,
            &config.payment_token,
            &this,
            &config.treasury,
            purchase.accepted,
        )?;
        if purchase.refund > 0 {
            log!(&env, "contribution over cap, refunding", purchase.refund);
            transfer(
                &env,
                &config.payment_token,
                &this,
                &contributor,
                purchase.refund,
            )?;
            events::emit_refunded(&env, contributor.clone(), purchase.refund);
        }
        transfer(&env, &config.token, &this, &contributor, purchase.tokens)?;

        if purchase.fund_collected == cap {
            let armed = LedgerClient::new(&env, &config.ledger).try_arm_schedule(&this);
            if !matches!(armed, Ok(Ok(()))) {
                return Err(Error::ArmingFailed);
            }
            events::emit_cap_reached(&env, config.ledger.clone(), purchase.fund_collected);
        }

        events::emit_tokens_bought(&env, contributor, &purchase);
        Ok(purchase)
    }

    /// Send unsold tokens back to the operator.
    pub fn reclaim_tokens(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::TransferFailed);
        }

        let config = get_config(&env)?;
        transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &caller,
            amount,
        )?;

        events::emit_tokens_reclaimed(&env, caller, amount);
        Ok(())
    }

    // View functions

    /// Price `amount` against the current state without buying anything.
    pub fn quote(env: Env, amount: i128) -> Result<Purchase, Error> {
        let config = get_config(&env)?;
        open_purchase(&env, &config, amount)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_operator(env: Env) -> Result<Address, Error> {
        get_operator(&env)
    }

    pub fn get_status(env: Env) -> SaleStatus {
        get_status(&env)
    }

    pub fn get_fund_collected(env: Env) -> i128 {
        get_fund_collected(&env)
    }

    pub fn get_contribution(env: Env, user: Address) -> ContributorRecord {
        get_contribution(&env, &user)
    }

    pub fn combined_cap(env: Env) -> Result<i128, Error> {
        get_config(&env)?
            .phases
            .combined_cap()
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn current_phase(env: Env) -> Result<Phase, Error> {
        Ok(get_config(&env)?
            .phases
            .phase_at(get_fund_collected(&env)))
    }
}
