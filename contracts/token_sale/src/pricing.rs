//! Conversion of a contribution into sale tokens.
//!
//! A contribution is filled in phase order. While the early cap has room the
//! early minimum and rate apply; whatever spills past the early cap is priced
//! as a late sub-contribution without the late minimum. Anything beyond the
//! combined cap is handed back as a refund.

use crate::types::{PhaseConfig, Purchase};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PricingError {
    SaleClosed,
    ZeroContribution,
    BelowMinimum,
    Overflow,
}

pub fn price(
    phases: &PhaseConfig,
    fund_collected: i128,
    amount: i128,
) -> Result<Purchase, PricingError> {
    let cap = phases.combined_cap().ok_or(PricingError::Overflow)?;
    if fund_collected >= cap {
        return Err(PricingError::SaleClosed);
    }
    if amount <= 0 {
        return Err(PricingError::ZeroContribution);
    }

    let mut fund = fund_collected;
    let mut early_amount = 0;
    let mut remainder = amount;
    let mut split = false;

    if fund < phases.early_cap {
        if amount < phases.early_minimum {
            return Err(PricingError::BelowMinimum);
        }
        let room = phases.early_cap - fund;
        early_amount = amount.min(room);
        remainder = amount - early_amount;
        split = remainder > 0;
        fund += early_amount;
    }

    let mut refund = 0;
    let mut late_amount = 0;
    if remainder > 0 {
        let projected = fund
            .checked_add(remainder)
            .ok_or(PricingError::Overflow)?;
        if projected > cap {
            refund = projected - cap;
            remainder -= refund;
        } else if !split && remainder < phases.late_minimum {
            return Err(PricingError::BelowMinimum);
        }
        late_amount = remainder;
        fund += late_amount;
    }

    let tokens = early_amount
        .checked_mul(phases.early_rate)
        .zip(late_amount.checked_mul(phases.late_rate))
        .and_then(|(early, late)| early.checked_add(late))
        .ok_or(PricingError::Overflow)?;

    Ok(Purchase {
        accepted: early_amount + late_amount,
        refund,
        early_amount,
        late_amount,
        tokens,
        fund_collected: fund,
    })
}
