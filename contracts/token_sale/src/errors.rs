use soroban_sdk::contracterror;

use crate::pricing::PricingError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidConfig = 4,
    AlreadyOpen = 5,
    SaleClosed = 6,
    ZeroContribution = 7,
    BelowMinimum = 8,
    InsufficientBalance = 9,
    TransferFailed = 10,
    ReentrantCall = 11,
    ArithmeticOverflow = 12,
    ArmingFailed = 13,
}

impl From<PricingError> for Error {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::SaleClosed => Error::SaleClosed,
            PricingError::ZeroContribution => Error::ZeroContribution,
            PricingError::BelowMinimum => Error::BelowMinimum,
            PricingError::Overflow => Error::ArithmeticOverflow,
        }
    }
}
