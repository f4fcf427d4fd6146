use soroban_sdk::contracterror;

use crate::vesting::VestingError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidConfig = 4,
    MintingClosed = 5,
    InvalidTarget = 6,
    AlreadyArmed = 7,
    NothingToRelease = 8,
    /// No full vesting period has elapsed since the last team release.
    NoPeriodElapsed = 9,
    ArithmeticOverflow = 10,
    TransferFailed = 11,
}

impl From<VestingError> for Error {
    fn from(err: VestingError) -> Self {
        match err {
            VestingError::NoPeriodElapsed => Error::NoPeriodElapsed,
            VestingError::Overflow => Error::ArithmeticOverflow,
        }
    }
}
