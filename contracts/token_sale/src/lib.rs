#![no_std]

mod contract;
mod errors;
mod events;
mod guard;
mod ledger;
pub mod pricing;
mod storage;
mod types;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use events::{RefundedEvent, TokensBoughtEvent};
pub use types::{ContributorRecord, Phase, PhaseConfig, Purchase, SaleConfig, SaleStatus};
