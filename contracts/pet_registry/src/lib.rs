#![no_std]

mod airdrop;
mod alliance;
mod care;
mod contract;
mod error;
mod events;
mod leveling;
mod metadata;
mod storage;
mod tribe;

pub use contract::{PetRegistry, PetRegistryClient};
pub use error::ContractError;
pub use storage::{MilestoneTier, Pet, PetId, PetMetadata, PetStats};

pub mod ttl {
    pub const DAY_IN_LEDGERS: u32 = 17280;

    pub const BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
    pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;
}

// The reward token the registry mints airdrops through.
pub mod pet_token {
    use soroban_sdk::{contractclient, Address, Env};

    #[allow(dead_code)]
    #[contractclient(name = "Client")]
    pub trait PetTokenInterface {
        fn mint(env: Env, minter: Address, to: Address, amount: i128);

        fn decimals(env: Env) -> u32;
    }
}
