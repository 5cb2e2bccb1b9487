use soroban_sdk::{contracttype, Address, String, Vec};

pub type PetId = u64;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    IsInitialized,
    PetToken,
    PetCount,
    Pet(PetId),
    Tribe(PetId),
    OwnedPets(Address),
    Alliance(Address),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub name: String,
    pub symbol: String,
}

/// A minted pet. Stored under `DataKey::Pet(id)`; the tribe lives under its own
/// key so membership changes never rewrite the pet record.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Pet {
    pub id: PetId,
    pub owner: Address,
    pub name: String,
    pub health: u32,
    pub happiness: u32,
    pub level: u32,
    pub traits: Vec<String>,
    /// Base units of $PET distributed for this pet's milestones.
    pub airdrop_count: i128,
    pub last_fed: Option<u64>,
    pub last_played: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct PetStats {
    pub health: u32,
    pub happiness: u32,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct PetMetadata {
    pub id: PetId,
    pub owner: Address,
    pub name: String,
    pub stats: PetStats,
    pub traits: Vec<String>,
    pub airdrop_count: i128,
    pub tribe_size: u32,
    pub tradable: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct MilestoneTier {
    pub level: u32,
    pub reward: i128,
    pub name: String,
}

impl Pet {
    pub fn stats(&self) -> PetStats {
        PetStats {
            health: self.health,
            happiness: self.happiness,
            level: self.level,
        }
    }
}

pub mod utils {
    use soroban_sdk::{log, vec, Address, Env, Vec};

    use crate::{
        error::ContractError,
        ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{Config, DataKey, Pet, PetId};

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::IsInitialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::IsInitialized, &true);
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)?;
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(admin)
    }

    pub fn save_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ContractError::ConfigNotFound)
    }

    pub fn save_pet_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::PetToken, token);
    }

    pub fn get_pet_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::PetToken)
            .ok_or(ContractError::PetTokenNotSet)
    }

    pub fn get_pet_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get::<_, u64>(&DataKey::PetCount)
            .unwrap_or_default()
    }

    // ids start at 1 and are never handed out twice
    pub fn generate_pet_id(env: &Env) -> PetId {
        let id = get_pet_count(env) + 1u64;
        env.storage().instance().set(&DataKey::PetCount, &id);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        id
    }

    pub fn get_pet(env: &Env, id: PetId) -> Result<Pet, ContractError> {
        let key = DataKey::Pet(id);
        let pet = env.storage().persistent().get(&key).ok_or_else(|| {
            log!(env, "Pet Registry: Get pet: Pet does not exist. Id: ", id);
            ContractError::NotFound
        })?;
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(pet)
    }

    pub fn save_pet(env: &Env, pet: &Pet) {
        let key = DataKey::Pet(pet.id);
        env.storage().persistent().set(&key, pet);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_tribe(env: &Env, id: PetId) -> Vec<Address> {
        let key = DataKey::Tribe(id);
        let tribe = env.storage().persistent().get(&key).unwrap_or(vec![env]);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        tribe
    }

    pub fn save_tribe(env: &Env, id: PetId, members: &Vec<Address>) {
        let key = DataKey::Tribe(id);
        env.storage().persistent().set(&key, members);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_owned_pets(env: &Env, owner: &Address) -> Vec<PetId> {
        let key = DataKey::OwnedPets(owner.clone());
        let owned = env.storage().persistent().get(&key).unwrap_or(vec![env]);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        owned
    }

    pub fn add_owned_pet(env: &Env, owner: &Address, id: PetId) {
        let mut owned = get_owned_pets(env, owner);
        owned.push_back(id);

        save_owned_pets(env, owner, &owned);
    }

    pub fn remove_owned_pet(env: &Env, owner: &Address, id: PetId) {
        let mut owned = get_owned_pets(env, owner);
        if let Some(idx) = owned.first_index_of(id) {
            owned.remove(idx);
        }

        save_owned_pets(env, owner, &owned);
    }

    fn save_owned_pets(env: &Env, owner: &Address, owned: &Vec<PetId>) {
        let key = DataKey::OwnedPets(owner.clone());
        env.storage().persistent().set(&key, owned);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
}
