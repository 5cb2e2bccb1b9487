use soroban_sdk::{
    contract, contractimpl, contractmeta, log, Address, BytesN, Env, String, Vec,
};

use crate::{
    airdrop,
    alliance::{can_upgrade_traits, AllianceSet, AuthorizationProvider},
    care,
    error::ContractError,
    events,
    leveling::{self, TRADABLE_LEVEL},
    metadata::{self, is_valid_label},
    storage::{
        utils::{
            add_owned_pet, generate_pet_id, get_admin, get_config, get_owned_pets, get_pet,
            get_pet_count, get_pet_token, get_tribe, is_initialized, remove_owned_pet,
            save_admin, save_config, save_pet, save_pet_token, set_initialized,
        },
        Config, MilestoneTier, Pet, PetId, PetMetadata, PetStats,
    },
    tribe,
};

// Metadata that is added on to the WASM custom section
contractmeta!(key = "Description", val = "PetBase Pet Registry");

/// A pet's traits stay append-only, this bounds the list.
pub const MAX_TRAITS: u32 = 16;

#[contract]
pub struct PetRegistry;

#[contractimpl]
impl PetRegistry {
    // takes an address and uses it as the administrator/owner of the registry
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        pet_token: Address,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Pet Registry: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_config(
            &env,
            &Config {
                name: name.clone(),
                symbol,
            },
        );
        save_admin(&env, &admin);
        save_pet_token(&env, &pet_token);

        set_initialized(&env);

        env.events()
            .publish(("initialize", "registry name: "), name);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn set_pet_token(env: Env, pet_token: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        save_pet_token(&env, &pet_token);

        env.events().publish(("set pet token", "token: "), pet_token);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn show_pet_token(env: Env) -> Result<Address, ContractError> {
        get_pet_token(&env)
    }

    // Creates a new pet owned by `to` and returns its id. Anyone may mint for any
    // recipient, only the stats and name are checked.
    #[allow(dead_code)]
    pub fn mint_pet(
        env: Env,
        to: Address,
        name: String,
        health: u32,
        happiness: u32,
        level: u32,
    ) -> Result<PetId, ContractError> {
        if !is_valid_label(&name) {
            log!(&env, "Pet Registry: Mint pet: Invalid name. Name: ", name);
            return Err(ContractError::InvalidName);
        }

        if health > care::MAX_STAT || happiness > care::MAX_STAT || level < 1 {
            log!(
                &env,
                "Pet Registry: Mint pet: Invalid stats. ",
                "health: ",
                health,
                " happiness: ",
                happiness,
                " level: ",
                level
            );
            return Err(ContractError::InvalidStats);
        }

        let id = generate_pet_id(&env);
        let pet = Pet {
            id,
            owner: to.clone(),
            name,
            health,
            happiness,
            level,
            traits: Vec::new(&env),
            airdrop_count: 0,
            last_fed: None,
            last_played: None,
        };

        save_pet(&env, &pet);
        add_owned_pet(&env, &to, id);

        events::pet_minted(&env, &pet);

        Ok(id)
    }

    // Moves pet `id` from `from` to `to`
    #[allow(dead_code)]
    pub fn transfer(env: Env, from: Address, to: Address, id: PetId) -> Result<(), ContractError> {
        from.require_auth();

        let mut pet = get_pet(&env, id)?;

        if pet.owner != from {
            log!(
                &env,
                "Pet Registry: Transfer: Unauthorized. ",
                from,
                " does not own pet ",
                id
            );
            return Err(ContractError::Unauthorized);
        }

        if tribe::is_member(&get_tribe(&env, id), &to) {
            log!(
                &env,
                "Pet Registry: Transfer: Recipient is a member of the pet's tribe. Recipient: ",
                to
            );
            return Err(ContractError::RecipientInTribe);
        }

        pet.owner = to.clone();
        save_pet(&env, &pet);
        remove_owned_pet(&env, &from, id);
        add_owned_pet(&env, &to, id);

        events::transfer(&env, &from, &to, id);

        Ok(())
    }

    // Appends `trait_name` to the pet's traits. Owner or alliance member only.
    #[allow(dead_code)]
    pub fn upgrade_trait(
        env: Env,
        caller: Address,
        id: PetId,
        trait_name: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut pet = get_pet(&env, id)?;

        if !can_upgrade_traits::<AllianceSet>(&env, &pet, &caller) {
            log!(
                &env,
                "Pet Registry: Upgrade trait: Not authorized to upgrade this pet. Caller: ",
                caller
            );
            return Err(ContractError::Unauthorized);
        }

        if !is_valid_label(&trait_name) {
            log!(
                &env,
                "Pet Registry: Upgrade trait: Invalid trait. Trait: ",
                trait_name
            );
            return Err(ContractError::InvalidTrait);
        }

        if pet.traits.len() >= MAX_TRAITS {
            log!(
                &env,
                "Pet Registry: Upgrade trait: Trait limit reached. Pet: ",
                id
            );
            return Err(ContractError::TooManyTraits);
        }

        pet.traits.push_back(trait_name.clone());
        save_pet(&env, &pet);

        events::trait_upgraded(&env, id, &trait_name, &caller);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn add_alliance(env: Env, account: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        AllianceSet::grant(&env, &account);

        events::alliance_added(&env, &account);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn remove_alliance(env: Env, account: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        AllianceSet::revoke(&env, &account);

        events::alliance_removed(&env, &account);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn is_alliance(env: Env, account: Address) -> bool {
        AllianceSet::is_authorized(&env, &account)
    }

    // Raises the pet's level by one. Reaching a milestone level pays the
    // tribe in the same invocation, a failed payout reverts the level up.
    #[allow(dead_code)]
    pub fn level_up(env: Env, id: PetId) -> Result<u32, ContractError> {
        let mut pet = get_pet(&env, id)?;
        pet.owner.require_auth();

        let new_level = leveling::advance(&env, &mut pet)?;

        events::level_up(&env, id, new_level);

        if let Some(milestone) = leveling::milestone_at(new_level) {
            airdrop::distribute(&env, &mut pet, milestone)?;
        }

        if new_level == TRADABLE_LEVEL {
            events::tradable(&env, id, &pet.owner);
        }

        save_pet(&env, &pet);

        Ok(new_level)
    }

    #[allow(dead_code)]
    pub fn feed(env: Env, id: PetId) -> Result<u32, ContractError> {
        let mut pet = get_pet(&env, id)?;
        pet.owner.require_auth();

        let health = care::feed(&env, &mut pet)?;
        save_pet(&env, &pet);

        events::fed(&env, id, health);

        Ok(health)
    }

    #[allow(dead_code)]
    pub fn play(env: Env, id: PetId) -> Result<u32, ContractError> {
        let mut pet = get_pet(&env, id)?;
        pet.owner.require_auth();

        let happiness = care::play(&env, &mut pet)?;
        save_pet(&env, &pet);

        events::played(&env, id, happiness);

        Ok(happiness)
    }

    // `member` joins the tribe gathered around pet `id`
    #[allow(dead_code)]
    pub fn tribe_join(env: Env, id: PetId, member: Address) -> Result<(), ContractError> {
        member.require_auth();

        let pet = get_pet(&env, id)?;

        tribe::join(&env, &pet, &member)
    }

    #[allow(dead_code)]
    pub fn tribe_leave(env: Env, id: PetId, member: Address) -> Result<(), ContractError> {
        member.require_auth();

        get_pet(&env, id)?;

        tribe::leave(&env, id, &member)
    }

    // Members of the tribe in join order
    #[allow(dead_code)]
    pub fn tribe_members(env: Env, id: PetId) -> Result<Vec<Address>, ContractError> {
        get_pet(&env, id)?;

        Ok(get_tribe(&env, id))
    }

    #[allow(dead_code)]
    pub fn tribe_member(env: Env, id: PetId, index: u32) -> Result<Address, ContractError> {
        get_pet(&env, id)?;

        tribe::member_at(&env, id, index)
    }

    #[allow(dead_code)]
    pub fn tribe_size(env: Env, id: PetId) -> Result<u32, ContractError> {
        get_pet(&env, id)?;

        Ok(get_tribe(&env, id).len())
    }

    #[allow(dead_code)]
    pub fn is_tribe_member(env: Env, id: PetId, account: Address) -> Result<bool, ContractError> {
        get_pet(&env, id)?;

        Ok(tribe::is_member(&get_tribe(&env, id), &account))
    }

    #[allow(dead_code)]
    pub fn get_pet_stats(env: Env, id: PetId) -> Result<PetStats, ContractError> {
        Ok(get_pet(&env, id)?.stats())
    }

    #[allow(dead_code)]
    pub fn get_pet_name(env: Env, id: PetId) -> Result<String, ContractError> {
        Ok(get_pet(&env, id)?.name)
    }

    #[allow(dead_code)]
    pub fn get_pet_traits(env: Env, id: PetId) -> Result<Vec<String>, ContractError> {
        Ok(get_pet(&env, id)?.traits)
    }

    #[allow(dead_code)]
    pub fn get_pet_metadata(env: Env, id: PetId) -> Result<PetMetadata, ContractError> {
        let pet = get_pet(&env, id)?;

        Ok(PetMetadata {
            id: pet.id,
            owner: pet.owner.clone(),
            name: pet.name.clone(),
            stats: pet.stats(),
            traits: pet.traits.clone(),
            airdrop_count: pet.airdrop_count,
            tribe_size: get_tribe(&env, id).len(),
            tradable: leveling::is_tradable(&pet),
        })
    }

    #[allow(dead_code)]
    pub fn owner_of(env: Env, id: PetId) -> Result<Address, ContractError> {
        Ok(get_pet(&env, id)?.owner)
    }

    #[allow(dead_code)]
    pub fn token_uri(env: Env, id: PetId) -> Result<String, ContractError> {
        let pet = get_pet(&env, id)?;

        metadata::token_uri(&env, &pet)
    }

    // Base units of $PET distributed for pet `id` so far
    #[allow(dead_code)]
    pub fn airdrop_count(env: Env, id: PetId) -> Result<i128, ContractError> {
        Ok(get_pet(&env, id)?.airdrop_count)
    }

    #[allow(dead_code)]
    pub fn is_tradable(env: Env, id: PetId) -> Result<bool, ContractError> {
        Ok(leveling::is_tradable(&get_pet(&env, id)?))
    }

    #[allow(dead_code)]
    pub fn milestones(env: Env) -> Vec<MilestoneTier> {
        leveling::milestone_tiers(&env)
    }

    // Number of pets ever minted, ids run from 1 to this value
    #[allow(dead_code)]
    pub fn total_supply(env: Env) -> u64 {
        get_pet_count(&env)
    }

    #[allow(dead_code)]
    pub fn balance(env: Env, owner: Address) -> u32 {
        get_owned_pets(&env, &owner).len()
    }

    #[allow(dead_code)]
    pub fn tokens_of_owner(env: Env, owner: Address) -> Vec<PetId> {
        get_owned_pets(&env, &owner)
    }

    #[allow(dead_code)]
    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(get_config(&env)?.name)
    }

    #[allow(dead_code)]
    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(get_config(&env)?.symbol)
    }

    #[allow(dead_code)]
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        get_admin(env)
    }

    pub fn show_config(env: &Env) -> Result<Config, ContractError> {
        get_config(env)
    }
}
