use soroban_sdk::{Address, Env, String, Symbol};

use crate::storage::{Pet, PetId};

pub const PET_MINTED: &str = "pet_minted";
pub const TRANSFER: &str = "transfer";
pub const TRAIT_UPGRADED: &str = "trait_upgraded";
pub const ALLIANCE_ADDED: &str = "alliance_added";
pub const ALLIANCE_REMOVED: &str = "alliance_removed";
pub const LEVEL_UP: &str = "level_up";
pub const TRADABLE: &str = "tradable";
pub const TRIBE_JOINED: &str = "tribe_joined";
pub const TRIBE_LEFT: &str = "tribe_left";
pub const AIRDROP_DISTRIBUTED: &str = "airdrop_distributed";
pub const FED: &str = "fed";
pub const PLAYED: &str = "played";

/// topics - `["pet_minted", to: Address]`
/// data - `[id, name, health, happiness, level]`
pub fn pet_minted(env: &Env, pet: &Pet) {
    env.events().publish(
        (Symbol::new(env, PET_MINTED), pet.owner.clone()),
        (
            pet.id,
            pet.name.clone(),
            pet.health,
            pet.happiness,
            pet.level,
        ),
    );
}

pub fn transfer(env: &Env, from: &Address, to: &Address, id: PetId) {
    env.events().publish(
        (Symbol::new(env, TRANSFER), from.clone(), to.clone()),
        id,
    );
}

pub fn trait_upgraded(env: &Env, id: PetId, trait_name: &String, caller: &Address) {
    env.events().publish(
        (Symbol::new(env, TRAIT_UPGRADED), id),
        (trait_name.clone(), caller.clone()),
    );
}

pub fn alliance_added(env: &Env, account: &Address) {
    env.events()
        .publish((Symbol::new(env, ALLIANCE_ADDED),), account.clone());
}

pub fn alliance_removed(env: &Env, account: &Address) {
    env.events()
        .publish((Symbol::new(env, ALLIANCE_REMOVED),), account.clone());
}

pub fn level_up(env: &Env, id: PetId, new_level: u32) {
    env.events()
        .publish((Symbol::new(env, LEVEL_UP), id), new_level);
}

pub fn tradable(env: &Env, id: PetId, owner: &Address) {
    env.events()
        .publish((Symbol::new(env, TRADABLE), id), owner.clone());
}

pub fn tribe_joined(env: &Env, id: PetId, member: &Address) {
    env.events()
        .publish((Symbol::new(env, TRIBE_JOINED), id), member.clone());
}

pub fn tribe_left(env: &Env, id: PetId, member: &Address) {
    env.events()
        .publish((Symbol::new(env, TRIBE_LEFT), id), member.clone());
}

/// topics - `["airdrop_distributed", id]`
/// data - `[total_amount, level]`, `total_amount` in base units
pub fn airdrop_distributed(env: &Env, id: PetId, total_amount: i128, level: u32) {
    env.events().publish(
        (Symbol::new(env, AIRDROP_DISTRIBUTED), id),
        (total_amount, level),
    );
}

pub fn fed(env: &Env, id: PetId, health: u32) {
    env.events().publish((Symbol::new(env, FED), id), health);
}

pub fn played(env: &Env, id: PetId, happiness: u32) {
    env.events()
        .publish((Symbol::new(env, PLAYED), id), happiness);
}
