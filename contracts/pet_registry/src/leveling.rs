use soroban_sdk::{log, vec, Env, String, Vec};

use crate::{
    error::ContractError,
    storage::{MilestoneTier, Pet},
};

/// Health has to be strictly above this value for a pet to level up.
pub const LEVEL_UP_MIN_HEALTH: u32 = 80;

/// From this level on a pet may be listed for sale.
pub const TRADABLE_LEVEL: u32 = 10;

pub struct Milestone {
    pub level: u32,
    /// Whole $PET, scaled by the token's decimals when paid out.
    pub reward: i128,
    pub name: &'static str,
}

pub static MILESTONES: [Milestone; 3] = [
    Milestone {
        level: 5,
        reward: 5,
        name: "Rising Star",
    },
    Milestone {
        level: 10,
        reward: 10,
        name: "Tribe Champion",
    },
    Milestone {
        level: 15,
        reward: 20,
        name: "Legendary Guardian",
    },
];

pub fn milestone_at(level: u32) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|milestone| milestone.level == level)
}

pub fn milestone_tiers(env: &Env) -> Vec<MilestoneTier> {
    let mut tiers = vec![env];
    for milestone in MILESTONES.iter() {
        tiers.push_back(MilestoneTier {
            level: milestone.level,
            reward: milestone.reward,
            name: String::from_str(env, milestone.name),
        });
    }

    tiers
}

pub fn is_tradable(pet: &Pet) -> bool {
    pet.level >= TRADABLE_LEVEL
}

/// Advances `pet` by exactly one level and returns the new level. Milestones
/// fire on equality with the new level, so each one is crossed at most once.
pub fn advance(env: &Env, pet: &mut Pet) -> Result<u32, ContractError> {
    if pet.health <= LEVEL_UP_MIN_HEALTH {
        log!(
            env,
            "Pet Registry: Level up: Health too low. Health: ",
            pet.health
        );
        return Err(ContractError::InsufficientHealth);
    }

    pet.level = pet.level.checked_add(1).ok_or_else(|| {
        log!(env, "Pet Registry: Level up: Maximum level reached");
        ContractError::MaxLevelReached
    })?;

    Ok(pet.level)
}
