use soroban_sdk::{log, Env};

use crate::{error::ContractError, storage::Pet};

pub const MAX_STAT: u32 = 100;

/// Points restored by a single feed or play action.
pub const CARE_BOOST: u32 = 10;

/// Seconds of ledger time between two actions of the same kind on one pet.
pub const CARE_COOLDOWN: u64 = 60 * 60;

fn check_cooldown(env: &Env, last: Option<u64>) -> Result<(), ContractError> {
    let now = env.ledger().timestamp();
    match last {
        Some(last) if now < last.saturating_add(CARE_COOLDOWN) => {
            log!(
                env,
                "Pet Registry: Care: Action on cooldown. Next allowed at: ",
                last.saturating_add(CARE_COOLDOWN)
            );
            Err(ContractError::CareOnCooldown)
        }
        _ => Ok(()),
    }
}

pub fn feed(env: &Env, pet: &mut Pet) -> Result<u32, ContractError> {
    check_cooldown(env, pet.last_fed)?;

    pet.health = (pet.health + CARE_BOOST).min(MAX_STAT);
    pet.last_fed = Some(env.ledger().timestamp());

    Ok(pet.health)
}

pub fn play(env: &Env, pet: &mut Pet) -> Result<u32, ContractError> {
    check_cooldown(env, pet.last_played)?;

    pet.happiness = (pet.happiness + CARE_BOOST).min(MAX_STAT);
    pet.last_played = Some(env.ledger().timestamp());

    Ok(pet.happiness)
}
