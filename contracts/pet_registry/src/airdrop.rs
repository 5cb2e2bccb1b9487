use num_integer::Integer;
use soroban_sdk::{log, Env};

use crate::{
    error::ContractError,
    events,
    leveling::Milestone,
    pet_token,
    storage::{
        utils::{get_pet_token, get_tribe},
        Pet,
    },
};

/// Pays `milestone`'s reward to the current tribe of `pet` and records the
/// total on the pet. Returns the distributed amount in base units.
///
/// The reward is split evenly, the remainder of the split goes to the
/// earliest-joined member. An empty tribe receives nothing and the pet's
/// airdrop count stays as it is.
pub fn distribute(env: &Env, pet: &mut Pet, milestone: &Milestone) -> Result<i128, ContractError> {
    let members = get_tribe(env, pet.id);
    if members.is_empty() {
        log!(
            env,
            "Pet Registry: Airdrop: Empty tribe, skipping distribution. Pet: ",
            pet.id
        );
        return Ok(0);
    }

    let token = pet_token::Client::new(env, &get_pet_token(env)?);

    let unit = 10i128
        .checked_pow(token.decimals())
        .ok_or(ContractError::Overflow)?;
    let total = milestone
        .reward
        .checked_mul(unit)
        .ok_or(ContractError::Overflow)?;

    let (share, remainder) = total.div_rem(&(members.len() as i128));

    // the registry mints as itself, it has to hold the token's minter role
    let minter = env.current_contract_address();
    for (idx, member) in members.iter().enumerate() {
        let amount = if idx == 0 { share + remainder } else { share };
        token.mint(&minter, &member, &amount);
    }

    pet.airdrop_count = pet
        .airdrop_count
        .checked_add(total)
        .ok_or(ContractError::Overflow)?;

    events::airdrop_distributed(env, pet.id, total, milestone.level);

    Ok(total)
}
