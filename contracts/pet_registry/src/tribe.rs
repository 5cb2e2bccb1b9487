use soroban_sdk::{log, Address, Env, Vec};

use crate::{
    error::ContractError,
    events,
    storage::{
        utils::{get_tribe, save_tribe},
        Pet, PetId,
    },
};

/// Keeps the airdrop fan-out bounded.
pub const MAX_TRIBE_SIZE: u32 = 10;

pub fn is_member(members: &Vec<Address>, account: &Address) -> bool {
    members.iter().any(|member| &member == account)
}

pub fn join(env: &Env, pet: &Pet, member: &Address) -> Result<(), ContractError> {
    if &pet.owner == member {
        log!(
            env,
            "Pet Registry: Tribe join: Owner cannot join their own tribe. Pet: ",
            pet.id
        );
        return Err(ContractError::SelfJoinForbidden);
    }

    let mut members = get_tribe(env, pet.id);

    if is_member(&members, member) {
        log!(
            env,
            "Pet Registry: Tribe join: Already a member. Member: ",
            member.clone()
        );
        return Err(ContractError::AlreadyMember);
    }

    if members.len() >= MAX_TRIBE_SIZE {
        log!(env, "Pet Registry: Tribe join: Tribe is full. Pet: ", pet.id);
        return Err(ContractError::TribeFull);
    }

    members.push_back(member.clone());
    save_tribe(env, pet.id, &members);

    events::tribe_joined(env, pet.id, member);

    Ok(())
}

pub fn leave(env: &Env, id: PetId, member: &Address) -> Result<(), ContractError> {
    let mut members = get_tribe(env, id);

    let idx = members
        .iter()
        .position(|current| &current == member)
        .ok_or_else(|| {
            log!(
                env,
                "Pet Registry: Tribe leave: Not a member. Member: ",
                member.clone()
            );
            ContractError::NotMember
        })?;

    // `remove` shifts the tail, join order is preserved
    members.remove(idx as u32);
    save_tribe(env, id, &members);

    events::tribe_left(env, id, member);

    Ok(())
}

pub fn member_at(env: &Env, id: PetId, index: u32) -> Result<Address, ContractError> {
    get_tribe(env, id).get(index).ok_or_else(|| {
        log!(
            env,
            "Pet Registry: Tribe member: No member at index ",
            index
        );
        ContractError::InvalidMemberIndex
    })
}
