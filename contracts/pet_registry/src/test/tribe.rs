use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use crate::{error::ContractError, tribe::MAX_TRIBE_SIZE};

use super::setup::{count_events, initialize_registry_and_token, join_tribe, mint_default_pet};

#[test]
fn members_are_listed_in_join_order() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &owner);

    let members = join_tribe(&env, &registry, id, 3);

    assert_eq!(registry.tribe_members(&id), members);
    assert_eq!(registry.tribe_size(&id), 3);
    assert_eq!(registry.tribe_member(&id, &0), members.get(0).unwrap());
    assert_eq!(registry.tribe_member(&id, &2), members.get(2).unwrap());
    assert!(registry.is_tribe_member(&id, &members.get(1).unwrap()));
    assert!(!registry.is_tribe_member(&id, &owner));
}

#[test]
fn slot_read_past_populated_range_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));
    join_tribe(&env, &registry, id, 2);

    assert_eq!(
        registry.try_tribe_member(&id, &2),
        Err(Ok(ContractError::InvalidMemberIndex))
    );
}

#[test]
fn join_emits_tribe_joined_event() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));

    registry.tribe_join(&id, &Address::generate(&env));

    assert_eq!(count_events(&env, &registry.address, "tribe_joined"), 1);
}

#[test]
fn joining_twice_fails_and_leaves_state_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let member = Address::generate(&env);
    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));

    registry.tribe_join(&id, &member);

    assert_eq!(
        registry.try_tribe_join(&id, &member),
        Err(Ok(ContractError::AlreadyMember))
    );
    assert_eq!(registry.tribe_members(&id), vec![&env, member]);
}

#[test]
fn owner_cannot_join_own_tribe() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &owner);

    assert_eq!(
        registry.try_tribe_join(&id, &owner),
        Err(Ok(ContractError::SelfJoinForbidden))
    );
    assert_eq!(registry.tribe_size(&id), 0);
}

#[test]
fn eleventh_member_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));

    let members = join_tribe(&env, &registry, id, MAX_TRIBE_SIZE);

    assert_eq!(
        registry.try_tribe_join(&id, &Address::generate(&env)),
        Err(Ok(ContractError::TribeFull))
    );
    assert_eq!(registry.tribe_size(&id), MAX_TRIBE_SIZE);
    assert_eq!(registry.tribe_members(&id), members);
}

#[test]
fn joining_unknown_pet_fails_with_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));

    assert_eq!(
        registry.try_tribe_join(&1, &Address::generate(&env)),
        Err(Ok(ContractError::NotFound))
    );
    assert_eq!(
        registry.try_tribe_members(&1),
        Err(Ok(ContractError::NotFound))
    );
}

#[test]
fn leaving_keeps_remaining_order_and_frees_a_slot() {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));
    let members = join_tribe(&env, &registry, id, MAX_TRIBE_SIZE);

    let leaving = members.get(1).unwrap();
    registry.tribe_leave(&id, &leaving);

    assert_eq!(registry.tribe_size(&id), MAX_TRIBE_SIZE - 1);
    assert!(!registry.is_tribe_member(&id, &leaving));
    assert_eq!(registry.tribe_member(&id, &0), members.get(0).unwrap());
    assert_eq!(registry.tribe_member(&id, &1), members.get(2).unwrap());

    // the freed slot can be taken again
    registry.tribe_join(&id, &leaving);
    assert_eq!(registry.tribe_size(&id), MAX_TRIBE_SIZE);
    assert_eq!(
        registry.tribe_member(&id, &(MAX_TRIBE_SIZE - 1)),
        leaving
    );
}

#[test]
fn leaving_without_membership_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &Address::generate(&env));

    assert_eq!(
        registry.try_tribe_leave(&id, &Address::generate(&env)),
        Err(Ok(ContractError::NotMember))
    );
}

#[test]
fn owner_is_never_a_member_after_any_join_sequence() {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let owner = Address::generate(&env);
    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = mint_default_pet(&env, &registry, &owner);

    for _ in 0..(MAX_TRIBE_SIZE + 2) {
        let _ = registry.try_tribe_join(&id, &owner);
        let _ = registry.try_tribe_join(&id, &Address::generate(&env));

        assert!(registry.tribe_size(&id) <= MAX_TRIBE_SIZE);
        assert!(!registry.is_tribe_member(&id, &owner));
    }
}
