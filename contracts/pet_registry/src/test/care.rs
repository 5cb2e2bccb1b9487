use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::error::ContractError;

use super::setup::{count_events, initialize_registry_and_token, HOUR};

fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

#[test]
fn feeding_and_playing_raise_stats() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, 1_000);

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Hungry"),
        &50,
        &40,
        &1,
    );

    assert_eq!(registry.feed(&id), 60);
    assert_eq!(count_events(&env, &registry.address, "fed"), 1);

    assert_eq!(registry.play(&id), 50);
    assert_eq!(count_events(&env, &registry.address, "played"), 1);

    let stats = registry.get_pet_stats(&id);
    assert_eq!(stats.health, 60);
    assert_eq!(stats.happiness, 50);
    assert_eq!(stats.level, 1);
}

#[test]
fn stats_are_capped_at_one_hundred() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, 1_000);

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Plump"),
        &95,
        &100,
        &1,
    );

    assert_eq!(registry.feed(&id), 100);
    assert_eq!(registry.play(&id), 100);

    set_timestamp(&env, 1_000 + HOUR);
    assert_eq!(registry.feed(&id), 100);
}

#[test]
fn care_actions_respect_the_cooldown() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, 10_000);

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Greedy"),
        &10,
        &10,
        &1,
    );

    registry.feed(&id);
    assert_eq!(registry.try_feed(&id), Err(Ok(ContractError::CareOnCooldown)));

    set_timestamp(&env, 10_000 + HOUR - 1);
    assert_eq!(registry.try_feed(&id), Err(Ok(ContractError::CareOnCooldown)));
    assert_eq!(registry.get_pet_stats(&id).health, 20);

    set_timestamp(&env, 10_000 + HOUR);
    assert_eq!(registry.feed(&id), 30);
}

#[test]
fn feed_and_play_cooldowns_are_independent() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, 10_000);

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Busy"),
        &10,
        &10,
        &1,
    );

    registry.feed(&id);
    assert_eq!(registry.play(&id), 20);
    assert_eq!(registry.try_play(&id), Err(Ok(ContractError::CareOnCooldown)));
}

#[test]
fn caring_for_unknown_pet_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));

    assert_eq!(registry.try_feed(&3), Err(Ok(ContractError::NotFound)));
    assert_eq!(registry.try_play(&3), Err(Ok(ContractError::NotFound)));
}

#[test]
fn feeding_a_weak_pet_unlocks_level_up() {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, 10_000);

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Weak"),
        &75,
        &80,
        &1,
    );

    assert_eq!(
        registry.try_level_up(&id),
        Err(Ok(ContractError::InsufficientHealth))
    );

    assert_eq!(registry.feed(&id), 85);
    assert_eq!(registry.level_up(&id), 2);
}

#[test]
#[should_panic]
fn only_owner_can_feed() {
    let env = Env::default();
    env.mock_all_auths();

    let (registry, _) = initialize_registry_and_token(&env, &Address::generate(&env));
    let id = registry.mint_pet(
        &Address::generate(&env),
        &String::from_str(&env, "Guarded"),
        &50,
        &50,
        &1,
    );

    env.mock_auths(&[]);
    registry.feed(&id);
}
