use soroban_sdk::{Address, Env};

use crate::{
    storage::{DataKey, Pet},
    ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
};

/// Registry-wide set of accounts allowed to act on pets they do not own.
pub trait AuthorizationProvider {
    fn is_authorized(env: &Env, account: &Address) -> bool;

    fn grant(env: &Env, account: &Address);

    fn revoke(env: &Env, account: &Address);
}

pub struct AllianceSet;

impl AuthorizationProvider for AllianceSet {
    fn is_authorized(env: &Env, account: &Address) -> bool {
        let key = DataKey::Alliance(account.clone());
        let result = env.storage().persistent().get(&key).unwrap_or(false);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        result
    }

    fn grant(env: &Env, account: &Address) {
        let key = DataKey::Alliance(account.clone());
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    fn revoke(env: &Env, account: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Alliance(account.clone()));
    }
}

// the owner may always upgrade, alliance members may upgrade any pet
pub fn can_upgrade_traits<A: AuthorizationProvider>(env: &Env, pet: &Pet, caller: &Address) -> bool {
    &pet.owner == caller || A::is_authorized(env, caller)
}
