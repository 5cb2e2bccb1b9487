use percent_encoding::percent_decode;
use petbase_token::{PetToken, PetTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Bytes, Env, String, Symbol, TryFromVal, Val, Vec,
};

use crate::{
    contract::{PetRegistry, PetRegistryClient},
    metadata::URI_PREFIX,
};

pub const ONE_PET: i128 = 1_000_000_000_000_000_000;
pub const HOUR: u64 = 3_600u64;

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> PetTokenClient<'a> {
    let token = PetTokenClient::new(env, &env.register_contract(None, PetToken {}));
    token.initialize(
        admin,
        &18,
        &String::from_str(env, "Pet Token"),
        &String::from_str(env, "PET"),
    );

    token
}

/// Deploys the token and the registry and wires the registry in as minter,
/// the same way a deployment script does.
pub fn initialize_registry_and_token<'a>(
    env: &Env,
    admin: &Address,
) -> (PetRegistryClient<'a>, PetTokenClient<'a>) {
    let token = deploy_token_contract(env, admin);

    let registry = PetRegistryClient::new(env, &env.register_contract(None, PetRegistry {}));
    registry.initialize(
        admin,
        &String::from_str(env, "PetPals"),
        &String::from_str(env, "PPET"),
        &token.address,
    );

    token.add_minter(&registry.address);

    (registry, token)
}

pub fn mint_default_pet(env: &Env, registry: &PetRegistryClient, owner: &Address) -> u64 {
    registry.mint_pet(owner, &String::from_str(env, "Fluffy"), &100, &80, &1)
}

pub fn join_tribe(env: &Env, registry: &PetRegistryClient, id: u64, count: u32) -> Vec<Address> {
    let mut members = vec![env];
    for _ in 0..count {
        let member = Address::generate(env);
        registry.tribe_join(&id, &member);
        members.push_back(member);
    }

    members
}

/// Data of every event published by `contract` whose first topic is `name`.
pub fn find_events(env: &Env, contract: &Address, name: &str) -> Vec<Val> {
    let topic = Symbol::new(env, name);
    let mut found = vec![env];

    for (emitter, topics, data) in env.events().all().iter() {
        if &emitter != contract {
            continue;
        }
        let first = topics
            .get(0)
            .and_then(|val| Symbol::try_from_val(env, &val).ok());
        if first == Some(topic.clone()) {
            found.push_back(data);
        }
    }

    found
}

pub fn count_events(env: &Env, contract: &Address, name: &str) -> u32 {
    find_events(env, contract, name).len()
}

/// Strips the data URI prefix off `uri` and percent-decodes the JSON document.
pub fn decode_token_uri(env: &Env, uri: &String) -> Bytes {
    let mut raw = [0u8; 8192];
    let len = uri.len() as usize;
    uri.copy_into_slice(&mut raw[..len]);
    assert!(raw[..len].starts_with(URI_PREFIX.as_bytes()));

    let mut document = Bytes::new(env);
    for byte in percent_decode(&raw[URI_PREFIX.len()..len]) {
        document.push_back(byte);
    }

    document
}
