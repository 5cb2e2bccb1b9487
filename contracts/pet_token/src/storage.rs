use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

/// Amount `spender` may move out of `from`, valid up to and including
/// `expiration_ledger`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    IsInitialized,
    TotalSupply,
    Minter(Address),
    Balance(Address),
    Allowance(AllowanceDataKey),
}

pub mod utils {
    use soroban_sdk::{Address, Env};

    use crate::{
        error::ContractError,
        ttl::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{AllowanceDataKey, AllowanceValue, DataKey};

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::IsInitialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::IsInitialized, &true);
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)?;
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(admin)
    }

    pub fn is_minter(env: &Env, account: &Address) -> bool {
        let key = DataKey::Minter(account.clone());
        let result = env.storage().persistent().get(&key).unwrap_or(false);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        result
    }

    pub fn save_minter(env: &Env, minter: &Address) {
        let key = DataKey::Minter(minter.clone());
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_total_supply(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(env: &Env, total: i128) {
        env.storage().instance().set(&DataKey::TotalSupply, &total);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_balance(env: &Env, account: &Address) -> i128 {
        let key = DataKey::Balance(account.clone());
        if let Some(balance) = env.storage().persistent().get::<_, i128>(&key) {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        } else {
            0
        }
    }

    pub fn set_balance(env: &Env, account: &Address, amount: i128) {
        let key = DataKey::Balance(account.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }

    pub fn receive_balance(env: &Env, account: &Address, amount: i128) -> Result<(), ContractError> {
        let balance = get_balance(env, account)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        set_balance(env, account, balance);

        Ok(())
    }

    pub fn spend_balance(env: &Env, account: &Address, amount: i128) -> Result<(), ContractError> {
        let balance = get_balance(env, account);
        if balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        set_balance(env, account, balance - amount);

        Ok(())
    }

    // expired allowances read as zero
    pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        let key = DataKey::Allowance(AllowanceDataKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        match env.storage().temporary().get::<_, AllowanceValue>(&key) {
            Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => {
                allowance
            }
            Some(allowance) => AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            },
            None => AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
        }
    }

    pub fn set_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(ContractError::InvalidExpirationLedger);
        }

        let key = DataKey::Allowance(AllowanceDataKey {
            from: from.clone(),
            spender: spender.clone(),
        });
        env.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );

        if amount > 0 {
            let live_for = expiration_ledger - env.ledger().sequence();
            env.storage().temporary().extend_ttl(&key, live_for, live_for);
        }

        Ok(())
    }

    pub fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let allowance = get_allowance(env, from, spender);
        if allowance.amount < amount {
            return Err(ContractError::InsufficientAllowance);
        }
        if amount > 0 {
            set_allowance(
                env,
                from,
                spender,
                allowance.amount - amount,
                allowance.expiration_ledger,
            )?;
        }

        Ok(())
    }
}
