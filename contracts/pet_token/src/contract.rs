use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    error::ContractError,
    storage::utils::{
        get_admin, get_allowance, get_balance, get_total_supply, is_initialized, is_minter,
        receive_balance, save_admin, save_minter, set_allowance, set_initialized,
        set_total_supply, spend_allowance, spend_balance,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(key = "Description", val = "PetBase $PET Reward Token");

// the token is denominated like an EVM token, 1 PET == 10^18 base units
const MAX_DECIMAL: u32 = 18;

#[contract]
pub struct PetToken;

#[contractimpl]
impl PetToken {
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Pet Token: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        if decimal > MAX_DECIMAL {
            log!(
                &env,
                "Pet Token: Initialize: Decimal must not be greater than ",
                MAX_DECIMAL
            );
            return Err(ContractError::InvalidDecimal);
        }

        save_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal,
            name: name.clone(),
            symbol,
        });

        set_initialized(&env);

        env.events().publish(("initialize", "token name: "), name);

        Ok(())
    }

    // Grants the minter role to `minter`. In a deployment this is the pet registry.
    #[allow(dead_code)]
    pub fn add_minter(env: Env, minter: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        save_minter(&env, &minter);

        env.events().publish(("minter_added", admin), minter);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn is_minter(env: Env, account: Address) -> bool {
        is_minter(&env, &account)
    }

    // Creates `amount` new base units in `to`'s balance
    #[allow(dead_code)]
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        if !is_minter(&env, &minter) {
            log!(&env, "Pet Token: Mint: Unauthorized. Minter: ", minter);
            return Err(ContractError::Unauthorized);
        }

        minter.require_auth();

        check_positive_amount(&env, amount)?;

        let total_supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        receive_balance(&env, &to, amount)?;
        set_total_supply(&env, total_supply);

        TokenUtils::new(&env).events().mint(minter, to, amount);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    #[allow(dead_code)]
    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    #[allow(dead_code)]
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    #[allow(dead_code)]
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();

        if amount < 0 {
            log!(&env, "Pet Token: Approve: Negative amount: ", amount);
            return Err(ContractError::InvalidAmount);
        }

        set_allowance(&env, &from, &spender, amount, expiration_ledger).map_err(|err| {
            log!(
                &env,
                "Pet Token: Approve: Expiration ledger is in the past: ",
                expiration_ledger
            );
            err
        })?;

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        check_positive_amount(&env, amount)?;
        move_balance(&env, &from, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        check_positive_amount(&env, amount)?;

        spend_allowance(&env, &from, &spender, amount).map_err(|err| {
            log!(
                &env,
                "Pet Token: Transfer from: Insufficient allowance for spender ",
                spender
            );
            err
        })?;
        move_balance(&env, &from, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    // Destroys `amount` base units held by `from`
    #[allow(dead_code)]
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        check_positive_amount(&env, amount)?;

        spend_balance(&env, &from, amount).map_err(|err| {
            log!(&env, "Pet Token: Burn: Insufficient balance. Account: ", from);
            err
        })?;
        set_total_supply(&env, get_total_supply(&env) - amount);

        TokenUtils::new(&env).events().burn(from, amount);

        Ok(())
    }

    #[allow(dead_code)]
    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    #[allow(dead_code)]
    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    #[allow(dead_code)]
    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }

    #[allow(dead_code)]
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        get_admin(env)
    }
}

fn check_positive_amount(env: &Env, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        log!(env, "Pet Token: Amount must be positive. Amount: ", amount);
        return Err(ContractError::InvalidAmount);
    }

    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    spend_balance(env, from, amount).map_err(|err| {
        log!(
            env,
            "Pet Token: Transfer: Insufficient balance. Account: ",
            from.clone()
        );
        err
    })?;
    receive_balance(env, to, amount)
}
