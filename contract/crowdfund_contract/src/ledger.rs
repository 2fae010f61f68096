use soroban_sdk::{log, token, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_config(env: &Env) -> Result<Config, CrowdfundError> {
    let storage = env.storage().instance();
    let admin: Address = storage.get(&DataKey::Admin).ok_or(CrowdfundError::NotInitialized)?;
    let token: Address = storage.get(&DataKey::Token).ok_or(CrowdfundError::NotInitialized)?;
    let max_duration: u64 = storage.get(&DataKey::MaxDuration).unwrap_or(DEFAULT_MAX_DURATION);

    Ok(Config {
        admin,
        token,
        max_duration,
    })
}

pub fn next_campaign_id(env: &Env) -> Result<CampaignId, CrowdfundError> {
    let id: CampaignId = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(CrowdfundError::NotInitialized)?;
    let next = id.checked_add(1).ok_or(CrowdfundError::ArithmeticError)?;
    env.storage().instance().set(&DataKey::NextCampaignId, &next);
    Ok(id)
}

pub fn read_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::UnknownCampaign)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn read_pledge(env: &Env, campaign_id: CampaignId, pledger: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Pledge(campaign_id, pledger.clone()))
        .unwrap_or(0)
}

/// Zero amounts remove the record rather than storing it.
pub fn write_pledge(env: &Env, campaign_id: CampaignId, pledger: &Address, amount: i128) {
    let key = PersistentKey::Pledge(campaign_id, pledger.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent(env, &key);
    }
}

/// Moves `amount` from `from` into the contract's custody.
pub fn hold(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let config = read_config(env)?;
    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "hold failed", from.clone(), amount);
            Err(CrowdfundError::TransferFailed)
        }
    }
}

/// Pays `amount` out of the contract's custody. Callers must have committed
/// their own state changes first.
pub fn pay(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let config = read_config(env)?;
    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "pay failed", to.clone(), amount);
            Err(CrowdfundError::TransferFailed)
        }
    }
}
