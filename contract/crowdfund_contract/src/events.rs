use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
}

/// Shared payload for `pledge`, `unpledge` and `refund`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeEvent {
    pub campaign_id: CampaignId,
    pub pledger: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_launch(env: &Env, event: LaunchEvent) {
    env.events().publish((symbol_short!("launch"),), event);
}

pub fn emit_cancel(env: &Env, event: CancelEvent) {
    env.events().publish((symbol_short!("cancel"),), event);
}

pub fn emit_pledge(env: &Env, event: PledgeEvent) {
    env.events().publish((symbol_short!("pledge"),), event);
}

pub fn emit_unpledge(env: &Env, event: PledgeEvent) {
    env.events().publish((symbol_short!("unpledge"),), event);
}

pub fn emit_claim(env: &Env, event: ClaimEvent) {
    env.events().publish((symbol_short!("claim"),), event);
}

pub fn emit_refund(env: &Env, event: PledgeEvent) {
    env.events().publish((symbol_short!("refund"),), event);
}
