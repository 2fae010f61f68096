#![no_std]


mod events;
mod ledger;
mod storage_types;

pub use events::{CancelEvent, ClaimEvent, LaunchEvent, PledgeEvent};
pub use storage_types::{Campaign, CampaignId, CampaignStatus, Config, CrowdfundError};

use ledger::{
    extend_instance, hold, next_campaign_id, pay, read_campaign, read_config, read_pledge,
    write_campaign, write_pledge,
};
use storage_types::{DataKey, DEFAULT_MAX_DURATION};

use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the ledger with its admin, the token pledges are made in,
    /// and the longest window a campaign may span in seconds (90 days when
    /// `None`).
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        max_duration: Option<u64>,
    ) -> Result<(), CrowdfundError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(CrowdfundError::AlreadyInitialized);
        }
        let max_duration = max_duration.unwrap_or(DEFAULT_MAX_DURATION);
        if max_duration == 0 {
            return Err(CrowdfundError::InvalidConfiguration);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::MaxDuration, &max_duration);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u64);

        extend_instance(&env);
        Ok(())
    }

    /// Create a new campaign. The window `[start_time, end_time)` must not
    /// begin in the past.
    pub fn launch(
        env: Env,
        creator: Address,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();

        if goal <= 0
            || start_time >= end_time
            || start_time < now
            || end_time > now.saturating_add(config.max_duration)
        {
            return Err(CrowdfundError::InvalidCampaignParameters);
        }

        let campaign_id = next_campaign_id(&env)?;
        let campaign = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            goal,
            pledged: 0,
            start_time,
            end_time,
            claimed: false,
            cancelled: false,
        };
        write_campaign(&env, &campaign);
        extend_instance(&env);

        log!(&env, "campaign launched", campaign_id, goal);
        events::emit_launch(
            &env,
            LaunchEvent {
                campaign_id,
                creator,
                goal,
                start_time,
                end_time,
            },
        );

        Ok(campaign_id)
    }

    /// Withdraw a campaign before its window opens.
    pub fn cancel(env: Env, campaign_id: CampaignId, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();
        let mut campaign = read_campaign(&env, campaign_id)?;

        if caller != campaign.creator {
            return Err(CrowdfundError::NotAuthorized);
        }
        match campaign.status(env.ledger().timestamp()) {
            CampaignStatus::Pending => {}
            CampaignStatus::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            _ => return Err(CrowdfundError::CampaignStarted),
        }

        campaign.cancelled = true;
        write_campaign(&env, &campaign);

        log!(&env, "campaign cancelled", campaign_id);
        events::emit_cancel(
            &env,
            CancelEvent {
                campaign_id,
                creator: caller,
            },
        );
        Ok(())
    }

    /// Commit `amount` to a campaign while its window is open. The tokens are
    /// taken into custody in the same invocation.
    pub fn pledge(
        env: Env,
        campaign_id: CampaignId,
        pledger: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        pledger.require_auth();
        let mut campaign = read_campaign(&env, campaign_id)?;

        match campaign.status(env.ledger().timestamp()) {
            CampaignStatus::Open => {}
            CampaignStatus::Cancelled => return Err(CrowdfundError::CampaignCancelled),
            _ => return Err(CrowdfundError::CampaignNotOpen),
        }
        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let outstanding = read_pledge(&env, campaign_id, &pledger)
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticError)?;
        campaign.pledged = campaign
            .pledged
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticError)?;

        write_campaign(&env, &campaign);
        write_pledge(&env, campaign_id, &pledger, outstanding);
        extend_instance(&env);
        hold(&env, &pledger, amount)?;

        log!(&env, "pledged", campaign_id, amount, campaign.pledged);
        events::emit_pledge(
            &env,
            PledgeEvent {
                campaign_id,
                pledger,
                amount,
            },
        );
        Ok(())
    }

    /// Take back part or all of a pledge before the window closes.
    pub fn unpledge(
        env: Env,
        campaign_id: CampaignId,
        pledger: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        pledger.require_auth();
        let mut campaign = read_campaign(&env, campaign_id)?;

        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }
        if env.ledger().timestamp() >= campaign.end_time {
            return Err(CrowdfundError::CampaignNotOpen);
        }

        let outstanding = read_pledge(&env, campaign_id, &pledger);
        if outstanding < amount {
            return Err(CrowdfundError::InsufficientPledge);
        }

        campaign.pledged -= amount;
        write_campaign(&env, &campaign);
        write_pledge(&env, campaign_id, &pledger, outstanding - amount);
        extend_instance(&env);
        pay(&env, &pledger, amount)?;

        log!(&env, "unpledged", campaign_id, amount, campaign.pledged);
        events::emit_unpledge(
            &env,
            PledgeEvent {
                campaign_id,
                pledger,
                amount,
            },
        );
        Ok(())
    }

    /// Creator withdraws everything pledged once the window has closed with
    /// the goal met. Returns the amount paid out.
    pub fn claim(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, CrowdfundError> {
        caller.require_auth();
        let mut campaign = read_campaign(&env, campaign_id)?;

        if caller != campaign.creator {
            return Err(CrowdfundError::NotAuthorized);
        }
        if env.ledger().timestamp() < campaign.end_time {
            return Err(CrowdfundError::CampaignStillOpen);
        }
        if campaign.claimed {
            return Err(CrowdfundError::AlreadyClaimed);
        }
        if !campaign.goal_reached() {
            return Err(CrowdfundError::GoalNotMet);
        }

        // Flag must be persisted before the payout leaves the contract.
        campaign.claimed = true;
        write_campaign(&env, &campaign);
        extend_instance(&env);
        pay(&env, &campaign.creator, campaign.pledged)?;

        log!(&env, "campaign claimed", campaign_id, campaign.pledged);
        events::emit_claim(
            &env,
            ClaimEvent {
                campaign_id,
                creator: caller,
                amount: campaign.pledged,
            },
        );
        Ok(campaign.pledged)
    }

    /// Pledger recovers their stake from a campaign that closed short of its
    /// goal. Returns the amount refunded.
    pub fn refund(env: Env, campaign_id: CampaignId, pledger: Address) -> Result<i128, CrowdfundError> {
        pledger.require_auth();
        let mut campaign = read_campaign(&env, campaign_id)?;

        if env.ledger().timestamp() < campaign.end_time {
            return Err(CrowdfundError::CampaignStillOpen);
        }
        if campaign.goal_reached() {
            return Err(CrowdfundError::GoalMet);
        }

        let amount = read_pledge(&env, campaign_id, &pledger);
        if amount <= 0 {
            return Err(CrowdfundError::NothingToRefund);
        }

        campaign.pledged -= amount;
        write_campaign(&env, &campaign);
        write_pledge(&env, campaign_id, &pledger, 0);
        extend_instance(&env);
        pay(&env, &pledger, amount)?;

        log!(&env, "refunded", campaign_id, amount);
        events::emit_refund(
            &env,
            PledgeEvent {
                campaign_id,
                pledger,
                amount,
            },
        );
        Ok(amount)
    }

    /// Admin functions
    pub fn set_max_duration(env: Env, max_duration: u64) -> Result<(), CrowdfundError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        if max_duration == 0 {
            return Err(CrowdfundError::InvalidConfiguration);
        }

        env.storage().instance().set(&DataKey::MaxDuration, &max_duration);
        extend_instance(&env);
        Ok(())
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        read_campaign(&env, campaign_id)
    }

    pub fn get_status(env: Env, campaign_id: CampaignId) -> Result<CampaignStatus, CrowdfundError> {
        let campaign = read_campaign(&env, campaign_id)?;
        Ok(campaign.status(env.ledger().timestamp()))
    }

    pub fn get_pledge(env: Env, campaign_id: CampaignId, pledger: Address) -> i128 {
        read_pledge(&env, campaign_id, &pledger)
    }

    pub fn campaign_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::NextCampaignId).unwrap_or(0)
    }

    pub fn get_config(env: Env) -> Result<Config, CrowdfundError> {
        read_config(&env)
    }
}
