use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    MaxDuration,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Pledge(CampaignId, Address), // (CampaignID, Pledger) -> amount
}

pub type CampaignId = u64;

/// Lifecycle position of a campaign. Never stored; derived from the campaign
/// fields and the ledger clock by [`Campaign::status`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Pending,
    Open,
    Succeeded,
    Failed,
    Cancelled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub pledged: i128,
    pub start_time: u64,
    pub end_time: u64, // exclusive
    pub claimed: bool,
    pub cancelled: bool,
}

impl Campaign {
    pub fn status(&self, now: u64) -> CampaignStatus {
        if self.cancelled {
            CampaignStatus::Cancelled
        } else if now < self.start_time {
            CampaignStatus::Pending
        } else if now < self.end_time {
            CampaignStatus::Open
        } else if self.goal_reached() {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.pledged >= self.goal
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    pub token: Address,
    pub max_duration: u64, // seconds
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfiguration = 3,
    InvalidCampaignParameters = 4,
    UnknownCampaign = 5,
    CampaignNotOpen = 6,
    CampaignStillOpen = 7,
    CampaignStarted = 8,
    CampaignCancelled = 9,
    InvalidAmount = 10,
    InsufficientPledge = 11,
    NothingToRefund = 12,
    NotAuthorized = 13,
    GoalNotMet = 14,
    GoalMet = 15,
    AlreadyClaimed = 16,
    TransferFailed = 17,
    ArithmeticError = 18,
}

// Constants
pub const DEFAULT_MAX_DURATION: u64 = 90 * 86400; // 90 days
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
