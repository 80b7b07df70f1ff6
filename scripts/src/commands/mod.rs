//! Implementations of the vault scripts

mod account;
mod deploy;
mod inspect;

pub use account::{report_account, AccountReport};
pub use deploy::{
    configure_rewards, deploy, deploy_strategy, deploy_vault, wire_up, ContractSource,
    DeployParams, DeployReport, RewardWindow,
};
pub use inspect::{inspect, InspectionReport};
