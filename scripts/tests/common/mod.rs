//! An in-memory node with the vault contracts, for driving the scripts in tests

#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use alloy::primitives::{Address, Bytes, U256};
use vault_scripts::{
    artifacts::ContractArtifact,
    config::{Network, NetworkConfig},
    contracts::{Chain, Strategy, Token, Vault},
    errors::ScriptError,
};

/// The native balance every transaction costs the signer
pub const TX_COST: u64 = 1_000_000_000_000_000;

/// The signer's starting native balance
pub const STARTING_BALANCE: u64 = 5_000_000_000_000_000_000;

/// The block height the mock chain starts at
pub const START_BLOCK: u64 = 9_000_000;

/// `10^18`
pub fn one() -> U256 {
    U256::from(10u64).pow(U256::from(18u64))
}

/// A whole number of tokens
pub fn tokens(n: u64) -> U256 {
    U256::from(n) * one()
}

/// The signer used by the mock chain
pub fn signer() -> Address {
    Address::repeat_byte(0x5e)
}

/// The state of one mock vault
#[derive(Debug, Clone, Default)]
pub struct VaultState {
    pub strategy: Option<Address>,
    pub reward_factors: Option<(U256, u64, u64)>,
    pub reward_mode: Option<bool>,
    pub balance: U256,
    pub total_supply: U256,
    pub price_per_share: U256,
    pub shares: HashMap<Address, U256>,
    pub claimable: HashMap<Address, U256>,
    pub reward_per_block: U256,
    pub last_reward_block: U256,
    pub acc_reward_per_share: U256,
}

/// Everything the mock chain knows
#[derive(Debug, Default)]
pub struct Ledger {
    pub native: HashMap<Address, U256>,
    pub block: u64,
    pub deployments: Vec<(Address, Bytes)>,
    pub vaults: HashMap<Address, VaultState>,
    pub strategies: HashMap<Address, U256>,
    pub token_balances: HashMap<(Address, Address), U256>,
    /// Every remote call, in order
    pub calls: Vec<String>,
    /// A method name whose next invocation fails
    pub fail_on: Option<String>,
}

impl Ledger {
    /// Record a remote call, failing it if requested
    fn record(&mut self, method: &str) -> Result<(), ScriptError> {
        self.calls.push(method.to_string());
        if self.fail_on.as_deref() == Some(method) {
            self.fail_on = None;
            return Err(ScriptError::ContractInteraction(format!(
                "{method}: execution reverted"
            )));
        }
        Ok(())
    }

    /// Record a transaction: charge the signer and mine a block
    fn transact(&mut self, method: &str) -> Result<(), ScriptError> {
        self.record(method)?;
        let balance = self.native.entry(signer()).or_default();
        *balance = balance.saturating_sub(U256::from(TX_COST));
        self.block += 1;
        Ok(())
    }
}

/// A handle on the shared ledger
#[derive(Clone, Default)]
pub struct MockChain {
    pub ledger: Rc<RefCell<Ledger>>,
}

impl MockChain {
    /// A chain where the signer holds [`STARTING_BALANCE`] at [`START_BLOCK`]
    pub fn new() -> Self {
        let chain = Self::default();
        {
            let mut ledger = chain.ledger.borrow_mut();
            ledger.native.insert(signer(), U256::from(STARTING_BALANCE));
            ledger.block = START_BLOCK;
        }
        chain
    }

    /// The state of the vault at `address`
    pub fn vault_state(&self, address: Address) -> VaultState {
        self.ledger
            .borrow()
            .vaults
            .get(&address)
            .cloned()
            .unwrap_or_default()
    }

    /// Modify the state of the vault at `address`
    pub fn with_vault(&self, address: Address, f: impl FnOnce(&mut VaultState)) {
        f(self.ledger.borrow_mut().vaults.entry(address).or_default())
    }

    /// Set the `token` balance of `holder`
    pub fn set_token_balance(&self, token: Address, holder: Address, amount: U256) {
        self.ledger
            .borrow_mut()
            .token_balances
            .insert((token, holder), amount);
    }

    /// Set the underlying balance reported by the strategy at `address`
    pub fn set_strategy_balance(&self, address: Address, amount: U256) {
        self.ledger.borrow_mut().strategies.insert(address, amount);
    }

    /// The remote calls made so far
    pub fn calls(&self) -> Vec<String> {
        self.ledger.borrow().calls.clone()
    }

    /// Fail the next invocation of `method`
    pub fn fail_on(&self, method: &str) {
        self.ledger.borrow_mut().fail_on = Some(method.to_string());
    }
}

impl Chain for MockChain {
    type Vault = MockVault;
    type Strategy = MockStrategy;
    type Token = MockToken;

    fn signer_address(&self) -> Address {
        signer()
    }

    async fn native_balance(&self, address: Address) -> Result<U256, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.record("getBalance")?;
        Ok(ledger.native.get(&address).copied().unwrap_or_default())
    }

    async fn block_number(&self) -> Result<u64, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.record("blockNumber")?;
        Ok(ledger.block)
    }

    async fn deploy_contract(&self, deploy_code: Bytes) -> Result<Address, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.transact("deploy")?;
        let address = Address::with_last_byte(0xa0 + ledger.deployments.len() as u8);
        ledger.deployments.push((address, deploy_code));
        Ok(address)
    }

    fn vault(&self, address: Address) -> MockVault {
        MockVault {
            address,
            ledger: self.ledger.clone(),
        }
    }

    fn strategy(&self, address: Address) -> MockStrategy {
        MockStrategy {
            address,
            ledger: self.ledger.clone(),
        }
    }

    fn token(&self, address: Address) -> MockToken {
        MockToken {
            address,
            ledger: self.ledger.clone(),
        }
    }
}

/// A vault living in the ledger
pub struct MockVault {
    address: Address,
    ledger: Rc<RefCell<Ledger>>,
}

impl MockVault {
    /// Record a read and return a value from the vault's state
    fn read<T>(&self, method: &str, f: impl FnOnce(&VaultState) -> T) -> Result<T, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.record(method)?;
        let state = ledger.vaults.entry(self.address).or_default();
        Ok(f(state))
    }

    /// Record a transaction and apply it to the vault's state
    fn write(&self, method: &str, f: impl FnOnce(&mut VaultState)) -> Result<(), ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.transact(method)?;
        f(ledger.vaults.entry(self.address).or_default());
        Ok(())
    }
}

impl Vault for MockVault {
    fn address(&self) -> Address {
        self.address
    }

    async fn set_strategy(&self, strategy: Address) -> Result<(), ScriptError> {
        self.write("setStrategy", |v| v.strategy = Some(strategy))
    }

    async fn set_reward_factors(
        &self,
        reward_per_block: U256,
        start_block: u64,
        end_block: u64,
    ) -> Result<(), ScriptError> {
        self.write("setWaultRewardFactors", |v| {
            v.reward_factors = Some((reward_per_block, start_block, end_block))
        })
    }

    async fn set_reward_mode(&self, enabled: bool) -> Result<(), ScriptError> {
        self.write("setWaultRewardMode", |v| v.reward_mode = Some(enabled))
    }

    async fn balance(&self) -> Result<U256, ScriptError> {
        self.read("balance", |v| v.balance)
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError> {
        self.read("balanceOf", |v| v.shares.get(&holder).copied().unwrap_or_default())
    }

    async fn total_supply(&self) -> Result<U256, ScriptError> {
        self.read("totalSupply", |v| v.total_supply)
    }

    async fn price_per_full_share(&self) -> Result<U256, ScriptError> {
        self.read("getPricePerFullShare", |v| v.price_per_share)
    }

    async fn claimable(&self, holder: Address) -> Result<U256, ScriptError> {
        self.read("claimable", |v| {
            v.claimable.get(&holder).copied().unwrap_or_default()
        })
    }

    async fn reward_per_block(&self) -> Result<U256, ScriptError> {
        self.read("waultRewardPerBlock", |v| v.reward_per_block)
    }

    async fn last_reward_block(&self) -> Result<U256, ScriptError> {
        self.read("lastRewardBlock", |v| v.last_reward_block)
    }

    async fn acc_reward_per_share(&self) -> Result<U256, ScriptError> {
        self.read("accWaultPerShare", |v| v.acc_reward_per_share)
    }
}

/// A strategy living in the ledger
pub struct MockStrategy {
    address: Address,
    ledger: Rc<RefCell<Ledger>>,
}

impl Strategy for MockStrategy {
    fn address(&self) -> Address {
        self.address
    }

    async fn balance_of_underlying(&self) -> Result<U256, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.record("strategy.balanceOf")?;
        Ok(ledger
            .strategies
            .get(&self.address)
            .copied()
            .unwrap_or_default())
    }
}

/// A token living in the ledger
pub struct MockToken {
    address: Address,
    ledger: Rc<RefCell<Ledger>>,
}

impl Token for MockToken {
    fn address(&self) -> Address {
        self.address
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.record("token.balanceOf")?;
        Ok(ledger
            .token_balances
            .get(&(self.address, holder))
            .copied()
            .unwrap_or_default())
    }
}

// ----------
// | Config |
// ----------

/// The test network's underlying token
pub fn token_address() -> Address {
    Address::repeat_byte(0x11)
}

/// The test network's reward token
pub fn reward_token_address() -> Address {
    Address::repeat_byte(0x22)
}

/// The test network's previously deployed vault
pub fn configured_vault() -> Address {
    Address::repeat_byte(0xaa)
}

/// The test network's previously deployed strategy
pub fn configured_strategy() -> Address {
    Address::repeat_byte(0xbb)
}

/// A test network configuration with every value set
pub fn test_config() -> NetworkConfig {
    let vars: HashMap<String, String> = [
        ("URL_TEST", "http://127.0.0.1:8545".to_string()),
        ("BTCB_TEST", format!("{:#x}", token_address())),
        ("WAULT_TEST", format!("{:#x}", reward_token_address())),
        ("VAULT_TEST", format!("{:#x}", configured_vault())),
        ("STRATEGY_TEST", format!("{:#x}", configured_strategy())),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    NetworkConfig::resolve(Network::Testnet, |k| vars.get(k).cloned())
}

/// A configuration with nothing set, as when the network flag and its
/// variables are absent
pub fn empty_config() -> NetworkConfig {
    NetworkConfig::resolve(Network::from_flag(None), |_| None)
}

/// A small artifact whose creation code is easy to recognise
pub fn artifact(name: &str, code: &str) -> ContractArtifact {
    ContractArtifact::from_json(name, &format!(r#"{{"bytecode": "{code}"}}"#))
        .expect("valid artifact")
}

/// The lines written to a report buffer
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .expect("utf8 report")
        .lines()
        .map(str::to_string)
        .collect()
}
