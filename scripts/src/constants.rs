//! Constants used in the vault scripts

/// The number of decimals used by every token amount handled by the scripts
pub const TOKEN_DECIMALS: u8 = 18;

/// The fixed-point base, `10^18`, as a raw integer
pub const FIXED_POINT_BASE: u128 = 1_000_000_000_000_000_000;

/// The value of the network flag selecting the production variable set
pub const MAINNET_FLAG: &str = "mainnet";

/// The suffix of production environment variables
pub const MAINNET_SUFFIX: &str = "MAIN";

/// The suffix of test network environment variables
pub const TESTNET_SUFFIX: &str = "TEST";

/// The prefix of the node endpoint URL variables
pub const URL_VAR_PREFIX: &str = "URL";

/// The prefix of the vault's underlying token address variables
pub const TOKEN_VAR_PREFIX: &str = "BTCB";

/// The prefix of the reward token address variables
pub const REWARD_TOKEN_VAR_PREFIX: &str = "WAULT";

/// The prefix of the vault address variables
pub const VAULT_VAR_PREFIX: &str = "VAULT";

/// The prefix of the strategy address variables
pub const STRATEGY_VAR_PREFIX: &str = "STRATEGY";

/// The default reward emitted per block, in whole tokens
pub const DEFAULT_REWARD_PER_BLOCK: &str = "1000";

/// The default length of the reward window, in blocks
///
/// 30 days at 3 second blocks
pub const DEFAULT_REWARD_BLOCKS: u64 = 864_000;

/// The default path of the vault's compiled artifact
pub const DEFAULT_VAULT_ARTIFACT: &str =
    "artifacts/contracts/WaultBtcbVault.sol/WaultBtcbVault.json";

/// The default path of the strategy's compiled artifact
pub const DEFAULT_STRATEGY_ARTIFACT: &str =
    "artifacts/contracts/WaultBtcbVenusStrategy.sol/WaultBtcbVenusStrategy.json";

/// The key of the creation bytecode in a compiled artifact
pub const BYTECODE_KEY: &str = "bytecode";
