/// Price table loading from config.toml with built-in defaults
pub mod prices;

/// Remote store credentials from environment variables
pub mod remote;

pub use prices::PriceTable;
pub use remote::RemoteConfig;
