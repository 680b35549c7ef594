use std::fmt;
use std::str::FromStr;

use alloy::primitives::{address, Address};

pub const MAINNET_BASE_URL: &str = "https://explorer.celo.org/api";
pub const ALFAJORES_BASE_URL: &str = "https://alfajores-blockscout.celo-testnet.org/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Alfajores,
}

impl Network {
    pub fn base_url(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_BASE_URL,
            Network::Alfajores => ALFAJORES_BASE_URL,
        }
    }

    /// Contract address of a core stable token on this network.
    pub fn stable_token(self, coin: Stablecoin) -> Address {
        stable_token(self, coin)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Alfajores => f.write_str("alfajores"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "celo" => Ok(Network::Mainnet),
            "alfajores" | "testnet" => Ok(Network::Alfajores),
            other => Err(format!("unknown network `{other}`")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stablecoin {
    /// CELO, the ERC-20 view of the native coin.
    Celo,
    CeloUsd,
    CeloEur,
}

impl Stablecoin {
    pub fn symbol(self) -> &'static str {
        match self {
            Stablecoin::Celo => "CELO",
            Stablecoin::CeloUsd => "cUSD",
            Stablecoin::CeloEur => "cEUR",
        }
    }
}

pub const STABLE_TOKENS: [(Network, Stablecoin, Address); 6] = [
    (
        Network::Mainnet,
        Stablecoin::Celo,
        address!("0x471ece3750da237f93b8e339c536989b8978a438"),
    ),
    (
        Network::Mainnet,
        Stablecoin::CeloUsd,
        address!("0x765de816845861e75a25fca122bb6898b8b1282a"),
    ),
    (
        Network::Mainnet,
        Stablecoin::CeloEur,
        address!("0xd8763cba276a3738e6de85b4b3bf5fded6d6ca73"),
    ),
    (
        Network::Alfajores,
        Stablecoin::Celo,
        address!("0xF194afDf50B03e69Bd7D057c1Aa9e10c9954E4C9"),
    ),
    (
        Network::Alfajores,
        Stablecoin::CeloUsd,
        address!("0x874069Fa1Eb16D44d622F2e0Ca25eeA172369bC1"),
    ),
    (
        Network::Alfajores,
        Stablecoin::CeloEur,
        address!("0x10c892A6EC43a53E45D0B916B4b7D383B1b78C0F"),
    ),
];

pub fn stable_token(network: Network, coin: Stablecoin) -> Address {
    STABLE_TOKENS
        .iter()
        .find(|(n, c, _)| *n == network && *c == coin)
        .map(|(_, _, addr)| *addr)
        .unwrap_or(Address::ZERO)
}
