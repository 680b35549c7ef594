use alloy::primitives::U256;

use super::STATS;
use crate::client::Explorer;
use crate::convert::{dec_f64, dec_u256};
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::response::{PriceEntry, Text};
use crate::transport::Transport;
use crate::types::CoinPrice;

impl<T: Transport> Explorer<T> {
    async fn stat_amount(&self, action: &str) -> Result<U256> {
        let amount: Text = self.get_envelope(&QueryBuilder::new(STATS, action)).await?;
        Ok(dec_u256(&amount))
    }

    /// Total supply of a token, in its base unit.
    pub async fn token_supply(&self, contract: &str) -> Result<U256> {
        let mut qb = QueryBuilder::new(STATS, "tokensupply");
        qb.contract_address(contract);
        let supply: Text = self.get_envelope(&qb).await?;
        Ok(dec_u256(&supply))
    }

    /// Circulating CELO supply as reported by the exchange.
    pub async fn eth_supply_exchange(&self) -> Result<U256> {
        self.stat_amount("ethsupplyexchange").await
    }

    /// Total CELO supply in wei.
    pub async fn eth_supply(&self) -> Result<U256> {
        self.stat_amount("ethsupply").await
    }

    /// Total CELO supply in whole coins.
    pub async fn coin_supply(&self) -> Result<f64> {
        let supply: Text = self.get_envelope(&QueryBuilder::new(STATS, "coinsupply")).await?;
        Ok(dec_f64(&supply))
    }

    pub async fn coin_price(&self) -> Result<CoinPrice> {
        let entry: PriceEntry = self.get_envelope(&QueryBuilder::new(STATS, "ethprice")).await?;
        Ok(entry.into())
    }

    pub async fn total_transactions(&self) -> Result<U256> {
        self.stat_amount("totaltransactions").await
    }
}
