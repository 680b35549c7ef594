use super::BLOCK;
use crate::client::Explorer;
use crate::convert::hex_u64;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::response::BlockRewardEntry;
use crate::transport::Transport;
use crate::types::BlockReward;

impl<T: Transport> Explorer<T> {
    pub async fn block_reward(&self, block: u64) -> Result<BlockReward> {
        let mut qb = QueryBuilder::new(BLOCK, "getblockreward");
        qb.block_no(block);
        let entry: BlockRewardEntry = self.get_envelope(&qb).await?;
        Ok(entry.into())
    }

    /// Latest block number, through the JSON-RPC style endpoint.
    pub async fn eth_block_number(&self) -> Result<u64> {
        let number = self.get_rpc(&QueryBuilder::new(BLOCK, "eth_block_number")).await?;
        Ok(hex_u64(&number))
    }
}
