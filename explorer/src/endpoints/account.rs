use alloy::primitives::U256;

use super::ACCOUNT;
use crate::client::Explorer;
use crate::convert::{dec_u256, hex_u256};
use crate::error::Result;
use crate::params::{InternalTxOptions, PageRange, TokenTxOptions, TxListOptions};
use crate::query::QueryBuilder;
use crate::response::{
    AccountEntry, BalanceEntry, InternalTxEntry, MinedBlockEntry, PendingTxEntry, Text,
    TokenListEntry, TokenTxEntry, TxEntry,
};
use crate::transport::Transport;
use crate::types::{
    AccountBalance, FetchedBalance, InternalTransaction, MinedBlock, PendingTransaction,
    TokenHolding, TokenTransfer, Transaction,
};

impl<T: Transport> Explorer<T> {
    /// Balance in wei through the JSON-RPC style endpoint, optionally at a
    /// historical block.
    pub async fn eth_get_balance(&self, address: &str, block: Option<u64>) -> Result<U256> {
        let mut qb = QueryBuilder::new(ACCOUNT, "eth_get_balance");
        qb.address(address).block(block);
        Ok(hex_u256(&self.get_rpc(&qb).await?))
    }

    /// Balance in wei.
    pub async fn balance(&self, address: &str) -> Result<U256> {
        let mut qb = QueryBuilder::new(ACCOUNT, "balance");
        qb.address(address);
        let balance: Text = self.get_envelope(&qb).await?;
        Ok(dec_u256(&balance))
    }

    pub async fn balance_multi<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<FetchedBalance>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "balancemulti");
        qb.address_multi(addresses);
        let entries: Vec<BalanceEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(FetchedBalance::from).collect())
    }

    pub async fn pending_tx_list(
        &self,
        address: &str,
        page: Option<PageRange>,
    ) -> Result<Vec<PendingTransaction>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "pendingtxlist");
        qb.address(address).page_range(page);
        let entries: Vec<PendingTxEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(PendingTransaction::from).collect())
    }

    pub async fn tx_list(&self, address: &str, opts: &TxListOptions) -> Result<Vec<Transaction>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "txlist");
        qb.address(address)
            .sort(opts.sort)
            .block_range(opts.block)
            .page_range(opts.page)
            .filter_by(opts.filter_by)
            .time_range(opts.time);
        let entries: Vec<TxEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(Transaction::from).collect())
    }

    /// Internal transactions created by one transaction, optionally
    /// narrowed to an address.
    pub async fn tx_list_internal(
        &self,
        tx_hash: &str,
        opts: &InternalTxOptions,
    ) -> Result<Vec<InternalTransaction>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "txlistinternal");
        qb.tx_hash(tx_hash)
            .sort(opts.sort)
            .block_range(opts.block)
            .page_range(opts.page);
        if let Some(address) = &opts.address {
            qb.address(address);
        }
        let entries: Vec<InternalTxEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(InternalTransaction::from).collect())
    }

    /// Token transfer events involving an address.
    pub async fn token_tx(&self, address: &str, opts: &TokenTxOptions) -> Result<Vec<TokenTransfer>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "tokentx");
        qb.address(address)
            .sort(opts.sort)
            .block_range(opts.block)
            .page_range(opts.page);
        if let Some(contract) = &opts.contract_address {
            qb.contract_address(contract);
        }
        let entries: Vec<TokenTxEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(TokenTransfer::from).collect())
    }

    /// Balance of one token held by an address, in the token's base unit.
    pub async fn token_balance(&self, contract: &str, address: &str) -> Result<U256> {
        let mut qb = QueryBuilder::new(ACCOUNT, "tokenbalance");
        qb.contract_address(contract).address(address);
        let balance: Text = self.get_envelope(&qb).await?;
        Ok(dec_u256(&balance))
    }

    pub async fn token_list(&self, address: &str) -> Result<Vec<TokenHolding>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "tokenlist");
        qb.address(address);
        let entries: Vec<TokenListEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(TokenHolding::from).collect())
    }

    pub async fn mined_blocks(&self, address: &str, page: Option<PageRange>) -> Result<Vec<MinedBlock>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "getminedblocks");
        qb.address(address).page_range(page);
        let entries: Vec<MinedBlockEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(MinedBlock::from).collect())
    }

    /// Accounts with their balances, richest first.
    pub async fn list_accounts(&self, page: Option<PageRange>) -> Result<Vec<AccountBalance>> {
        let mut qb = QueryBuilder::new(ACCOUNT, "listaccounts");
        qb.page_range(page);
        let entries: Vec<AccountEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(AccountBalance::from).collect())
    }
}
