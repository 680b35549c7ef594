//! Typed result records.
//!
//! Every record is assembled once from its wire entry, each field converted
//! independently with the lenient helpers in [`crate::convert`]. Addresses and
//! hashes are stored without the `0x` prefix.

use alloy::primitives::{Bytes, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::convert::{
    bare_hex, dec_f64, dec_u256, dec_u64, hex_bytes, hex_u256, hex_u64, receipt_succeeded,
    strip_topics, succeeded_unless_error, truthy, unix_time, unix_time_hex,
};
use crate::response::{
    AccountEntry, BalanceEntry, BlockRewardEntry, ContractEntry, InternalTxEntry, LogEntry,
    MinedBlockEntry, PendingTxEntry, PriceEntry, StatusEntry, TokenEntry, TokenHolderEntry,
    TokenListEntry, TokenTxEntry, TxEntry, TxInfoEntry, TxInfoLogEntry,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FetchedBalance {
    pub address: String,
    pub balance: U256,
    /// The explorer is refreshing this balance from the node; a later
    /// request will see the updated value.
    pub stale: bool,
}

impl From<BalanceEntry> for FetchedBalance {
    fn from(e: BalanceEntry) -> Self {
        Self {
            address: bare_hex(&e.account),
            balance: dec_u256(&e.balance),
            stale: e.stale.unwrap_or(false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PendingTransaction {
    pub contract_address: String,
    pub cumulative_gas_used: u64,
    pub from: String,
    pub gas: u64,
    pub gas_price: U256,
    pub gas_used: u64,
    pub hash: String,
    pub input: Bytes,
    pub nonce: u64,
    pub to: String,
    pub value: U256,
}

impl From<PendingTxEntry> for PendingTransaction {
    fn from(e: PendingTxEntry) -> Self {
        Self {
            contract_address: bare_hex(&e.contract_address),
            cumulative_gas_used: dec_u64(&e.cumulative_gas_used),
            from: bare_hex(&e.from),
            gas: dec_u64(&e.gas),
            gas_price: dec_u256(&e.gas_price),
            gas_used: dec_u64(&e.gas_used),
            hash: bare_hex(&e.hash),
            input: hex_bytes(&e.input),
            nonce: dec_u64(&e.nonce),
            to: bare_hex(&e.to),
            value: dec_u256(&e.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transaction {
    pub block_hash: String,
    pub block_number: U256,
    pub confirmations: U256,
    pub contract_address: String,
    pub cumulative_gas_used: u64,
    /// Token the fee was paid in; empty when paid in CELO.
    pub fee_currency: String,
    pub from: String,
    pub gas: u64,
    pub gas_price: U256,
    pub gas_used: u64,
    pub gateway_fee: U256,
    pub gateway_fee_recipient: String,
    pub hash: String,
    pub input: Bytes,
    /// From `isError`: true when the execution did not fail.
    pub succeeded: bool,
    pub nonce: u64,
    pub timestamp: DateTime<Utc>,
    pub to: String,
    pub transaction_index: u64,
    /// From `txreceipt_status`: true when the receipt reports success.
    pub receipt_succeeded: bool,
    pub value: U256,
}

impl From<TxEntry> for Transaction {
    fn from(e: TxEntry) -> Self {
        Self {
            block_hash: bare_hex(&e.block_hash),
            block_number: dec_u256(&e.block_number),
            confirmations: dec_u256(&e.confirmations),
            contract_address: bare_hex(&e.contract_address),
            cumulative_gas_used: dec_u64(&e.cumulative_gas_used),
            fee_currency: bare_hex(&e.fee_currency),
            from: bare_hex(&e.from),
            gas: dec_u64(&e.gas),
            gas_price: dec_u256(&e.gas_price),
            gas_used: dec_u64(&e.gas_used),
            gateway_fee: dec_u256(&e.gateway_fee),
            gateway_fee_recipient: bare_hex(&e.gateway_fee_recipient),
            hash: bare_hex(&e.hash),
            input: hex_bytes(&e.input),
            succeeded: succeeded_unless_error(&e.is_error),
            nonce: dec_u64(&e.nonce),
            timestamp: unix_time(&e.timestamp),
            to: bare_hex(&e.to),
            transaction_index: dec_u64(&e.transaction_index),
            receipt_succeeded: receipt_succeeded(&e.txreceipt_status),
            value: dec_u256(&e.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InternalTransaction {
    pub block_number: U256,
    pub contract_address: String,
    pub err_code: String,
    pub from: String,
    pub gas: u64,
    pub gas_used: u64,
    pub index: u64,
    pub input: Bytes,
    pub succeeded: bool,
    pub timestamp: DateTime<Utc>,
    pub to: String,
    pub transaction_hash: String,
    /// Call type, e.g. `call`, `create`.
    pub kind: String,
    pub value: U256,
}

impl From<InternalTxEntry> for InternalTransaction {
    fn from(e: InternalTxEntry) -> Self {
        Self {
            block_number: dec_u256(&e.block_number),
            contract_address: bare_hex(&e.contract_address),
            err_code: e.err_code.into(),
            from: bare_hex(&e.from),
            gas: dec_u64(&e.gas),
            gas_used: dec_u64(&e.gas_used),
            index: dec_u64(&e.index),
            input: hex_bytes(&e.input),
            succeeded: succeeded_unless_error(&e.is_error),
            timestamp: unix_time(&e.timestamp),
            to: bare_hex(&e.to),
            transaction_hash: bare_hex(&e.transaction_hash),
            kind: e.kind.into(),
            value: dec_u256(&e.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenTransfer {
    pub value: U256,
    pub block_hash: String,
    pub block_number: U256,
    pub confirmations: U256,
    pub contract_address: String,
    pub cumulative_gas_used: u64,
    pub from: String,
    pub to: String,
    pub gas: u64,
    pub gas_price: U256,
    pub gas_used: u64,
    pub hash: String,
    pub input: Bytes,
    pub log_index: u64,
    pub nonce: u64,
    pub timestamp: DateTime<Utc>,
    pub token_decimal: u64,
    pub token_name: String,
    pub token_symbol: String,
    pub transaction_index: u64,
}

impl From<TokenTxEntry> for TokenTransfer {
    fn from(e: TokenTxEntry) -> Self {
        Self {
            value: dec_u256(&e.value),
            block_hash: bare_hex(&e.block_hash),
            block_number: dec_u256(&e.block_number),
            confirmations: dec_u256(&e.confirmations),
            contract_address: bare_hex(&e.contract_address),
            cumulative_gas_used: dec_u64(&e.cumulative_gas_used),
            from: bare_hex(&e.from),
            to: bare_hex(&e.to),
            gas: dec_u64(&e.gas),
            gas_price: dec_u256(&e.gas_price),
            gas_used: dec_u64(&e.gas_used),
            hash: bare_hex(&e.hash),
            input: hex_bytes(&e.input),
            log_index: dec_u64(&e.log_index),
            nonce: dec_u64(&e.nonce),
            timestamp: unix_time(&e.timestamp),
            token_decimal: dec_u64(&e.token_decimal),
            token_name: e.token_name.into(),
            token_symbol: e.token_symbol.into(),
            transaction_index: dec_u64(&e.transaction_index),
        }
    }
}

/// A token balance held by an address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenHolding {
    pub balance: U256,
    pub contract_address: String,
    pub decimals: u64,
    pub name: String,
    pub symbol: String,
    /// Token standard, e.g. `ERC-20`.
    pub kind: String,
}

impl From<TokenListEntry> for TokenHolding {
    fn from(e: TokenListEntry) -> Self {
        Self {
            balance: dec_u256(&e.balance),
            contract_address: bare_hex(&e.contract_address),
            decimals: dec_u64(&e.decimals),
            name: e.name.into(),
            symbol: e.symbol.into(),
            kind: e.kind.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MinedBlock {
    pub block_number: U256,
    pub block_reward: U256,
    pub timestamp: DateTime<Utc>,
}

impl From<MinedBlockEntry> for MinedBlock {
    fn from(e: MinedBlockEntry) -> Self {
        Self {
            block_number: dec_u256(&e.block_number),
            block_reward: dec_u256(&e.block_reward),
            timestamp: unix_time(&e.timestamp),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountBalance {
    pub address: String,
    pub balance: U256,
}

impl From<AccountEntry> for AccountBalance {
    fn from(e: AccountEntry) -> Self {
        Self {
            address: bare_hex(&e.address),
            balance: dec_u256(&e.balance),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventLog {
    pub address: String,
    pub block_number: U256,
    pub data: Bytes,
    pub fee_currency: String,
    pub gas_price: U256,
    pub gas_used: u64,
    pub gateway_fee: U256,
    pub gateway_fee_recipient: String,
    pub log_index: u64,
    pub timestamp: DateTime<Utc>,
    pub topics: Vec<String>,
    pub transaction_hash: String,
    pub transaction_index: u64,
}

impl From<LogEntry> for EventLog {
    fn from(e: LogEntry) -> Self {
        Self {
            address: bare_hex(&e.address),
            block_number: hex_u256(&e.block_number),
            data: hex_bytes(&e.data),
            fee_currency: bare_hex(&e.fee_currency),
            gas_price: hex_u256(&e.gas_price),
            gas_used: hex_u64(&e.gas_used),
            gateway_fee: dec_u256(&e.gateway_fee),
            gateway_fee_recipient: bare_hex(&e.gateway_fee_recipient),
            log_index: hex_u64(&e.log_index),
            timestamp: unix_time_hex(&e.timestamp),
            topics: strip_topics(e.topics.iter().flatten()),
            transaction_hash: bare_hex(&e.transaction_hash),
            transaction_index: hex_u64(&e.transaction_index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenInfo {
    pub cataloged: bool,
    pub contract_address: String,
    pub decimals: u64,
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub kind: String,
}

impl From<TokenEntry> for TokenInfo {
    fn from(e: TokenEntry) -> Self {
        Self {
            cataloged: e.cataloged.unwrap_or(false),
            contract_address: bare_hex(&e.contract_address),
            decimals: dec_u64(&e.decimals),
            name: e.name.into(),
            symbol: e.symbol.into(),
            total_supply: dec_u256(&e.total_supply),
            kind: e.kind.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenHolder {
    pub address: String,
    pub value: U256,
}

impl From<TokenHolderEntry> for TokenHolder {
    fn from(e: TokenHolderEntry) -> Self {
        Self {
            address: bare_hex(&e.address),
            value: dec_u256(&e.value),
        }
    }
}

/// Latest CELO price as quoted by the explorer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoinPrice {
    pub btc: f64,
    pub btc_timestamp: DateTime<Utc>,
    pub usd: f64,
    pub usd_timestamp: DateTime<Utc>,
}

impl From<PriceEntry> for CoinPrice {
    fn from(e: PriceEntry) -> Self {
        Self {
            btc: dec_f64(&e.ethbtc),
            btc_timestamp: unix_time(&e.ethbtc_timestamp),
            usd: dec_f64(&e.ethusd),
            usd_timestamp: unix_time(&e.ethusd_timestamp),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockReward {
    pub block_miner: String,
    pub block_number: U256,
    pub block_reward: U256,
    pub timestamp: DateTime<Utc>,
    pub uncle_inclusion_reward: Option<U256>,
    pub uncles: Vec<Value>,
}

impl From<BlockRewardEntry> for BlockReward {
    fn from(e: BlockRewardEntry) -> Self {
        let uncle_inclusion_reward = match e.uncle_inclusion_reward {
            Value::String(s) => Some(dec_u256(&s)),
            Value::Number(n) => Some(dec_u256(&n.to_string())),
            _ => None,
        };
        let uncles = match e.uncles {
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        Self {
            block_miner: bare_hex(&e.block_miner),
            block_number: dec_u256(&e.block_number),
            block_reward: dec_u256(&e.block_reward),
            timestamp: unix_time(&e.timestamp),
            uncle_inclusion_reward,
            uncles,
        }
    }
}

/// Verified contract metadata, as returned by the contract listing, source
/// lookup and verification endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContractSource {
    pub address: String,
    /// JSON ABI, verbatim.
    pub abi: String,
    pub compiler_version: String,
    pub contract_name: String,
    pub evm_version: String,
    pub optimization_used: bool,
    pub optimization_runs: u64,
    pub source_code: String,
}

impl From<ContractEntry> for ContractSource {
    fn from(e: ContractEntry) -> Self {
        Self {
            address: bare_hex(&e.address),
            abi: e.abi.into(),
            compiler_version: e.compiler_version.into(),
            contract_name: e.contract_name.into(),
            evm_version: e.evm_version.into(),
            optimization_used: truthy(&e.optimization_used),
            optimization_runs: dec_u64(&e.optimization_runs),
            source_code: e.source_code.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TxLog {
    pub address: String,
    pub data: Bytes,
    pub index: u64,
    pub topics: Vec<String>,
}

impl From<TxInfoLogEntry> for TxLog {
    fn from(e: TxInfoLogEntry) -> Self {
        Self {
            address: bare_hex(&e.address),
            data: hex_bytes(&e.data),
            index: dec_u64(&e.index),
            topics: strip_topics(e.topics.iter().flatten()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionInfo {
    pub block_number: U256,
    pub confirmations: U256,
    pub fee_currency: String,
    pub from: String,
    pub gas_limit: U256,
    pub gas_price: U256,
    pub gas_used: u64,
    pub gateway_fee: U256,
    pub gateway_fee_recipient: String,
    pub hash: String,
    pub input: Bytes,
    pub logs: Vec<TxLog>,
    pub revert_reason: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub to: String,
    pub value: U256,
}

impl From<TxInfoEntry> for TransactionInfo {
    fn from(e: TxInfoEntry) -> Self {
        Self {
            block_number: dec_u256(&e.block_number),
            confirmations: dec_u256(&e.confirmations),
            fee_currency: bare_hex(&e.fee_currency),
            from: bare_hex(&e.from),
            gas_limit: dec_u256(&e.gas_limit),
            gas_price: dec_u256(&e.gas_price),
            gas_used: dec_u64(&e.gas_used),
            gateway_fee: dec_u256(&e.gateway_fee),
            gateway_fee_recipient: bare_hex(&e.gateway_fee_recipient),
            hash: bare_hex(&e.hash),
            input: hex_bytes(&e.input),
            logs: e.logs.into_iter().map(TxLog::from).collect(),
            revert_reason: e.revert_reason.into(),
            success: e.success.unwrap_or(false),
            timestamp: unix_time(&e.timestamp),
            to: bare_hex(&e.to),
            value: dec_u256(&e.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TxStatus {
    /// From `isError`: true when the transaction did not fail.
    pub succeeded: bool,
    pub error_description: String,
}

impl From<StatusEntry> for TxStatus {
    fn from(e: StatusEntry) -> Self {
        Self {
            succeeded: succeeded_unless_error(&e.is_error),
            error_description: e.err_description.into(),
        }
    }
}
