//! Response envelopes and the raw wire records they carry.
//!
//! Two envelope shapes exist upstream and each endpoint picks one:
//! [`decode_envelope`] for the `{status, message, result}` explorer shape and
//! [`decode_rpc`] for the endpoints that mimic a JSON-RPC call, where the HTTP
//! status code selects between `{result}` and `{error}`.

use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ExplorerError, Result};

/// Explorer field that is nominally a string but is sometimes sent as a
/// number, a boolean or `null`. Everything is kept as text; `null` becomes "".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text(pub String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Text(s),
            Value::Null => Text::default(),
            other => Text(other.to_string()),
        })
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.0
    }
}

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Text,
    #[serde(default)]
    pub message: Text,
    #[serde(default)]
    pub result: Value,
}

/// Status `"1"` yields the decoded `result`; any other status fails with the
/// envelope's message.
pub fn decode_envelope<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if &*envelope.status != "1" {
        tracing::warn!(status = %envelope.status, message = %envelope.message, "explorer reported failure");
        return Err(ExplorerError::Upstream(envelope.message.into()));
    }
    Ok(serde_json::from_value(envelope.result)?)
}

#[derive(Debug, Deserialize)]
pub struct RpcSuccess {
    #[serde(default)]
    pub result: Text,
}

#[derive(Debug, Deserialize)]
pub struct RpcFailure {
    #[serde(default)]
    pub error: Value,
}

impl RpcFailure {
    fn message(self) -> String {
        match self.error {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Object(map) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
            other => other.to_string(),
        }
    }
}

/// 2xx decodes `{result}`, anything else decodes `{error}` and fails with it.
pub fn decode_rpc(status: u16, body: &[u8]) -> Result<String> {
    if (200..300).contains(&status) {
        let ok: RpcSuccess = serde_json::from_slice(body)?;
        Ok(ok.result.into())
    } else {
        let failure: RpcFailure = serde_json::from_slice(body)?;
        let message = failure.message();
        tracing::warn!(status, message = %message, "explorer rpc call failed");
        Err(ExplorerError::Upstream(message))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BalanceEntry {
    pub account: Text,
    pub balance: Text,
    pub stale: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PendingTxEntry {
    pub contract_address: Text,
    pub cumulative_gas_used: Text,
    pub from: Text,
    pub gas: Text,
    pub gas_price: Text,
    pub gas_used: Text,
    pub hash: Text,
    pub input: Text,
    pub nonce: Text,
    pub to: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TxEntry {
    pub block_hash: Text,
    pub block_number: Text,
    pub confirmations: Text,
    pub contract_address: Text,
    pub cumulative_gas_used: Text,
    pub fee_currency: Text,
    pub from: Text,
    pub gas: Text,
    pub gas_price: Text,
    pub gas_used: Text,
    pub gateway_fee: Text,
    pub gateway_fee_recipient: Text,
    pub hash: Text,
    pub input: Text,
    pub is_error: Text,
    pub nonce: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub to: Text,
    pub transaction_index: Text,
    #[serde(rename = "txreceipt_status")]
    pub txreceipt_status: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InternalTxEntry {
    pub block_number: Text,
    pub contract_address: Text,
    pub err_code: Text,
    pub from: Text,
    pub gas: Text,
    pub gas_used: Text,
    pub index: Text,
    pub input: Text,
    pub is_error: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub to: Text,
    pub transaction_hash: Text,
    #[serde(rename = "type")]
    pub kind: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenTxEntry {
    pub block_hash: Text,
    pub block_number: Text,
    pub confirmations: Text,
    pub contract_address: Text,
    pub cumulative_gas_used: Text,
    pub from: Text,
    pub gas: Text,
    pub gas_price: Text,
    pub gas_used: Text,
    pub hash: Text,
    pub input: Text,
    pub log_index: Text,
    pub nonce: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub to: Text,
    pub token_decimal: Text,
    pub token_name: Text,
    pub token_symbol: Text,
    pub transaction_index: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenListEntry {
    pub balance: Text,
    pub contract_address: Text,
    pub decimals: Text,
    pub name: Text,
    pub symbol: Text,
    #[serde(rename = "type")]
    pub kind: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinedBlockEntry {
    pub block_number: Text,
    pub block_reward: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountEntry {
    pub address: Text,
    pub balance: Text,
}

/// Log record of `getLogs`. Numeric fields are hex quantities here, except
/// `gatewayFee`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEntry {
    pub address: Text,
    pub block_number: Text,
    pub data: Text,
    pub fee_currency: Text,
    pub gas_price: Text,
    pub gas_used: Text,
    pub gateway_fee: Text,
    pub gateway_fee_recipient: Text,
    pub log_index: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub topics: Vec<Option<String>>,
    pub transaction_hash: Text,
    pub transaction_index: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenEntry {
    pub cataloged: Option<bool>,
    pub contract_address: Text,
    pub decimals: Text,
    pub name: Text,
    pub symbol: Text,
    pub total_supply: Text,
    #[serde(rename = "type")]
    pub kind: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenHolderEntry {
    pub address: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PriceEntry {
    pub ethbtc: Text,
    pub ethbtc_timestamp: Text,
    pub ethusd: Text,
    pub ethusd_timestamp: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockRewardEntry {
    pub block_miner: Text,
    pub block_number: Text,
    pub block_reward: Text,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub uncle_inclusion_reward: Value,
    pub uncles: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContractEntry {
    #[serde(rename = "Address")]
    pub address: Text,
    #[serde(rename = "ABI")]
    pub abi: Text,
    #[serde(rename = "CompilerVersion")]
    pub compiler_version: Text,
    #[serde(rename = "ContractName")]
    pub contract_name: Text,
    #[serde(rename = "EVMVersion")]
    pub evm_version: Text,
    #[serde(rename = "OptimizationUsed")]
    pub optimization_used: Text,
    #[serde(rename = "OptimizationRuns")]
    pub optimization_runs: Text,
    #[serde(rename = "SourceCode")]
    pub source_code: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TxInfoLogEntry {
    pub address: Text,
    pub data: Text,
    pub index: Text,
    pub topics: Vec<Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TxInfoEntry {
    pub revert_reason: Text,
    pub block_number: Text,
    pub confirmations: Text,
    pub fee_currency: Text,
    pub from: Text,
    pub gas_limit: Text,
    pub gas_price: Text,
    pub gas_used: Text,
    pub gateway_fee: Text,
    pub gateway_fee_recipient: Text,
    pub hash: Text,
    pub input: Text,
    pub logs: Vec<TxInfoLogEntry>,
    pub success: Option<bool>,
    #[serde(rename = "timeStamp")]
    pub timestamp: Text,
    pub to: Text,
    pub value: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReceiptStatusEntry {
    pub status: Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusEntry {
    pub err_description: Text,
    pub is_error: Text,
}
