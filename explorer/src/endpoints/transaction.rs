use super::TRANSACTION;
use crate::client::Explorer;
use crate::convert::receipt_succeeded;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::response::{ReceiptStatusEntry, StatusEntry, TxInfoEntry};
use crate::transport::Transport;
use crate::types::{TransactionInfo, TxStatus};

impl<T: Transport> Explorer<T> {
    /// Full transaction details with its logs. `index` pages through the logs
    /// of transactions that emit many.
    pub async fn tx_info(&self, hash: &str, index: Option<u64>) -> Result<TransactionInfo> {
        let mut qb = QueryBuilder::new(TRANSACTION, "gettxinfo");
        qb.tx_hash(hash).index(index);
        let entry: TxInfoEntry = self.get_envelope(&qb).await?;
        Ok(entry.into())
    }

    /// True when the transaction receipt reports success.
    pub async fn tx_receipt_status(&self, hash: &str) -> Result<bool> {
        let mut qb = QueryBuilder::new(TRANSACTION, "gettxreceiptstatus");
        qb.tx_hash(hash);
        let entry: ReceiptStatusEntry = self.get_envelope(&qb).await?;
        Ok(receipt_succeeded(&entry.status))
    }

    pub async fn tx_status(&self, hash: &str) -> Result<TxStatus> {
        let mut qb = QueryBuilder::new(TRANSACTION, "getstatus");
        qb.tx_hash(hash);
        let entry: StatusEntry = self.get_envelope(&qb).await?;
        Ok(entry.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ok_envelope;
    use alloy::primitives::U256;

    #[tokio::test]
    async fn tx_info_decodes_gas_and_payloads() {
        let client = ok_envelope(
            r#"{
                "blockNumber":"100","confirmations":"5","from":"0xaa","to":"0xbb",
                "gasLimit":"50000","gasPrice":"1000000000","gasUsed":"21000",
                "hash":"0xfeed","input":"0xa9059cbb","success":true,"timeStamp":"1600000000",
                "revertReason":"","value":"1",
                "logs":[{"address":"0xcc","data":"0x01","index":"0","topics":["0xaa",null]}]
            }"#,
        );
        let info = client.tx_info("feed", Some(1)).await.unwrap();
        assert_eq!(info.gas_price, U256::from(1_000_000_000u64));
        assert_eq!(info.gas_used, 21_000);
        assert_eq!(info.gas_limit, U256::from(50_000));
        assert_eq!(info.input.to_vec(), vec![0xa9, 0x05, 0x9c, 0xbb]);
        assert!(info.success);
        assert_eq!(info.timestamp.timestamp(), 1_600_000_000);
        assert_eq!(info.logs.len(), 1);
        assert_eq!(info.logs[0].data.to_vec(), vec![0x01]);
        assert_eq!(info.logs[0].topics, vec!["aa"]);

        let t = client.transport();
        assert_eq!(t.param("txhash").as_deref(), Some("0xfeed"));
        assert_eq!(t.param("index").as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn receipt_status_polarity() {
        let client = ok_envelope(r#"{"status":"1"}"#);
        assert!(client.tx_receipt_status("ab").await.unwrap());

        let client = ok_envelope(r#"{"status":"0"}"#);
        assert!(!client.tx_receipt_status("ab").await.unwrap());

        let client = ok_envelope(r#"{"status":""}"#);
        assert!(!client.tx_receipt_status("ab").await.unwrap());
    }

    #[tokio::test]
    async fn status_polarity_is_inverse_of_receipt() {
        let client = ok_envelope(r#"{"isError":"0","errDescription":""}"#);
        let status = client.tx_status("ab").await.unwrap();
        assert!(status.succeeded);
        assert_eq!(
            client.transport().param("action").as_deref(),
            Some("getstatus")
        );

        let client = ok_envelope(r#"{"isError":"1","errDescription":"Reverted"}"#);
        let status = client.tx_status("ab").await.unwrap();
        assert!(!status.succeeded);
        assert_eq!(status.error_description, "Reverted");
    }
}
