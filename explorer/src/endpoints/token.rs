use super::TOKEN;
use crate::client::Explorer;
use crate::error::Result;
use crate::params::PageRange;
use crate::query::QueryBuilder;
use crate::response::{TokenEntry, TokenHolderEntry};
use crate::transport::Transport;
use crate::types::{TokenHolder, TokenInfo};

impl<T: Transport> Explorer<T> {
    pub async fn token(&self, contract: &str) -> Result<TokenInfo> {
        let mut qb = QueryBuilder::new(TOKEN, "getToken");
        qb.contract_address(contract);
        let entry: TokenEntry = self.get_envelope(&qb).await?;
        Ok(entry.into())
    }

    pub async fn token_holders(
        &self,
        contract: &str,
        page: Option<PageRange>,
    ) -> Result<Vec<TokenHolder>> {
        let mut qb = QueryBuilder::new(TOKEN, "getTokenHolders");
        qb.contract_address(contract).page_range(page);
        let entries: Vec<TokenHolderEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(TokenHolder::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ok_envelope;
    use alloy::primitives::U256;

    #[tokio::test]
    async fn token_metadata() {
        let client = ok_envelope(
            r#"{"cataloged":true,"contractAddress":"0x765de816845861e75a25fca122bb6898b8b1282a","decimals":"18","name":"Celo Dollar","symbol":"cUSD","totalSupply":"1000000000000000000000","type":"ERC-20"}"#,
        );
        let token = client.token("765de816845861e75a25fca122bb6898b8b1282a").await.unwrap();
        assert!(token.cataloged);
        assert_eq!(token.contract_address, "765de816845861e75a25fca122bb6898b8b1282a");
        assert_eq!(token.decimals, 18);
        assert_eq!(token.symbol, "cUSD");
        assert_eq!(token.total_supply, U256::from(1_000_000_000_000_000_000_000u128));
        assert_eq!(token.kind, "ERC-20");
        assert_eq!(
            client.transport().param("action").as_deref(),
            Some("getToken")
        );
    }

    #[tokio::test]
    async fn holders_page() {
        let client = ok_envelope(r#"[{"address":"0xaa","value":"7"},{"address":"0xbb","value":"3"}]"#);
        let holders = client
            .token_holders("cc", Some(PageRange::new(1, 2)))
            .await
            .unwrap();
        assert_eq!(holders.len(), 2);
        assert_eq!(holders[0].address, "aa");
        assert_eq!(holders[1].value, U256::from(3));
        let t = client.transport();
        assert_eq!(t.param("contractaddress").as_deref(), Some("0xcc"));
        assert_eq!(t.param("offset").as_deref(), Some("2"));
    }
}
