use super::CONTRACT;
use crate::client::Explorer;
use crate::error::Result;
use crate::params::{ContractVerification, ListContractsOptions};
use crate::query::QueryBuilder;
use crate::response::{ContractEntry, Text};
use crate::transport::Transport;
use crate::types::ContractSource;

impl<T: Transport> Explorer<T> {
    pub async fn list_contracts(&self, opts: &ListContractsOptions) -> Result<Vec<ContractSource>> {
        let mut qb = QueryBuilder::new(CONTRACT, "listcontracts");
        qb.page_range(opts.page)
            .filter_contract(opts.filter)
            .not_decompiled_with_version(opts.not_decompiled_with_version.as_deref());
        let entries: Vec<ContractEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(ContractSource::from).collect())
    }

    /// JSON ABI of a verified contract, verbatim.
    pub async fn abi(&self, address: &str) -> Result<String> {
        let mut qb = QueryBuilder::new(CONTRACT, "getabi");
        qb.address(address);
        let abi: Text = self.get_envelope(&qb).await?;
        Ok(abi.into())
    }

    /// Verified source of a contract. With `ignore_proxy` unset the explorer
    /// resolves proxies to their implementation.
    pub async fn source_code(
        &self,
        address: &str,
        ignore_proxy: Option<bool>,
    ) -> Result<Vec<ContractSource>> {
        let mut qb = QueryBuilder::new(CONTRACT, "getsourcecode");
        qb.address(address).ignore_proxy(ignore_proxy);
        let entries: Vec<ContractEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(ContractSource::from).collect())
    }

    /// Submits source for verification and returns the verified record.
    pub async fn verify(&self, contract: &ContractVerification) -> Result<ContractSource> {
        let mut qb = QueryBuilder::new(CONTRACT, "verify");
        qb.verify(contract);
        let entry: ContractEntry = self.get_envelope(&qb).await?;
        Ok(entry.into())
    }
}
