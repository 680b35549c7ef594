use super::LOGS;
use crate::client::Explorer;
use crate::error::Result;
use crate::params::{LogBlockRange, TopicFilter};
use crate::query::QueryBuilder;
use crate::response::LogEntry;
use crate::transport::Transport;
use crate::types::EventLog;

impl<T: Transport> Explorer<T> {
    /// Event logs emitted by `address` in a block window, matched against a
    /// topic filter. All numeric fields of this endpoint arrive hex-encoded.
    pub async fn logs(
        &self,
        blocks: LogBlockRange,
        address: &str,
        topics: &TopicFilter,
    ) -> Result<Vec<EventLog>> {
        let mut qb = QueryBuilder::new(LOGS, "getLogs");
        qb.log_block_range(blocks).address(address).topics(topics);
        let entries: Vec<LogEntry> = self.get_envelope(&qb).await?;
        Ok(entries.into_iter().map(EventLog::from).collect())
    }
}
