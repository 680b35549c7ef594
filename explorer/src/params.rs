//! Typed request parameters. Every optional modifier is an `Option`; `None`
//! leaves the parameter out of the query string entirely.

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Restricts an address transaction list to one side of the transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterDirection {
    To,
    From,
}

impl FilterDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterDirection::To => "to",
            FilterDirection::From => "from",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractFilter {
    Verified,
    Decompiled,
    Unverified,
    NotDecompiled,
    Empty,
}

impl ContractFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractFilter::Verified => "verified",
            ContractFilter::Decompiled => "decompiled",
            ContractFilter::Unverified => "unverified",
            ContractFilter::NotDecompiled => "not_decompiled",
            ContractFilter::Empty => "empty",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicOperator {
    #[default]
    And,
    Or,
}

impl TopicOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            TopicOperator::And => "and",
            TopicOperator::Or => "or",
        }
    }
}

/// Either bound may be left open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockRange {
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
}

impl BlockRange {
    pub fn new(start_block: u64, end_block: u64) -> Self {
        Self {
            start_block: Some(start_block),
            end_block: Some(end_block),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    pub page: u32,
    /// Page size.
    pub offset: u32,
}

impl PageRange {
    pub fn new(page: u32, offset: u32) -> Self {
        Self { page, offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockTag {
    Number(u64),
    Latest,
}

/// Block window of an event-log query. Both ends are mandatory upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogBlockRange {
    pub from_block: u64,
    pub to_block: BlockTag,
}

impl LogBlockRange {
    pub fn new(from_block: u64, to_block: u64) -> Self {
        Self {
            from_block,
            to_block: BlockTag::Number(to_block),
        }
    }

    pub fn to_latest(from_block: u64) -> Self {
        Self {
            from_block,
            to_block: BlockTag::Latest,
        }
    }
}

/// Topic pairs `(i, j)` that can carry a combinator, in wire order.
pub const TOPIC_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Event-log topic filter: `topic0` plus up to three more topics, and one
/// combinator per topic pair. A combinator is only sent when both topics of
/// its pair are set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicFilter {
    pub topic0: String,
    pub topic1: Option<String>,
    pub topic2: Option<String>,
    pub topic3: Option<String>,
    operators: [TopicOperator; 6],
}

impl TopicFilter {
    pub fn new(topic0: impl Into<String>) -> Self {
        Self {
            topic0: topic0.into(),
            topic1: None,
            topic2: None,
            topic3: None,
            operators: [TopicOperator::default(); 6],
        }
    }

    pub fn with_topic1(mut self, topic: impl Into<String>) -> Self {
        self.topic1 = Some(topic.into());
        self
    }

    pub fn with_topic2(mut self, topic: impl Into<String>) -> Self {
        self.topic2 = Some(topic.into());
        self
    }

    pub fn with_topic3(mut self, topic: impl Into<String>) -> Self {
        self.topic3 = Some(topic.into());
        self
    }

    /// Sets the combinator between topic `i` and topic `j`. Unknown pairs are ignored.
    pub fn with_operator(mut self, i: usize, j: usize, op: TopicOperator) -> Self {
        if let Some(slot) = pair_slot(i, j) {
            self.operators[slot] = op;
        }
        self
    }

    pub fn operator(&self, i: usize, j: usize) -> Option<TopicOperator> {
        pair_slot(i, j).map(|slot| self.operators[slot])
    }

    pub fn topic(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(self.topic0.as_str()),
            1 => self.topic1.as_deref(),
            2 => self.topic2.as_deref(),
            3 => self.topic3.as_deref(),
            _ => None,
        }
    }

    /// Pairs whose topics are both populated, with their combinator.
    pub fn active_pairs(&self) -> impl Iterator<Item = (usize, usize, TopicOperator)> + '_ {
        TOPIC_PAIRS
            .iter()
            .enumerate()
            .filter(|(_, (i, j))| self.topic(*i).is_some() && self.topic(*j).is_some())
            .map(|(slot, (i, j))| (*i, *j, self.operators[slot]))
    }
}

fn pair_slot(i: usize, j: usize) -> Option<usize> {
    let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
    TOPIC_PAIRS.iter().position(|p| *p == (lo, hi))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Source and compiler settings submitted to the contract verifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractVerification {
    pub address_hash: String,
    pub name: String,
    pub compiler_version: String,
    pub optimization: bool,
    pub contract_source_code: String,
    pub constructor_arguments: Option<String>,
    pub autodetect_constructor_arguments: Option<bool>,
    pub evm_version: Option<String>,
    pub optimization_runs: Option<u32>,
    pub proxy_address: Option<String>,
    /// Linked libraries, slot `n` is sent as `library{n+1}Name` / `library{n+1}Address`.
    pub libraries: [Library; 5],
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxListOptions {
    pub sort: Option<SortDirection>,
    pub block: Option<BlockRange>,
    pub page: Option<PageRange>,
    pub filter_by: Option<FilterDirection>,
    pub time: Option<TimeRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InternalTxOptions {
    pub address: Option<String>,
    pub sort: Option<SortDirection>,
    pub block: Option<BlockRange>,
    pub page: Option<PageRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenTxOptions {
    pub contract_address: Option<String>,
    pub sort: Option<SortDirection>,
    pub block: Option<BlockRange>,
    pub page: Option<PageRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListContractsOptions {
    pub page: Option<PageRange>,
    pub filter: Option<ContractFilter>,
    pub not_decompiled_with_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_lookup_is_symmetric() {
        let f = TopicFilter::new("aa").with_operator(2, 1, TopicOperator::Or);
        assert_eq!(f.operator(1, 2), Some(TopicOperator::Or));
        assert_eq!(f.operator(0, 1), Some(TopicOperator::And));
        assert_eq!(f.operator(3, 3), None);
    }

    #[test]
    fn active_pairs_skip_missing_topics() {
        let f = TopicFilter::new("aa").with_topic2("cc");
        let pairs: Vec<_> = f.active_pairs().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(pairs, vec![(0, 2)]);
    }
}
