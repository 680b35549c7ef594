//! Canonical query-string construction.
//!
//! Parameters live in a key-sorted map, so setting a key twice replaces it and
//! the encoded query does not depend on call order. Address and hash values go
//! out with a single `0x` prefix; unset optional parameters are left out.

use std::collections::BTreeMap;

use url::form_urlencoded;
use url::Url;

use crate::convert::add_0x;
use crate::params::{
    BlockRange, BlockTag, ContractFilter, ContractVerification, FilterDirection, LogBlockRange,
    PageRange, SortDirection, TimeRange, TopicFilter,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: BTreeMap<String, String>,
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl QueryBuilder {
    pub fn new(module: &str, action: &str) -> Self {
        let mut qb = Self::default();
        qb.set("module", module).set("action", action);
        qb
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn set_opt<V: Into<String>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.set(key, bool_str(value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn address(&mut self, address: &str) -> &mut Self {
        self.set("address", add_0x(address))
    }

    pub fn tx_hash(&mut self, hash: &str) -> &mut Self {
        self.set("txhash", add_0x(hash))
    }

    pub fn contract_address(&mut self, address: &str) -> &mut Self {
        self.set("contractaddress", add_0x(address))
    }

    pub fn address_multi<S: AsRef<str>>(&mut self, addresses: &[S]) -> &mut Self {
        let joined = addresses
            .iter()
            .map(|a| add_0x(a.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        self.set("address", joined)
    }

    pub fn block(&mut self, number: Option<u64>) -> &mut Self {
        self.set_opt("block", number.map(|n| n.to_string()))
    }

    pub fn block_no(&mut self, number: u64) -> &mut Self {
        self.set("blockno", number.to_string())
    }

    pub fn page_range(&mut self, pages: Option<PageRange>) -> &mut Self {
        if let Some(pages) = pages {
            self.set("page", pages.page.to_string());
            self.set("offset", pages.offset.to_string());
        }
        self
    }

    pub fn sort(&mut self, direction: Option<SortDirection>) -> &mut Self {
        self.set_opt("sort", direction.map(SortDirection::as_str))
    }

    pub fn block_range(&mut self, block: Option<BlockRange>) -> &mut Self {
        if let Some(block) = block {
            self.set_opt("startblock", block.start_block.map(|n| n.to_string()));
            self.set_opt("endblock", block.end_block.map(|n| n.to_string()));
        }
        self
    }

    pub fn filter_by(&mut self, filter: Option<FilterDirection>) -> &mut Self {
        self.set_opt("filterby", filter.map(FilterDirection::as_str))
    }

    pub fn filter_contract(&mut self, filter: Option<ContractFilter>) -> &mut Self {
        self.set_opt("filter", filter.map(ContractFilter::as_str))
    }

    pub fn not_decompiled_with_version(&mut self, version: Option<&str>) -> &mut Self {
        self.set_opt("not_decompiled_with_version", version)
    }

    pub fn ignore_proxy(&mut self, ignore: Option<bool>) -> &mut Self {
        self.set_opt("ignoreProxy", ignore.map(bool_str))
    }

    pub fn time_range(&mut self, range: Option<TimeRange>) -> &mut Self {
        if let Some(range) = range {
            self.set("starttimestamp", range.start.timestamp().to_string());
            self.set("endtimestamp", range.end.timestamp().to_string());
        }
        self
    }

    pub fn log_block_range(&mut self, block: LogBlockRange) -> &mut Self {
        self.set("fromBlock", block.from_block.to_string());
        match block.to_block {
            BlockTag::Number(n) => self.set("toBlock", n.to_string()),
            BlockTag::Latest => self.set("toBlock", "latest"),
        }
    }

    /// `topic0` always goes out; the other topics only when set, and
    /// `topic{i}_{j}_opr` only when both topic `i` and topic `j` are set.
    pub fn topics(&mut self, topics: &TopicFilter) -> &mut Self {
        for index in 0..4 {
            if let Some(topic) = topics.topic(index) {
                self.set(format!("topic{index}"), add_0x(topic));
            }
        }
        for (i, j, op) in topics.active_pairs() {
            self.set(format!("topic{i}_{j}_opr"), op.as_str());
        }
        self
    }

    pub fn verify(&mut self, contract: &ContractVerification) -> &mut Self {
        self.set("addressHash", add_0x(&contract.address_hash));
        self.set("name", contract.name.as_str());
        self.set("compilerVersion", contract.compiler_version.as_str());
        self.set_bool("optimization", contract.optimization);
        self.set("contractSourceCode", contract.contract_source_code.as_str());
        self.set_opt("constructorArguments", contract.constructor_arguments.as_deref());
        self.set_opt(
            "autoDetectConstructorArguments",
            contract.autodetect_constructor_arguments.map(bool_str),
        );
        self.set_opt("evmVersion", contract.evm_version.as_deref());
        self.set_opt("optimizationRuns", contract.optimization_runs.map(|n| n.to_string()));
        self.set_opt("proxyAddress", contract.proxy_address.as_deref().map(add_0x));

        for (slot, library) in contract.libraries.iter().enumerate() {
            let n = slot + 1;
            if let Some(name) = &library.name {
                self.set(format!("library{n}Name"), name.as_str());
            }
            if let Some(address) = &library.address {
                self.set(format!("library{n}Address"), add_0x(address));
            }
        }
        self
    }

    /// Log index used for paginating the logs of a transaction.
    pub fn index(&mut self, index: Option<u64>) -> &mut Self {
        self.set_opt("index", index.map(|n| n.to_string()))
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Appends the parameters after whatever query `base` already carries.
    pub fn apply(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().extend_pairs(self.params.iter());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Library, TopicOperator};
    use chrono::{TimeZone, Utc};

    const ADDR: &str = "471ece3750da237f93b8e339c536989b8978a438";

    fn opr_keys(qb: &QueryBuilder) -> Vec<String> {
        qb.keys()
            .filter(|k| k.ends_with("_opr"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn address_gets_single_prefix() {
        let mut qb = QueryBuilder::default();
        qb.address(ADDR);
        assert_eq!(qb.encode(), format!("address=0x{ADDR}"));

        qb.address(&format!("0x{ADDR}"));
        assert_eq!(qb.encode(), format!("address=0x{ADDR}"));
    }

    #[test]
    fn hash_and_contract_are_prefixed() {
        let mut qb = QueryBuilder::default();
        qb.tx_hash("ab12").contract_address("cd34");
        assert_eq!(qb.get("txhash"), Some("0xab12"));
        assert_eq!(qb.get("contractaddress"), Some("0xcd34"));
    }

    #[test]
    fn unset_options_are_omitted() {
        let mut qb = QueryBuilder::new("account", "txlist");
        qb.sort(None)
            .block_range(None)
            .page_range(None)
            .filter_by(None)
            .time_range(None)
            .block(None)
            .index(None)
            .ignore_proxy(None)
            .not_decompiled_with_version(None);
        assert_eq!(qb.encode(), "action=txlist&module=account");
    }

    #[test]
    fn explicit_empty_differs_from_absent() {
        let mut qb = QueryBuilder::default();
        qb.not_decompiled_with_version(Some(""));
        assert!(qb.contains("not_decompiled_with_version"));
        assert_eq!(qb.encode(), "not_decompiled_with_version=");
    }

    #[test]
    fn half_open_block_range() {
        let mut qb = QueryBuilder::default();
        qb.block_range(Some(BlockRange {
            start_block: Some(10),
            end_block: None,
        }));
        assert_eq!(qb.get("startblock"), Some("10"));
        assert!(!qb.contains("endblock"));
    }

    #[test]
    fn full_tx_list_query_is_canonical() {
        let mut qb = QueryBuilder::new("account", "txlist");
        qb.address(ADDR)
            .sort(Some(SortDirection::Desc))
            .block_range(Some(BlockRange::new(1, 200)))
            .page_range(Some(PageRange::new(2, 50)))
            .filter_by(Some(FilterDirection::From))
            .time_range(Some(TimeRange {
                start: Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
                end: Utc.timestamp_opt(1_600_086_400, 0).unwrap(),
            }));
        assert_eq!(
            qb.encode(),
            format!(
                "action=txlist&address=0x{ADDR}&endblock=200&endtimestamp=1600086400\
                 &filterby=from&module=account&offset=50&page=2&sort=desc\
                 &startblock=1&starttimestamp=1600000000"
            )
        );
    }

    #[test]
    fn multi_address_joined_with_commas() {
        let mut qb = QueryBuilder::default();
        qb.address_multi(&["aa", "0xbb", "cc"]);
        assert_eq!(qb.get("address"), Some("0xaa,0xbb,0xcc"));
        assert_eq!(qb.encode(), "address=0xaa%2C0xbb%2C0xcc");
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut qb = QueryBuilder::default();
        qb.set("page", "1").set("page", "3");
        assert_eq!(qb.encode(), "page=3");
    }

    #[test]
    fn topic_operator_table() {
        let cases: [((bool, bool, bool), &[&str]); 8] = [
            ((false, false, false), &[]),
            ((true, false, false), &["topic0_1_opr"]),
            ((false, true, false), &["topic0_2_opr"]),
            ((false, false, true), &["topic0_3_opr"]),
            ((true, true, false), &["topic0_1_opr", "topic0_2_opr", "topic1_2_opr"]),
            ((true, false, true), &["topic0_1_opr", "topic0_3_opr", "topic1_3_opr"]),
            ((false, true, true), &["topic0_2_opr", "topic0_3_opr", "topic2_3_opr"]),
            (
                (true, true, true),
                &[
                    "topic0_1_opr",
                    "topic0_2_opr",
                    "topic0_3_opr",
                    "topic1_2_opr",
                    "topic1_3_opr",
                    "topic2_3_opr",
                ],
            ),
        ];

        for ((t1, t2, t3), expected) in cases {
            let mut filter = TopicFilter::new("00");
            if t1 {
                filter = filter.with_topic1("11");
            }
            if t2 {
                filter = filter.with_topic2("22");
            }
            if t3 {
                filter = filter.with_topic3("33");
            }
            let mut qb = QueryBuilder::default();
            qb.topics(&filter);

            assert_eq!(opr_keys(&qb), expected, "topics ({t1}, {t2}, {t3})");
            assert_eq!(qb.get("topic0"), Some("0x00"));
            assert_eq!(qb.contains("topic1"), t1);
            assert_eq!(qb.contains("topic2"), t2);
            assert_eq!(qb.contains("topic3"), t3);
        }
    }

    #[test]
    fn topic_operators_are_literal_words() {
        let filter = TopicFilter::new("0xaa")
            .with_topic3("0xdd")
            .with_operator(0, 3, TopicOperator::Or);
        let mut qb = QueryBuilder::default();
        qb.topics(&filter);
        assert_eq!(qb.get("topic0"), Some("0xaa"));
        assert_eq!(qb.get("topic3"), Some("0xdd"));
        assert_eq!(qb.get("topic0_3_opr"), Some("or"));
    }

    #[test]
    fn log_block_range_latest() {
        let mut qb = QueryBuilder::default();
        qb.log_block_range(LogBlockRange::to_latest(5));
        assert_eq!(qb.encode(), "fromBlock=5&toBlock=latest");
        qb.log_block_range(LogBlockRange::new(5, 9));
        assert_eq!(qb.get("toBlock"), Some("9"));
    }

    #[test]
    fn verify_library_slots_are_independent() {
        let mut contract = ContractVerification {
            address_hash: "abcd".into(),
            name: "Token".into(),
            compiler_version: "v0.8.19+commit.7dd6d404".into(),
            optimization: false,
            contract_source_code: "contract Token {}".into(),
            autodetect_constructor_arguments: Some(true),
            optimization_runs: Some(200),
            proxy_address: Some("cd".into()),
            ..Default::default()
        };
        contract.libraries[2] = Library {
            name: Some("SafeMath".into()),
            address: Some("ef01".into()),
        };
        contract.libraries[4].address = Some("0x9999".into());

        let mut qb = QueryBuilder::default();
        qb.verify(&contract);

        assert_eq!(qb.get("addressHash"), Some("0xabcd"));
        assert_eq!(qb.get("optimization"), Some("false"));
        assert_eq!(qb.get("autoDetectConstructorArguments"), Some("true"));
        assert_eq!(qb.get("optimizationRuns"), Some("200"));
        assert_eq!(qb.get("library3Name"), Some("SafeMath"));
        assert_eq!(qb.get("library3Address"), Some("0xef01"));
        assert_eq!(qb.get("library5Address"), Some("0x9999"));
        assert!(!qb.contains("library5Name"));
        for n in [1, 2, 4] {
            assert!(!qb.contains(&format!("library{n}Name")));
            assert!(!qb.contains(&format!("library{n}Address")));
        }
        assert!(!qb.contains("constructorArguments"));
        assert!(!qb.contains("evmVersion"));
        assert_eq!(qb.get("proxyAddress"), Some("0xcd"));

        contract.proxy_address = Some("0xCD".into());
        qb.verify(&contract);
        assert_eq!(qb.get("proxyAddress"), Some("0xCD"));
    }

    #[test]
    fn booleans_are_words() {
        let mut qb = QueryBuilder::default();
        qb.ignore_proxy(Some(false));
        assert_eq!(qb.get("ignoreProxy"), Some("false"));
        qb.ignore_proxy(Some(true));
        assert_eq!(qb.get("ignoreProxy"), Some("true"));
    }

    #[test]
    fn apply_keeps_existing_base_query() {
        let base = Url::parse("https://explorer.celo.org/api?apikey=k").unwrap();
        let mut qb = QueryBuilder::new("account", "balance");
        qb.address("aa");
        let url = qb.apply(&base);
        assert_eq!(
            url.as_str(),
            "https://explorer.celo.org/api?apikey=k&action=balance&address=0xaa&module=account"
        );
    }
}
