use chrono::DateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use explorer::{
    BlockRange, FilterDirection, LogBlockRange, PageRange, SortDirection, TimeRange, TopicFilter,
    TopicOperator,
};

pub const DEFAULT_PAGE_SIZE: u32 = 25;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Celo block explorer API", long_about = None)]
pub struct Cli {
    /// Explorer API root, overrides CELOSCAN_URL and --network
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// mainnet or alfajores, overrides CELOSCAN_NETWORK
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// trace, debug, info, warn or error, overrides CELOSCAN_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// CELO balance of an address
    Balance { address: String },

    /// CELO balances of several addresses at once
    BalanceMulti {
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// CELO balance through the JSON-RPC style endpoint
    RpcBalance {
        address: String,

        /// Historical block number
        #[arg(long)]
        block: Option<u64>,
    },

    /// Transactions of an address
    Txs(TxsArgs),

    /// Internal transactions created by a transaction
    Internal {
        hash: String,

        /// Only calls involving this address
        #[arg(long)]
        address: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Token transfers involving an address
    TokenTransfers {
        address: String,

        /// Only transfers of this token contract
        #[arg(long)]
        contract: Option<String>,

        #[arg(long)]
        sort: Option<SortArg>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Token balances of an address
    Tokens { address: String },

    /// Token metadata
    Token { contract: String },

    /// Holders of a token
    TokenHolders {
        contract: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Event logs of a contract
    Logs(LogsArgs),

    /// Transaction details and logs
    Tx {
        hash: String,

        /// Log index to page from
        #[arg(long)]
        index: Option<u64>,
    },

    /// Receipt status of a transaction
    Receipt { hash: String },

    /// Error status of a transaction
    Status { hash: String },

    /// Latest block number
    BlockNumber,

    /// Reward paid for a block
    BlockReward { block: u64 },

    /// CELO supply and transaction totals
    Supply,

    /// CELO price
    Price,

    /// ABI of a verified contract
    Abi { address: String },

    /// Verified source of a contract
    Source {
        address: String,

        /// Do not resolve proxies to their implementation
        #[arg(long)]
        ignore_proxy: bool,
    },

    /// Core stable token addresses of the selected network
    Stables,

    /// Effective configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub offset: Option<u32>,
}

impl PageArgs {
    /// A page size alone implies the first page.
    pub fn range(&self) -> Option<PageRange> {
        match (self.page, self.offset) {
            (None, None) => None,
            (page, offset) => Some(PageRange::new(
                page.unwrap_or(1),
                offset.unwrap_or(DEFAULT_PAGE_SIZE),
            )),
        }
    }
}

#[derive(Args, Debug)]
pub struct TxsArgs {
    pub address: String,

    #[arg(long)]
    pub sort: Option<SortArg>,

    #[arg(long)]
    pub start_block: Option<u64>,

    #[arg(long)]
    pub end_block: Option<u64>,

    /// Unix seconds; used together with --end-time
    #[arg(long, requires = "end_time")]
    pub start_time: Option<i64>,

    #[arg(long, requires = "start_time")]
    pub end_time: Option<i64>,

    /// Only incoming (to) or outgoing (from) transactions
    #[arg(long)]
    pub filter_by: Option<DirectionArg>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl TxsArgs {
    pub fn time_range(&self) -> Option<TimeRange> {
        let start = DateTime::from_timestamp(self.start_time?, 0)?;
        let end = DateTime::from_timestamp(self.end_time?, 0)?;
        Some(TimeRange { start, end })
    }

    pub fn block_range(&self) -> Option<BlockRange> {
        if self.start_block.is_none() && self.end_block.is_none() {
            return None;
        }
        Some(BlockRange {
            start_block: self.start_block,
            end_block: self.end_block,
        })
    }
}

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Emitting contract
    pub address: String,

    #[arg(long)]
    pub from_block: u64,

    /// Defaults to the latest block
    #[arg(long)]
    pub to_block: Option<u64>,

    #[arg(long)]
    pub topic0: String,

    #[arg(long)]
    pub topic1: Option<String>,

    #[arg(long)]
    pub topic2: Option<String>,

    #[arg(long)]
    pub topic3: Option<String>,

    /// Topic pair joined with "or" instead of "and", e.g. 0-2
    #[arg(long = "or", value_parser = parse_pair)]
    pub or_pairs: Vec<(usize, usize)>,
}

impl LogsArgs {
    pub fn blocks(&self) -> LogBlockRange {
        match self.to_block {
            Some(to) => LogBlockRange::new(self.from_block, to),
            None => LogBlockRange::to_latest(self.from_block),
        }
    }

    pub fn topics(&self) -> TopicFilter {
        let mut filter = TopicFilter::new(self.topic0.as_str());
        if let Some(t) = &self.topic1 {
            filter = filter.with_topic1(t.as_str());
        }
        if let Some(t) = &self.topic2 {
            filter = filter.with_topic2(t.as_str());
        }
        if let Some(t) = &self.topic3 {
            filter = filter.with_topic3(t.as_str());
        }
        for (i, j) in &self.or_pairs {
            filter = filter.with_operator(*i, *j, TopicOperator::Or);
        }
        filter
    }
}

fn parse_pair(s: &str) -> Result<(usize, usize), String> {
    let (i, j) = s
        .split_once('-')
        .ok_or_else(|| format!("expected a topic pair like 0-1, got '{s}'"))?;
    let i: usize = i.trim().parse().map_err(|_| format!("bad topic index '{i}'"))?;
    let j: usize = j.trim().parse().map_err(|_| format!("bad topic index '{j}'"))?;
    if i == j || i > 3 || j > 3 {
        return Err(format!("no topic pair {i}-{j}"));
    }
    Ok((i.min(j), i.max(j)))
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortDirection {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortDirection::Asc,
            SortArg::Desc => SortDirection::Desc,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DirectionArg {
    To,
    From,
}

impl From<DirectionArg> for FilterDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::To => FilterDirection::To,
            DirectionArg::From => FilterDirection::From,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("celoscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["balance", "0xabc", "--network", "alfajores", "--json"]);
        assert_eq!(cli.network.as_deref(), Some("alfajores"));
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Balance { address } if address == "0xabc"));
    }

    #[test]
    fn page_defaults() {
        assert_eq!(PageArgs::default().range(), None);
        let only_size = PageArgs {
            page: None,
            offset: Some(10),
        };
        assert_eq!(only_size.range(), Some(PageRange::new(1, 10)));
        let only_page = PageArgs {
            page: Some(3),
            offset: None,
        };
        assert_eq!(only_page.range(), Some(PageRange::new(3, DEFAULT_PAGE_SIZE)));
    }

    #[test]
    fn txs_half_open_range() {
        let Command::Txs(args) = parse(&["txs", "abc", "--start-block", "5", "--sort", "desc"]).command
        else {
            panic!("expected txs");
        };
        assert_eq!(
            args.block_range(),
            Some(BlockRange {
                start_block: Some(5),
                end_block: None
            })
        );
        assert!(matches!(args.sort, Some(SortArg::Desc)));
        assert!(args.time_range().is_none());
    }

    #[test]
    fn txs_time_window_needs_both_ends() {
        let Command::Txs(args) =
            parse(&["txs", "abc", "--start-time", "1600000000", "--end-time", "1600086400"]).command
        else {
            panic!("expected txs");
        };
        let range = args.time_range().unwrap();
        assert_eq!(range.start.timestamp(), 1_600_000_000);
        assert_eq!(range.end.timestamp(), 1_600_086_400);

        let lone = Cli::try_parse_from(["celoscan", "txs", "abc", "--start-time", "1"]);
        assert!(lone.is_err());
    }

    #[test]
    fn logs_topic_filter() {
        let Command::Logs(args) = parse(&[
            "logs", "cc", "--from-block", "1", "--topic0", "aa", "--topic2", "bb", "--or", "2-0",
        ])
        .command
        else {
            panic!("expected logs");
        };
        assert_eq!(args.blocks(), LogBlockRange::to_latest(1));
        let filter = args.topics();
        assert_eq!(filter.topic(2), Some("bb"));
        assert_eq!(filter.operator(0, 2), Some(TopicOperator::Or));
        assert_eq!(filter.operator(0, 1), Some(TopicOperator::And));
    }

    #[test]
    fn bad_pairs_rejected() {
        assert!(parse_pair("1-1").is_err());
        assert!(parse_pair("0-4").is_err());
        assert!(parse_pair("x").is_err());
        assert_eq!(parse_pair("3-1"), Ok((1, 3)));
    }
}
