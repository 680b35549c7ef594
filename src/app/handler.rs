use {
    crate::app::args::{Cli, Command, LogsArgs, TxsArgs},
    crate::app::{logging, render},
    crate::libs::config::{load_env, Config},
    crate::libs::units::format_celo,
    crate::libs::writing::Colors,
    anyhow::{Context, Result},
    clap::Parser,
    explorer::{
        stable_token, Explorer, InternalTxOptions, Network, Stablecoin, TokenTxOptions, Transport,
        TxListOptions,
    },
    serde::Serialize,
    std::io::{self, Write},
};

pub async fn init() -> Result<()> {
    let cli = Cli::parse();
    load_env();
    let cfg = Config::new().with_overrides(cli.network.clone(), cli.url.clone(), cli.log_level.clone());
    logging::init(cfg.log_level()?)?;

    let http = cfg.http_config()?;
    tracing::debug!(url = %http.base_url, "explorer root");
    let client = Explorer::with_config(http).context("failed to build explorer client")?;

    let stdout = io::stdout();
    let mut out = Colors::new(stdout.lock());
    run(&client, &cfg, cli.command, cli.json, &mut out).await
}

fn emit_json<W: Write, V: Serialize>(out: &mut Colors<W>, value: &V) -> Result<()> {
    out.line(&serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct StableRow {
    symbol: &'static str,
    address: String,
}

fn stables(network: Network) -> Vec<StableRow> {
    [Stablecoin::Celo, Stablecoin::CeloUsd, Stablecoin::CeloEur]
        .into_iter()
        .map(|coin| StableRow {
            symbol: coin.symbol(),
            address: stable_token(network, coin).to_string(),
        })
        .collect()
}

#[derive(Serialize)]
struct Supply {
    total_wei: String,
    exchange_wei: String,
    coins: f64,
    total_transactions: String,
}

/// Executes one subcommand against `client`, writing to `out`.
pub async fn run<T: Transport, W: Write>(
    client: &Explorer<T>,
    cfg: &Config,
    command: Command,
    json: bool,
    out: &mut Colors<W>,
) -> Result<()> {
    match command {
        Command::Balance { address } => {
            let wei = client.balance(&address).await?;
            if json {
                return emit_json(out, &wei);
            }
            out.kv(&render::hexed(explorer::convert::trim_0x(&address)), format_celo(wei));
        }
        Command::BalanceMulti { addresses } => {
            let balances = client.balance_multi(&addresses).await?;
            if json {
                return emit_json(out, &balances);
            }
            render::balances(out, &balances);
        }
        Command::RpcBalance { address, block } => {
            let wei = client.eth_get_balance(&address, block).await?;
            if json {
                return emit_json(out, &wei);
            }
            out.kv("balance", format_celo(wei));
        }
        Command::Txs(args) => {
            let txs = client.tx_list(&args.address, &tx_options(&args)).await?;
            if json {
                return emit_json(out, &txs);
            }
            render::transactions(out, &txs);
        }
        Command::Internal { hash, address, page } => {
            let opts = InternalTxOptions {
                address,
                page: page.range(),
                ..Default::default()
            };
            let calls = client.tx_list_internal(&hash, &opts).await?;
            if json {
                return emit_json(out, &calls);
            }
            render::internal(out, &calls);
        }
        Command::TokenTransfers { address, contract, sort, page } => {
            let opts = TokenTxOptions {
                contract_address: contract,
                sort: sort.map(Into::into),
                page: page.range(),
                ..Default::default()
            };
            let transfers = client.token_tx(&address, &opts).await?;
            if json {
                return emit_json(out, &transfers);
            }
            render::transfers(out, &transfers);
        }
        Command::Tokens { address } => {
            let tokens = client.token_list(&address).await?;
            if json {
                return emit_json(out, &tokens);
            }
            render::holdings(out, &tokens);
        }
        Command::Token { contract } => {
            let token = client.token(&contract).await?;
            if json {
                return emit_json(out, &token);
            }
            render::token(out, &token);
        }
        Command::TokenHolders { contract, page } => {
            let holders = client.token_holders(&contract, page.range()).await?;
            if json {
                return emit_json(out, &holders);
            }
            render::holders(out, &holders);
        }
        Command::Logs(args) => {
            let logs = fetch_logs(client, &args).await?;
            if json {
                return emit_json(out, &logs);
            }
            render::logs(out, &logs);
        }
        Command::Tx { hash, index } => {
            let info = client.tx_info(&hash, index).await?;
            if json {
                return emit_json(out, &info);
            }
            render::tx_info(out, &info);
        }
        Command::Receipt { hash } => {
            let ok = client.tx_receipt_status(&hash).await?;
            if json {
                return emit_json(out, &ok);
            }
            out.flag("receipt success", ok);
        }
        Command::Status { hash } => {
            let status = client.tx_status(&hash).await?;
            if json {
                return emit_json(out, &status);
            }
            render::status(out, &status);
        }
        Command::BlockNumber => {
            let number = client.eth_block_number().await?;
            if json {
                return emit_json(out, &number);
            }
            out.kv("latest block", number);
        }
        Command::BlockReward { block } => {
            let reward = client.block_reward(block).await?;
            if json {
                return emit_json(out, &reward);
            }
            render::block_reward(out, &reward);
        }
        Command::Supply => {
            let supply = Supply {
                total_wei: client.eth_supply().await?.to_string(),
                exchange_wei: client.eth_supply_exchange().await?.to_string(),
                coins: client.coin_supply().await?,
                total_transactions: client.total_transactions().await?.to_string(),
            };
            if json {
                return emit_json(out, &supply);
            }
            out.kv("total supply", format!("{} wei", supply.total_wei));
            out.kv("exchange supply", format!("{} wei", supply.exchange_wei));
            out.kv("coin supply", supply.coins);
            out.kv("transactions", supply.total_transactions);
        }
        Command::Price => {
            let price = client.coin_price().await?;
            if json {
                return emit_json(out, &price);
            }
            render::price(out, &price);
        }
        Command::Abi { address } => {
            let abi = client.abi(&address).await?;
            if json {
                return emit_json(out, &abi);
            }
            out.line(&abi);
        }
        Command::Source { address, ignore_proxy } => {
            let sources = client
                .source_code(&address, ignore_proxy.then_some(true))
                .await?;
            if json {
                return emit_json(out, &sources);
            }
            render::sources(out, &sources);
        }
        Command::Stables => {
            let network = cfg.network()?;
            let rows = stables(network);
            if json {
                return emit_json(out, &rows);
            }
            out.header(&format!("{network} stable tokens"));
            for row in rows {
                out.kv(row.symbol, row.address);
            }
        }
        Command::Config => {
            if json {
                return emit_json(out, cfg);
            }
            out.kv("network", &cfg.network);
            out.kv("explorer", cfg.base_url()?);
            out.kv("max idle", cfg.max_idle);
            out.kv("idle timeout", format!("{}s", cfg.idle_timeout_secs));
            match cfg.timeout_secs {
                0 => out.kv("request timeout", "none"),
                secs => out.kv("request timeout", format!("{secs}s")),
            }
            out.kv("log level", &cfg.log_level);
        }
    }
    Ok(())
}

fn tx_options(args: &TxsArgs) -> TxListOptions {
    TxListOptions {
        sort: args.sort.map(Into::into),
        block: args.block_range(),
        page: args.page.range(),
        filter_by: args.filter_by.map(Into::into),
        time: args.time_range(),
    }
}

async fn fetch_logs<T: Transport>(client: &Explorer<T>, args: &LogsArgs) -> Result<Vec<explorer::EventLog>> {
    let logs = client
        .logs(args.blocks(), &args.address, &args.topics())
        .await
        .with_context(|| format!("fetching logs of {}", args.address))?;
    Ok(logs)
}
