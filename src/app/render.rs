use {
    crate::constants::CELO_DECIMALS,
    crate::libs::units::{format_celo, format_units},
    crate::libs::writing::{cc, Colors},
    alloy::primitives::Bytes,
    chrono::{DateTime, Utc},
    explorer::{
        BlockReward, CoinPrice, ContractSource, EventLog, FetchedBalance, InternalTransaction,
        TokenHolder, TokenHolding, TokenInfo, TokenTransfer, Transaction, TransactionInfo,
        TxStatus,
    },
    std::io::Write,
};

/// Addresses and hashes are stored bare; show them the way users paste them.
pub fn hexed(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        format!("0x{s}")
    }
}

pub fn when(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Calldata preview: the selector plus payload length.
pub fn calldata(input: &Bytes) -> String {
    match input.len() {
        0 => "-".to_string(),
        n if n <= 4 => format!("0x{}", hex::encode(input)),
        n => format!("0x{} (+{} bytes)", hex::encode(&input[..4]), n - 4),
    }
}

fn token_decimals(decimals: u64) -> u32 {
    u32::try_from(decimals).unwrap_or(CELO_DECIMALS)
}

pub fn balances<W: Write>(c: &mut Colors<W>, items: &[FetchedBalance]) {
    for b in items {
        let stale = if b.stale { format!(" {}(stale){}", cc::ORANGE, cc::RESET) } else { String::new() };
        c.kv(&hexed(&b.address), format!("{}{stale}", format_celo(b.balance)));
    }
}

pub fn transactions<W: Write>(c: &mut Colors<W>, txs: &[Transaction]) {
    if txs.is_empty() {
        c.cprint("no transactions", cc::LIGHT_GRAY);
        return;
    }
    for tx in txs {
        let color = if tx.succeeded { cc::GREEN } else { cc::RED };
        c.cprint(&hexed(&tx.hash), color);
        c.kv("block", tx.block_number);
        c.kv("time", when(&tx.timestamp));
        c.kv("from", hexed(&tx.from));
        c.kv("to", hexed(&tx.to));
        c.kv("value", format_celo(tx.value));
        c.kv("gas used", tx.gas_used);
        if !tx.fee_currency.is_empty() {
            c.kv("fee currency", hexed(&tx.fee_currency));
        }
        c.kv("input", calldata(&tx.input));
        c.blank();
    }
}

pub fn internal<W: Write>(c: &mut Colors<W>, calls: &[InternalTransaction]) {
    for call in calls {
        let color = if call.succeeded { cc::GREEN } else { cc::RED };
        c.cprint(&format!("#{} {}", call.index, call.kind), color);
        c.kv("from", hexed(&call.from));
        c.kv("to", hexed(&call.to));
        c.kv("value", format_celo(call.value));
        if !call.err_code.is_empty() {
            c.kv("error", &call.err_code);
        }
    }
}

pub fn transfers<W: Write>(c: &mut Colors<W>, items: &[TokenTransfer]) {
    for t in items {
        let amount = format_units(t.value, token_decimals(t.token_decimal));
        c.cprint(&format!("{amount} {}", t.token_symbol), cc::LIGHT_GREEN);
        c.kv("hash", hexed(&t.hash));
        c.kv("time", when(&t.timestamp));
        c.kv("from", hexed(&t.from));
        c.kv("to", hexed(&t.to));
    }
}

pub fn holdings<W: Write>(c: &mut Colors<W>, items: &[TokenHolding]) {
    for h in items {
        let amount = format_units(h.balance, token_decimals(h.decimals));
        c.kv(&h.symbol, format!("{amount} ({}, {})", h.kind, hexed(&h.contract_address)));
    }
}

pub fn token<W: Write>(c: &mut Colors<W>, t: &TokenInfo) {
    c.header(&format!("{} ({})", t.name, t.symbol));
    c.kv("contract", hexed(&t.contract_address));
    c.kv("type", &t.kind);
    c.kv("decimals", t.decimals);
    c.kv("total supply", format_units(t.total_supply, token_decimals(t.decimals)));
    c.flag("cataloged", t.cataloged);
}

pub fn holders<W: Write>(c: &mut Colors<W>, items: &[TokenHolder]) {
    for h in items {
        c.kv(&hexed(&h.address), h.value);
    }
}

pub fn logs<W: Write>(c: &mut Colors<W>, items: &[EventLog]) {
    if items.is_empty() {
        c.cprint("no logs", cc::LIGHT_GRAY);
        return;
    }
    for log in items {
        c.cprint(&format!("{} #{}", hexed(&log.transaction_hash), log.log_index), cc::LIGHT_BLUE);
        c.kv("block", log.block_number);
        c.kv("time", when(&log.timestamp));
        for (i, topic) in log.topics.iter().enumerate() {
            c.kv(&format!("topic{i}"), hexed(topic));
        }
        c.kv("data", format!("0x{}", hex::encode(&log.data)));
    }
}

pub fn tx_info<W: Write>(c: &mut Colors<W>, tx: &TransactionInfo) {
    c.header(&hexed(&tx.hash));
    c.flag("success", tx.success);
    if !tx.revert_reason.is_empty() {
        c.kv("revert reason", &tx.revert_reason);
    }
    c.kv("block", tx.block_number);
    c.kv("confirmations", tx.confirmations);
    c.kv("time", when(&tx.timestamp));
    c.kv("from", hexed(&tx.from));
    c.kv("to", hexed(&tx.to));
    c.kv("value", format_celo(tx.value));
    c.kv("gas limit", tx.gas_limit);
    c.kv("gas used", tx.gas_used);
    c.kv("gas price", format_units(tx.gas_price, 9) + " gwei");
    c.kv("input", calldata(&tx.input));
    for log in &tx.logs {
        c.cprint(&format!("log #{} {}", log.index, hexed(&log.address)), cc::LIGHT_BLUE);
        for topic in &log.topics {
            c.line(&format!("  {}", hexed(topic)));
        }
    }
}

pub fn status<W: Write>(c: &mut Colors<W>, s: &TxStatus) {
    c.flag("success", s.succeeded);
    if !s.error_description.is_empty() {
        c.kv("error", &s.error_description);
    }
}

pub fn block_reward<W: Write>(c: &mut Colors<W>, r: &BlockReward) {
    c.kv("block", r.block_number);
    c.kv("miner", hexed(&r.block_miner));
    c.kv("reward", format_celo(r.block_reward));
    c.kv("time", when(&r.timestamp));
    if let Some(uncle) = r.uncle_inclusion_reward {
        c.kv("uncle reward", format_celo(uncle));
    }
}

pub fn price<W: Write>(c: &mut Colors<W>, p: &CoinPrice) {
    c.kv("CELO/USD", format!("{} ({})", p.usd, when(&p.usd_timestamp)));
    c.kv("CELO/BTC", format!("{} ({})", p.btc, when(&p.btc_timestamp)));
}

pub fn sources<W: Write>(c: &mut Colors<W>, items: &[ContractSource]) {
    for s in items {
        c.header(&s.contract_name);
        c.kv("address", hexed(&s.address));
        c.kv("compiler", &s.compiler_version);
        c.kv("evm", &s.evm_version);
        c.flag("optimized", s.optimization_used);
        c.kv("runs", s.optimization_runs);
        c.kv("source", format!("{} bytes", s.source_code.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn hex_display() {
        assert_eq!(hexed("ab"), "0xab");
        assert_eq!(hexed(""), "-");
    }

    #[test]
    fn calldata_preview() {
        assert_eq!(calldata(&Bytes::new()), "-");
        assert_eq!(calldata(&Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb])), "0xa9059cbb");
        let long = Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb, 0, 0, 0, 1]);
        assert_eq!(calldata(&long), "0xa9059cbb (+4 bytes)");
    }

    #[test]
    fn stale_balances_marked() {
        let mut c = Colors::new(Vec::new());
        balances(
            &mut c,
            &[FetchedBalance {
                address: "aa".into(),
                balance: U256::from(10u64).pow(U256::from(18)),
                stale: true,
            }],
        );
        let out = String::from_utf8(c.into_inner()).unwrap();
        assert!(out.contains("0xaa:"));
        assert!(out.contains("1 CELO"));
        assert!(out.contains("(stale)"));
    }

    #[test]
    fn timestamps_render_utc() {
        let t = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(when(&t), "1970-01-01 00:00:00 UTC");
    }
}
