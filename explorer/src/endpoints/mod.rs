//! Endpoint methods on [`crate::Explorer`], grouped by upstream module.

mod account;
mod block;
mod contract;
mod logs;
mod stats;
mod token;
mod transaction;

const ACCOUNT: &str = "account";
const BLOCK: &str = "block";
const CONTRACT: &str = "contract";
const LOGS: &str = "logs";
const STATS: &str = "stats";
const TOKEN: &str = "token";
const TRANSACTION: &str = "transaction";
