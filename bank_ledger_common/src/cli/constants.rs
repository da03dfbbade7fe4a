/// CLI Commands

pub const HELP: &str = "help";
pub const CREATE: &str = "create";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const UNDO: &str = "undo";
pub const ACCOUNTS: &str = "accounts";
pub const ACCOUNT: &str = "account";
pub const HISTORY: &str = "history";
pub const SEARCH: &str = "search";
pub const STATS: &str = "stats";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
pub const SEPARATOR: &str = "--";
