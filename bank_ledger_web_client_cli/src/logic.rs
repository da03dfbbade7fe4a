use crate::DEFAULT_BASE_URL;
use bank_ledger_common::cli::constants::*;
use bank_ledger_common::cli::helpers::*;
use bank_ledger_common::requests::*;
use bank_ledger_common::tx::Tx;
use bank_ledger_common::types::{Account, AccountType, Stats};
use reqwest::{Client, Response, StatusCode, Url};
use std::error::Error;

pub async fn main_loop(base_url: Url) -> Result<(), Box<dyn Error>> {
    let client = Client::new();

    loop {
        if let Some(line) = read_from_stdin(PROMPT) {
            let words = line.split_whitespace().collect::<Vec<_>>();
            let cmd = words[0].to_lowercase();

            match cmd.as_str() {
                HELP | "h" => help(),
                CREATE | "c" => create(words, &client, &base_url).await?,
                DEPOSIT | "d" => deposit(words, &client, &base_url).await?,
                WITHDRAW | "w" => withdraw(words, &client, &base_url).await?,
                UNDO | "u" => undo(&client, &base_url).await?,
                ACCOUNTS | "a" => print_accounts(&client, &base_url).await?,
                ACCOUNT | "ac" => print_single_account(words, &client, &base_url).await?,
                HISTORY | "hi" => print_history(words, &client, &base_url).await?,
                SEARCH | "s" => search(words, &client, &base_url).await?,
                STATS | "st" => print_stats(&client, &base_url).await?,
                QUIT | "q" => break,
                _ => println!("Unrecognized command; try `help`."),
            }
        }
    }

    Ok(())
}

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all operations.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        println!(
            "No CLI base URL provided; using default: {}",
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    let base_url = Url::parse(base_url.as_str()).unwrap_or_else(|_| {
        println!(
            "Provided base URL could not be parsed; using default: {}",
            DEFAULT_BASE_URL
        );
        Url::parse(DEFAULT_BASE_URL).unwrap()
    });

    base_url
}

/// Prints an error payload as it came from the service.
async fn print_error(response: Response) -> Result<(), Box<dyn Error>> {
    eprintln!(
        "[ERROR] {} \"{}\"",
        response.status(),
        response.text().await?
    );
    Ok(())
}

/// **Parses the arguments of the `create` command**
///
/// `create <type> <amount> <email> <owner full name>`
///
/// The owner's name can consist of multiple words, and can be wrapped
/// in single or double quotes.
fn parse_create(words: &[&str]) -> Option<CreateAccountRequest> {
    if words.len() < 5 {
        println!("The create command: {CREATE} <savings|current> <amount> <email> 'owner full name'");
        return None;
    }

    let account_type = match words[1].parse::<AccountType>() {
        Ok(account_type) => account_type,
        Err(msg) => {
            eprintln!("[ERROR] {}", msg);
            return None;
        }
    };
    let balance = parse_amount(words[2])?;
    let email = words[3].to_string();
    let owner_name = join_name(&words[4..]);

    if !is_valid_name(&owner_name) {
        return None;
    }

    Some(CreateAccountRequest {
        owner_name,
        email,
        balance,
        account_type,
    })
}

/// **Parses the arguments of the `deposit` and `withdraw` commands**
///
/// `<cmd> <account> <amount> [-- note]`
fn parse_update(cmd: &str, words: &[&str]) -> Option<(String, AccountUpdateRequest)> {
    let (words, note) = split_note(words);

    if words.len() != 3 {
        println!("The {cmd} command: {cmd} <account number> <amount> [{SEPARATOR} note]");
        return None;
    }

    let account_number = words[1].to_uppercase();
    let amount = parse_amount(words[2])?;

    Some((account_number, AccountUpdateRequest { amount, note }))
}

/// **Open a new account**
///
/// Prints the new account, including its assigned account number.
async fn create(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let request = match parse_create(&words) {
        Some(request) => request,
        None => return Ok(()),
    };

    let url = base_url.join("api/accounts")?;
    let response = client.post(url).json(&request).send().await?;

    if response.status() == StatusCode::CREATED {
        let account: Account = response.json().await?;
        println!("{:#?}", account);
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Send a POST request for `deposit` and `withdraw`**
///
/// Prints the account as it is after the transaction.
async fn account_update_request(
    client: &Client,
    base_url: &Url,
    account_number: &str,
    action: &str,
    request: AccountUpdateRequest,
) -> Result<(), Box<dyn Error>> {
    let url = base_url.join(&format!("api/accounts/{account_number}/{action}"))?;

    let response = client.post(url).json(&request).send().await?;

    if response.status().is_success() {
        let account: Account = response.json().await?;
        println!("{:?}", account);
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Deposit funds to an account**
///
/// The account needs to exist, and the amount needs to be positive.
/// Errors reported by the service are printed, and don't break the loop.
async fn deposit(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if let Some((account_number, request)) = parse_update(DEPOSIT, &words) {
        account_update_request(client, base_url, &account_number, DEPOSIT, request).await?;
    }

    Ok(())
}

/// **Withdraw funds from an account**
///
/// On top of what [`deposit`] requires, the account must hold at least
/// the amount.
async fn withdraw(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if let Some((account_number, request)) = parse_update(WITHDRAW, &words) {
        account_update_request(client, base_url, &account_number, WITHDRAW, request).await?;
    }

    Ok(())
}

/// **Undo the most recent deposit or withdrawal**
async fn undo(client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let url = base_url.join("api/undo")?;
    let response = client.post(url).send().await?;

    if response.status() == StatusCode::OK {
        let undo: UndoResponse = response.json().await?;
        println!("{}", undo.message);
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Print all accounts, sorted by account number**
pub async fn print_accounts(client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let url = base_url.join("api/accounts")?;
    let response = client.get(url).send().await?;

    if response.status() == StatusCode::OK {
        let accounts: Vec<Account> = response.json().await?;
        println!("Accounts: {:#?}", accounts);
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Print a single requested account**
async fn print_single_account(
    words: Vec<&str>,
    client: &Client,
    base_url: &Url,
) -> Result<(), Box<dyn Error>> {
    if words.len() != 2 {
        println!("The account command: {ACCOUNT} <account number>");
        return Ok(());
    }

    let account_number = words[1].to_uppercase();
    let url = base_url.join(&format!("api/accounts/{account_number}"))?;
    let response = client.get(url).send().await?;

    match response.status().as_u16() {
        200..=299 => {
            let account: Account = response.json().await?;
            println!("{:#?}", account);
        }
        400..=599 => {
            eprintln!(r#"The account "{}" doesn't exist."#, account_number);
            print_error(response).await?;
        }
        _ => println!("[ERROR] Unexpected status code: {}", response.status()),
    }

    Ok(())
}

/// **Print an account's transaction history, most recent first**
async fn print_history(
    words: Vec<&str>,
    client: &Client,
    base_url: &Url,
) -> Result<(), Box<dyn Error>> {
    if words.len() != 2 {
        println!("The history command: {HISTORY} <account number>");
        return Ok(());
    }

    let account_number = words[1].to_uppercase();
    let url = base_url.join(&format!("api/accounts/{account_number}/history"))?;
    let response = client.get(url).send().await?;

    if response.status() == StatusCode::OK {
        let history: Vec<Tx> = response.json().await?;
        if history.is_empty() {
            println!(r#"No transactions for "{}"."#, account_number);
        } else {
            println!("History of {}: {:#?}", account_number, history);
        }
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Search accounts by the owner's name**
///
/// The keyword can consist of multiple words, and is matched
/// case-insensitively. No keyword lists all accounts.
async fn search(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let name = join_name(&words[1..]);

    let url = base_url.join("api/search")?;
    let response = client
        .get(url)
        .query(&SearchRequest { name: Some(name) })
        .send()
        .await?;

    if response.status() == StatusCode::OK {
        let accounts: Vec<Account> = response.json().await?;
        println!("Found: {:#?}", accounts);
    } else {
        print_error(response).await?;
    }

    Ok(())
}

/// **Print the totals over the whole ledger**
async fn print_stats(client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    let url = base_url.join("api/stats")?;
    let response = client.get(url).send().await?;

    if response.status() == StatusCode::OK {
        let stats: Stats = response.json().await?;
        println!("{:#?}", stats);
    } else {
        print_error(response).await?;
    }

    Ok(())
}
