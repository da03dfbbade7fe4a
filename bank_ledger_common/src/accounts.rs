use crate::types::Account;
use std::collections::{BTreeMap, HashMap};

/// **A type for storing and indexing accounts**
///
/// Accounts are kept in an append-only arena and reached through two views
/// that are always updated together:
/// - a hash map from account number to arena position, for O(1) lookups;
/// - an ordered map from account number to arena position, for listing
///   accounts sorted by account number.
///
/// Neither view owns an account; they only hold positions into the arena.
/// Accounts are never removed, so positions never go stale.
#[derive(Debug, Default)]
pub struct Accounts {
    arena: Vec<Account>,
    by_number: HashMap<String, usize>,
    sorted: BTreeMap<String, usize>,
}

impl Accounts {
    /// Returns an empty instance of the [`Accounts`] type
    pub fn new() -> Self {
        Accounts {
            arena: vec![],
            by_number: HashMap::new(),
            sorted: BTreeMap::new(),
        }
    }

    /// Adds `account` under its account number.
    ///
    /// This is not an upsert: if the number is already taken, the existing
    /// account is kept, the new one is dropped, and `false` is returned.
    pub fn insert(&mut self, account: Account) -> bool {
        if self.sorted.contains_key(&account.account_number) {
            return false;
        }

        let position = self.arena.len();
        self.by_number
            .insert(account.account_number.clone(), position);
        self.sorted.insert(account.account_number.clone(), position);
        self.arena.push(account);

        true
    }

    /// Retrieves an account by its number
    pub fn lookup(&self, account_number: &str) -> Option<&Account> {
        self.by_number
            .get(account_number)
            .map(|&position| &self.arena[position])
    }

    /// Only the ledger mutates accounts, and only their balance.
    pub(crate) fn lookup_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        match self.by_number.get(account_number) {
            Some(&position) => self.arena.get_mut(position),
            None => None,
        }
    }

    /// **Lists all accounts sorted by account number, ascending**
    ///
    /// Account numbers are compared as strings.
    pub fn list_sorted(&self) -> Vec<&Account> {
        self.sorted
            .values()
            .map(|&position| &self.arena[position])
            .collect()
    }

    /// **Finds accounts whose owner's name contains `keyword`**
    ///
    /// The match is case-insensitive, and the result keeps the
    /// account-number order of [`Accounts::list_sorted`].
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Account> {
        let keyword = keyword.to_lowercase();

        self.list_sorted()
            .into_iter()
            .filter(|account| account.owner_name.to_lowercase().contains(&keyword))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
