use crate::tx::Tx;

/// **The global undo history**
///
/// A LIFO of deposits and withdrawals across all accounts.
///
/// It holds copies of transactions whose record of truth is the owning
/// account's [`TransactionLog`](crate::history::TransactionLog),
/// so popping an entry never loses history.
#[derive(Debug, Default)]
pub struct UndoStack {
    stack: Vec<Tx>,
}

impl UndoStack {
    pub fn new() -> Self {
        UndoStack { stack: vec![] }
    }

    pub fn push(&mut self, tx: Tx) {
        self.stack.push(tx);
    }

    /// Removes and returns the most recently pushed transaction,
    /// or `None` if there's nothing left to undo.
    pub fn pop(&mut self) -> Option<Tx> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&Tx> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TxKind;
    use rust_decimal_macros::dec;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = UndoStack::new();
        stack.push(Tx::new("TX1".into(), TxKind::Deposit, dec!(1), dec!(1), ""));
        stack.push(Tx::new("TX2".into(), TxKind::Withdraw, dec!(1), dec!(0), ""));

        assert_eq!(2, stack.len());
        assert_eq!("TX2", stack.peek().unwrap().id);
        assert_eq!(2, stack.len());

        assert_eq!("TX2", stack.pop().unwrap().id);
        assert_eq!("TX1", stack.pop().unwrap().id);
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
    }
}
