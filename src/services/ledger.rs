//! Ledger service
//!
//! Binds the in-memory ledger to the store it came from, the clock that
//! timestamps transactions and the audit log.

use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::PassbookResult;
use crate::models::{Amount, Clock, Ledger, Receipt, SystemClock};
use crate::storage::LedgerStore;

/// The one ledger a session works on
pub struct LedgerService<S: LedgerStore, C: Clock = SystemClock> {
    ledger: Ledger,
    store: S,
    clock: C,
    audit: Option<AuditLogger>,
}

impl<S: LedgerStore, C: Clock> LedgerService<S, C> {
    /// Load the ledger from `store`
    ///
    /// Fails if the store has nothing readable; no empty ledger is made up.
    pub fn open(store: S, clock: C) -> PassbookResult<Self> {
        let ledger = store.load()?;
        Ok(Self::from_ledger(ledger, store, clock))
    }

    /// Wrap a ledger that is already in memory
    pub fn from_ledger(ledger: Ledger, store: S, clock: C) -> Self {
        Self {
            ledger,
            store,
            clock,
            audit: None,
        }
    }

    /// Record accepted operations in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_balance(&self) -> Amount {
        self.ledger.current_balance()
    }

    pub fn deposit(&mut self, amount: Amount) -> PassbookResult<Receipt> {
        let result = self.ledger.deposit(amount, &self.clock);
        self.after_operation(&result);
        result
    }

    pub fn withdraw(&mut self, amount: Amount) -> PassbookResult<Receipt> {
        let result = self.ledger.withdraw(amount, &self.clock);
        self.after_operation(&result);
        result
    }

    /// Assign the balance directly, e.g. an opening balance
    pub fn set_balance(&mut self, balance: Amount) {
        self.ledger.set_balance(balance);
        self.audit(&AuditEntry::set_balance(balance));
    }

    /// Write the ledger back to its store
    pub fn save(&self) -> PassbookResult<()> {
        self.store.save(&self.ledger)
    }

    fn after_operation(&self, result: &PassbookResult<Receipt>) {
        match result {
            Ok(receipt) => self.audit(&AuditEntry::from_receipt(receipt)),
            Err(e) => debug!(error = %e, "Rejected ledger operation"),
        }
    }

    // The ledger has already changed; a broken audit log must not undo that
    fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, path = %logger.path().display(), "Failed to write audit entry");
            }
        }
    }
}
