//! Wallet service
//!
//! Banking actions for a signed-in user. Every check runs before any
//! mutation, so a rejected action leaves both accounts untouched.

use chrono::Local;
use tracing::{info, warn};

use crate::error::{WalletError, WalletResult};
use crate::models::{ExpenseCategory, Money};
use crate::storage::AccountStore;

use super::validation::{parse_amount, parse_limit};

/// Result of a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: Money,
    /// Balance after the deposit
    pub balance: Money,
}

/// Result of a completed payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub recipient: String,
    pub amount: Money,
    /// Sender's balance after the payment
    pub balance: Money,
}

/// Cumulative expenses went over the account's monthly limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitWarning {
    pub limit: Money,
    pub total_expenses: Money,
}

impl LimitWarning {
    /// Amount spent beyond the limit
    pub fn overspend(&self) -> Money {
        self.total_expenses - self.limit
    }
}

/// Result of a recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseReceipt {
    pub amount: Money,
    pub category: ExpenseCategory,
    /// Set when the expense pushed spending past the limit; the expense is
    /// recorded regardless
    pub limit_warning: Option<LimitWarning>,
}

/// Service for banking actions
pub struct WalletService<'a> {
    store: &'a mut AccountStore,
}

impl<'a> WalletService<'a> {
    /// Create a new wallet service
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self { store }
    }

    /// Add funds to the user's wallet
    pub fn add_funds(&mut self, username: &str, amount_input: &str) -> WalletResult<DepositReceipt> {
        let amount = parse_amount(amount_input).inspect_err(|e| {
            warn!(user = username, error = %e, "Add funds rejected");
        })?;

        let account = self.store.require_mut(username)?;
        let balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::invalid("Amount is too large"))?;
        account
            .total_income
            .checked_add(amount)
            .ok_or_else(|| WalletError::invalid("Amount is too large"))?;

        account.apply_deposit(Local::now(), amount);
        info!(user = username, amount = %amount, balance = %balance, "Funds added");
        Ok(DepositReceipt { amount, balance })
    }

    /// Send money from `sender` to another registered user
    ///
    /// Checks run in order: the recipient exists, the amount is valid, the
    /// sender can cover it.
    pub fn send_payment(
        &mut self,
        sender: &str,
        recipient: &str,
        amount_input: &str,
    ) -> WalletResult<PaymentReceipt> {
        let recipient = recipient.trim();

        let result = self.check_payment(sender, recipient, amount_input);
        let amount = result.inspect_err(|e| {
            warn!(user = sender, recipient, error = %e, "Payment rejected");
        })?;

        let now = Local::now();

        let from = self.store.require_mut(sender)?;
        from.apply_payment_sent(now, amount, recipient);
        let balance = from.balance;

        self.store
            .require_mut(recipient)?
            .apply_payment_received(now, amount, sender);

        info!(user = sender, recipient, amount = %amount, "Payment sent");
        Ok(PaymentReceipt {
            recipient: recipient.to_string(),
            amount,
            balance,
        })
    }

    fn check_payment(&self, sender: &str, recipient: &str, amount_input: &str) -> WalletResult<Money> {
        let to = self
            .store
            .get(recipient)
            .ok_or_else(|| WalletError::UnknownRecipient(recipient.to_string()))?;

        if recipient == sender {
            return Err(WalletError::invalid("Cannot send a payment to yourself"));
        }

        let amount = parse_amount(amount_input)?;
        let from = self.store.require(sender)?;
        if from.balance < amount {
            return Err(WalletError::InsufficientFunds {
                needed: amount,
                available: from.balance,
            });
        }

        to.balance
            .checked_add(amount)
            .and_then(|_| to.total_income.checked_add(amount))
            .ok_or_else(|| WalletError::invalid("Amount is too large"))?;

        Ok(amount)
    }

    /// Record an expense against a category
    pub fn record_expense(
        &mut self,
        username: &str,
        amount_input: &str,
        category: ExpenseCategory,
    ) -> WalletResult<ExpenseReceipt> {
        let amount = parse_amount(amount_input).inspect_err(|e| {
            warn!(user = username, error = %e, "Expense rejected");
        })?;

        let account = self.store.require_mut(username)?;
        if account.balance < amount {
            let err = WalletError::InsufficientFunds {
                needed: amount,
                available: account.balance,
            };
            warn!(user = username, error = %err, "Expense rejected");
            return Err(err);
        }

        account.apply_expense(Local::now(), amount, category);
        info!(user = username, amount = %amount, %category, "Expense recorded");

        let limit_warning = match account.monthly_limit {
            Some(limit) if account.is_over_limit() => {
                let total_expenses = account.total_expenses();
                warn!(user = username, limit = %limit, total = %total_expenses, "Spending limit exceeded");
                Some(LimitWarning {
                    limit,
                    total_expenses,
                })
            }
            _ => None,
        };

        Ok(ExpenseReceipt {
            amount,
            category,
            limit_warning,
        })
    }

    /// Set the monthly spending limit; zero clears it
    pub fn set_monthly_limit(
        &mut self,
        username: &str,
        limit_input: &str,
    ) -> WalletResult<Option<Money>> {
        let limit = parse_limit(limit_input).inspect_err(|e| {
            warn!(user = username, error = %e, "Limit rejected");
        })?;

        let account = self.store.require_mut(username)?;
        account.monthly_limit = if limit.is_zero() { None } else { Some(limit) };
        info!(user = username, limit = %limit, "Monthly limit set");
        Ok(account.monthly_limit)
    }
}
