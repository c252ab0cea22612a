//! Replay command
//!
//! Runs a CSV script of wallet actions against a fresh in-memory store and
//! reports each row's outcome plus the final accounts. Rows act on whoever
//! is signed in; a failing row is logged and reported, and processing
//! continues with the next one.
//!
//! Columns: `action,username,pin,recipient,amount,category`

use std::fmt;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use zeroize::Zeroize;

use crate::config::Settings;
use crate::crypto::SecretPin;
use crate::display::format_account_table;
use crate::display::outcome::{
    deposit_message, expense_message, limit_message, limit_warning_message, login_message,
    payment_message,
};
use crate::error::{WalletError, WalletResult};
use crate::models::ExpenseCategory;
use crate::services::{AuthService, WalletService};
use crate::storage::AccountStore;

/// A scripted action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayAction {
    Login,
    Logout,
    Deposit,
    Send,
    Expense,
    Limit,
}

impl fmt::Display for ReplayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Deposit => "deposit",
            Self::Send => "send",
            Self::Expense => "expense",
            Self::Limit => "limit",
        };
        f.write_str(name)
    }
}

/// One CSV row; unused columns may be empty
#[derive(Deserialize)]
struct ReplayRow {
    action: ReplayAction,
    #[serde(default)]
    username: String,
    #[serde(default)]
    pin: String,
    #[serde(default)]
    recipient: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    category: String,
}

/// An in-memory wallet session driven by script rows
pub struct ReplaySession<'a> {
    store: AccountStore,
    current_user: Option<String>,
    settings: &'a Settings,
}

impl<'a> ReplaySession<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            store: AccountStore::new(),
            current_user: None,
            settings,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    fn signed_in(&self) -> WalletResult<String> {
        self.current_user.clone().ok_or(WalletError::NotSignedIn)
    }

    fn apply(&mut self, row: &ReplayRow) -> WalletResult<String> {
        let settings = self.settings;
        let symbol = settings.currency_symbol.as_str();

        match row.action {
            ReplayAction::Login => {
                let pin = SecretPin::from(row.pin.as_str());
                let outcome = AuthService::new(&mut self.store, settings).login(&row.username, &pin)?;
                let message = login_message(&outcome);
                self.current_user = Some(outcome.username);
                Ok(message)
            }
            ReplayAction::Logout => {
                let user = self.current_user.take().ok_or(WalletError::NotSignedIn)?;
                info!(user = %user, "Signed out");
                Ok(format!("Signed out {}.", user))
            }
            ReplayAction::Deposit => {
                let user = self.signed_in()?;
                let receipt = WalletService::new(&mut self.store).add_funds(&user, &row.amount)?;
                Ok(deposit_message(&receipt, symbol))
            }
            ReplayAction::Send => {
                let user = self.signed_in()?;
                let receipt =
                    WalletService::new(&mut self.store).send_payment(&user, &row.recipient, &row.amount)?;
                Ok(payment_message(&receipt, symbol))
            }
            ReplayAction::Expense => {
                let user = self.signed_in()?;
                let category = ExpenseCategory::parse(&row.category).ok_or_else(|| {
                    WalletError::invalid(format!(
                        "Unknown category '{}'. Valid categories: Food, Rent, Transport, Personal",
                        row.category
                    ))
                })?;
                let receipt =
                    WalletService::new(&mut self.store).record_expense(&user, &row.amount, category)?;
                let mut message = expense_message(&receipt, symbol);
                if let Some(warning) = &receipt.limit_warning {
                    message.push(' ');
                    message.push_str(&limit_warning_message(warning, symbol));
                }
                Ok(message)
            }
            ReplayAction::Limit => {
                let user = self.signed_in()?;
                let limit = WalletService::new(&mut self.store).set_monthly_limit(&user, &row.amount)?;
                Ok(limit_message(limit, symbol))
            }
        }
    }
}

/// Outcome of one script row
#[derive(Debug)]
pub struct RowOutcome {
    /// Line in the CSV file, counting the header as line 1
    pub line: usize,
    /// `None` when the row could not be parsed
    pub action: Option<ReplayAction>,
    pub result: Result<String, WalletError>,
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = self
            .action
            .map(|a| a.to_string())
            .unwrap_or_else(|| "?".to_string());
        match &self.result {
            Ok(message) => write!(f, "line {} {}: {}", self.line, action, message),
            Err(err) => write!(f, "line {} {}: error: {}", self.line, action, err),
        }
    }
}

/// Everything a replay produced
pub struct ReplayReport<'a> {
    pub outcomes: Vec<RowOutcome>,
    pub session: ReplaySession<'a>,
}

impl ReplayReport<'_> {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Row outcomes and accounts as one JSON document
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<_> = self
            .outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(message) => json!({ "line": o.line, "action": o.action, "ok": true, "message": message }),
                Err(err) => json!({ "line": o.line, "action": o.action, "ok": false, "error": err.to_string() }),
            })
            .collect();

        json!({
            "rows": rows,
            "accounts": self.session.store().accounts(),
        })
    }
}

/// Run a script read from `input`
pub fn run_replay<'a, R: Read>(input: R, settings: &'a Settings) -> WalletResult<ReplayReport<'a>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let mut session = ReplaySession::new(settings);
    let mut outcomes = Vec::new();

    for (index, record) in reader.deserialize::<ReplayRow>().enumerate() {
        let line = index + 2;

        let mut row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "Skipping malformed row");
                outcomes.push(RowOutcome {
                    line,
                    action: None,
                    result: Err(WalletError::Replay(e.to_string())),
                });
                continue;
            }
        };

        debug!(line, action = %row.action, "Applying row");
        let result = session.apply(&row);
        row.pin.zeroize();

        if let Err(e) = &result {
            warn!(line, action = %row.action, error = %e, "Row failed");
        }
        outcomes.push(RowOutcome {
            line,
            action: Some(row.action),
            result,
        });
    }

    info!(
        rows = outcomes.len(),
        accounts = session.store().len(),
        "Replay finished"
    );
    Ok(ReplayReport { outcomes, session })
}

/// Handle `sonova replay`
pub fn handle_replay_command(path: &Path, json: bool, settings: &Settings) -> WalletResult<()> {
    let file = std::fs::File::open(path)
        .map_err(|e| WalletError::Replay(format!("Cannot open {}: {}", path.display(), e)))?;
    let report = run_replay(file, settings)?;

    if json {
        let output = serde_json::to_string_pretty(&report.to_json())?;
        println!("{}", output);
        return Ok(());
    }

    for outcome in &report.outcomes {
        println!("{}", outcome);
    }
    println!();
    println!(
        "{}",
        format_account_table(&report.session.store().accounts(), &settings.currency_symbol)
    );
    if report.failures() > 0 {
        println!("{} of {} rows failed.", report.failures(), report.outcomes.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PinHashParams;
    use crate::models::Money;

    const SCENARIO: &str = "\
action,username,pin,recipient,amount,category
login,alice,1234,,,
deposit,,,,100,
logout,,,,,
login,bob,0000,,,
logout,,,,,
login,alice,1234,,,
send,,,bob,40,
expense,,,,15,Food
send,,,bob,1000,
";

    fn settings() -> Settings {
        Settings {
            pin_hashing: PinHashParams::minimal(),
            ..Settings::default()
        }
    }

    fn balance(report: &ReplayReport<'_>, user: &str) -> Money {
        report.session.store().get(user).unwrap().balance
    }

    #[test]
    fn test_scenario() {
        let settings = settings();
        let report = run_replay(SCENARIO.as_bytes(), &settings).unwrap();

        assert_eq!(report.outcomes.len(), 9);
        assert_eq!(report.failures(), 1);
        assert_eq!(balance(&report, "alice"), Money::from_cents(4500));
        assert_eq!(balance(&report, "bob"), Money::from_cents(4000));

        let last = report.outcomes.last().unwrap();
        assert_eq!(last.line, 10);
        assert!(matches!(
            last.result,
            Err(WalletError::InsufficientFunds { .. })
        ));
        assert_eq!(report.session.current_user(), Some("alice"));
    }

    #[test]
    fn test_action_without_login() {
        let settings = settings();
        let script = "action,username,pin,recipient,amount,category\ndeposit,,,,10,\n";
        let report = run_replay(script.as_bytes(), &settings).unwrap();

        assert!(matches!(
            report.outcomes[0].result,
            Err(WalletError::NotSignedIn)
        ));
        assert!(report.session.store().is_empty());
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let settings = settings();
        let script = "\
action,username,pin,recipient,amount,category
withdraw,,,,10,
login,carol,1111,,,
deposit,,,,abc,
deposit,,,,5,
";
        let report = run_replay(script.as_bytes(), &settings).unwrap();

        assert_eq!(report.outcomes.len(), 4);
        assert!(report.outcomes[0].action.is_none());
        assert!(matches!(report.outcomes[0].result, Err(WalletError::Replay(_))));
        assert!(matches!(
            report.outcomes[2].result,
            Err(WalletError::InvalidInput(_))
        ));
        assert_eq!(balance(&report, "carol"), Money::from_dollars(5));
    }

    #[test]
    fn test_deposit_message_uses_rounded_amount() {
        let settings = settings();
        let script = "\
action,username,pin,recipient,amount,category
login,erin,2222,,,
deposit,,,,12.345,
";
        let report = run_replay(script.as_bytes(), &settings).unwrap();

        assert_eq!(
            report.outcomes[1].result.as_deref().unwrap(),
            "$12.35 added to your wallet."
        );
        assert_eq!(balance(&report, "erin"), Money::from_cents(1235));
    }

    #[test]
    fn test_unknown_category() {
        let settings = settings();
        let script = "\
action,username,pin,recipient,amount,category
login,dave,1,,,
deposit,,,,50,
expense,,,,5,Groceries
expense,,,,5,transport
";
        let report = run_replay(script.as_bytes(), &settings).unwrap();
        assert!(matches!(
            report.outcomes[2].result,
            Err(WalletError::InvalidInput(_))
        ));
        assert!(report.outcomes[3].result.is_ok());
        assert_eq!(balance(&report, "dave"), Money::from_dollars(45));
    }

    #[test]
    fn test_limit_warning_in_message() {
        let settings = settings();
        let script = "\
action,username,pin,recipient,amount,category
login,erin,1,,,
deposit,,,,100,
limit,,,,10,
expense,,,,12,Rent
";
        let report = run_replay(script.as_bytes(), &settings).unwrap();
        let message = report.outcomes[3].result.as_ref().unwrap();
        assert!(message.contains("exceeded your spending limit"));
    }

    #[test]
    fn test_json_report() {
        let settings = settings();
        let report = run_replay(SCENARIO.as_bytes(), &settings).unwrap();
        let value = report.to_json();

        assert_eq!(value["rows"].as_array().unwrap().len(), 9);
        assert_eq!(value["rows"][8]["ok"], false);
        assert_eq!(value["accounts"][0]["username"], "alice");
        assert_eq!(value["accounts"][0]["balance"], 4500);
        assert!(value["accounts"][0].get("pin").is_none());
    }
}
