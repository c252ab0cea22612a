//! Application state for the TUI
//!
//! The App struct owns the account store for the session and holds all
//! state needed for rendering and handling events. Actions go through the
//! service layer; their outcomes are queued as modal dialogs.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::Settings;
use crate::crypto::SecretPin;
use crate::display::outcome::{
    deposit_message, expense_message, limit_message, limit_warning_message, login_message,
    payment_message,
};
use crate::error::{WalletError, WalletResult};
use crate::models::Account;
use crate::services::{AuthService, WalletService};
use crate::storage::AccountStore;

use super::views::banking::{BankingAction, BankingFormState};
use super::views::login::LoginFormState;
use super::widgets::{ErrorInfo, Message};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Banking,
    Transactions,
    Summary,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Banking, Self::Transactions, Self::Summary];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Banking => "Banking",
            Self::Transactions => "Transactions",
            Self::Summary => "Summary & Analysis",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Banking => 0,
            Self::Transactions => 1,
            Self::Summary => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Sub-views of the Summary & Analysis tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryView {
    #[default]
    ExpensePie,
    BalanceHistory,
    Overview,
}

impl SummaryView {
    pub const ALL: [SummaryView; 3] = [Self::ExpensePie, Self::BalanceHistory, Self::Overview];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ExpensePie => "Expenses Pie Chart",
            Self::BalanceHistory => "Balance History",
            Self::Overview => "Overview",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::ExpensePie => 0,
            Self::BalanceHistory => 1,
            Self::Overview => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A modal dialog waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveDialog {
    Help,
    Message(Message),
    Error(ErrorInfo),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// All accounts for this session
    pub store: AccountStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown screen
    pub screen: Screen,

    /// Signed-in username
    pub current_user: Option<String>,

    /// Active dashboard tab
    pub active_tab: DashboardTab,

    /// Active summary sub-view
    pub summary_view: SummaryView,

    /// Login form state
    pub login_form: LoginFormState,

    /// Banking forms state
    pub banking_form: BankingFormState,

    /// Scroll offset for the transaction history
    pub history_scroll: usize,

    /// Dialogs in display order; the front one is shown
    pub dialogs: VecDeque<ActiveDialog>,

    /// Show technical details in error dialogs
    pub show_error_details: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty store
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            store: AccountStore::new(),
            should_quit: false,
            screen: Screen::default(),
            current_user: None,
            active_tab: DashboardTab::default(),
            summary_view: SummaryView::default(),
            login_form: LoginFormState::new(),
            banking_form: BankingFormState::new(),
            history_scroll: 0,
            dialogs: VecDeque::new(),
            show_error_details: false,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The signed-in account, if any
    pub fn current_account(&self) -> Option<&Account> {
        self.current_user
            .as_deref()
            .and_then(|user| self.store.get(user))
    }

    /// Queue a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.dialogs.push_back(dialog);
    }

    /// Queue an error dialog for a failed action
    pub fn show_error(&mut self, error: &WalletError) {
        self.show_error_details = false;
        self.open_dialog(ActiveDialog::Error(ErrorInfo::from_error(error)));
    }

    /// Queue a message dialog
    pub fn show_message(&mut self, message: Message) {
        self.open_dialog(ActiveDialog::Message(message));
    }

    /// The dialog currently shown
    pub fn active_dialog(&self) -> Option<&ActiveDialog> {
        self.dialogs.front()
    }

    /// Dismiss the dialog currently shown
    pub fn close_dialog(&mut self) {
        self.dialogs.pop_front();
        self.show_error_details = false;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    /// Switch to a different dashboard tab
    pub fn switch_tab(&mut self, tab: DashboardTab) {
        debug!(tab = tab.title(), "Switching tab");
        self.active_tab = tab;
        self.history_scroll = 0;
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.active_tab.prev());
    }

    pub fn next_summary_view(&mut self) {
        self.summary_view = self.summary_view.next();
    }

    pub fn prev_summary_view(&mut self) {
        self.summary_view = self.summary_view.prev();
    }

    /// Scroll the history up by `lines`
    pub fn scroll_up(&mut self, lines: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(lines);
    }

    /// Scroll the history down by `lines`, stopping at the last entry
    pub fn scroll_down(&mut self, lines: usize) {
        let max = self
            .current_account()
            .map(|a| a.transactions.len().saturating_sub(1))
            .unwrap_or(0);
        self.history_scroll = (self.history_scroll + lines).min(max);
    }

    /// Submit the login form
    pub fn submit_login(&mut self) {
        let username = self.login_form.username.value().to_string();
        let pin = SecretPin::from(self.login_form.pin.take());

        let result = AuthService::new(&mut self.store, self.settings).login(&username, &pin);
        match result {
            Ok(outcome) => {
                let message = login_message(&outcome);
                self.current_user = Some(outcome.username);
                self.screen = Screen::Dashboard;
                self.active_tab = DashboardTab::default();
                self.summary_view = SummaryView::default();
                self.history_scroll = 0;
                self.login_form.reset();
                self.banking_form.reset();
                self.set_status(message.clone());
                if outcome.registered {
                    self.show_message(Message::info("Account Created", message));
                }
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Return to the login screen
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user = %user, "Signed out");
            self.set_status(format!("Signed out {}.", user));
        }
        self.screen = Screen::Login;
        self.login_form.reset();
        self.banking_form.reset();
        self.dialogs.clear();
    }

    /// Submit the banking form section that holds the focus
    pub fn submit_banking(&mut self) {
        let action = self.banking_form.focused_field.action();
        if let Err(e) = self.apply_banking(action) {
            self.show_error(&e);
        }
    }

    fn apply_banking(&mut self, action: BankingAction) -> WalletResult<()> {
        let user = self.current_user.clone().ok_or(WalletError::NotSignedIn)?;
        let settings = self.settings;
        let symbol = settings.currency_symbol.as_str();
        let form = &mut self.banking_form;
        let mut wallet = WalletService::new(&mut self.store);

        let mut dialogs = Vec::new();
        let status = match action {
            BankingAction::AddFunds => {
                let receipt = wallet.add_funds(&user, form.funds_amount.value())?;
                form.funds_amount.clear();
                let message = deposit_message(&receipt, symbol);
                dialogs.push(Message::success("Success", message.clone()));
                message
            }
            BankingAction::SendPayment => {
                let receipt = wallet.send_payment(
                    &user,
                    form.recipient.value(),
                    form.send_amount.value(),
                )?;
                form.recipient.clear();
                form.send_amount.clear();
                let message = payment_message(&receipt, symbol);
                dialogs.push(Message::success("Payment Sent", message.clone()));
                message
            }
            BankingAction::AddExpense => {
                let receipt =
                    wallet.record_expense(&user, form.expense_amount.value(), form.category)?;
                form.expense_amount.clear();
                let message = expense_message(&receipt, symbol);
                dialogs.push(Message::success("Success", message.clone()));
                if let Some(warning) = &receipt.limit_warning {
                    dialogs.push(Message::warning(
                        "Limit Exceeded",
                        limit_warning_message(warning, symbol),
                    ));
                }
                message
            }
            BankingAction::SetLimit => {
                let limit = wallet.set_monthly_limit(&user, form.limit_amount.value())?;
                form.limit_amount.clear();
                let message = limit_message(limit, symbol);
                dialogs.push(Message::success("Monthly Limit", message.clone()));
                message
            }
        };

        self.set_status(status);
        for message in dialogs {
            self.show_message(message);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PinHashParams;
    use crate::models::{ExpenseCategory, Money};
    use crate::tui::views::banking::BankingField;
    use crate::tui::widgets::MessageKind;

    fn settings() -> Settings {
        Settings {
            pin_hashing: PinHashParams::minimal(),
            ..Settings::default()
        }
    }

    fn login(app: &mut App, user: &str, pin: &str) {
        app.login_form.username = app.login_form.username.clone().content(user);
        app.login_form.pin = app.login_form.pin.clone().content(pin);
        app.submit_login();
    }

    #[test]
    fn test_login_registers_and_opens_dashboard() {
        let settings = settings();
        let mut app = App::new(&settings);

        login(&mut app, "alice", "1234");

        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.current_user.as_deref(), Some("alice"));
        assert!(matches!(
            app.active_dialog(),
            Some(ActiveDialog::Message(m)) if m.kind == MessageKind::Info
        ));
        assert!(app.login_form.pin.is_empty());
    }

    #[test]
    fn test_login_failure_shows_error() {
        let settings = settings();
        let mut app = App::new(&settings);
        login(&mut app, "alice", "1234");
        app.logout();

        login(&mut app, "alice", "0000");

        assert_eq!(app.screen, Screen::Login);
        assert!(matches!(
            app.active_dialog(),
            Some(ActiveDialog::Error(info)) if info.details == "Incorrect PIN."
        ));
    }

    #[test]
    fn test_logout_returns_to_login() {
        let settings = settings();
        let mut app = App::new(&settings);
        login(&mut app, "alice", "1234");

        app.logout();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.current_user.is_none());
        assert!(!app.has_dialog());
        // account survives for the rest of the session
        assert!(app.store.contains("alice"));
    }

    #[test]
    fn test_add_funds_from_form() {
        let settings = settings();
        let mut app = App::new(&settings);
        login(&mut app, "alice", "1234");
        app.close_dialog();

        app.banking_form.set_focus(BankingField::FundsAmount);
        app.banking_form.funds_amount = app.banking_form.funds_amount.clone().content("100");
        app.submit_banking();

        assert_eq!(app.current_account().unwrap().balance, Money::from_dollars(100));
        assert!(app.banking_form.funds_amount.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("$100.00 added to your wallet.")
        );
    }

    #[test]
    fn test_expense_over_limit_queues_warning() {
        let settings = settings();
        let mut app = App::new(&settings);
        login(&mut app, "alice", "1234");
        app.close_dialog();

        app.banking_form.set_focus(BankingField::FundsAmount);
        app.banking_form.funds_amount = app.banking_form.funds_amount.clone().content("100");
        app.submit_banking();

        app.banking_form.set_focus(BankingField::LimitAmount);
        app.banking_form.limit_amount = app.banking_form.limit_amount.clone().content("10");
        app.submit_banking();

        app.banking_form.set_focus(BankingField::ExpenseAmount);
        app.banking_form.category = ExpenseCategory::Rent;
        app.banking_form.expense_amount = app.banking_form.expense_amount.clone().content("12");
        app.submit_banking();

        assert!(matches!(
            app.dialogs.back(),
            Some(ActiveDialog::Message(m)) if m.kind == MessageKind::Warning
        ));
        assert_eq!(app.current_account().unwrap().balance, Money::from_dollars(88));
    }

    #[test]
    fn test_failed_payment_keeps_input() {
        let settings = settings();
        let mut app = App::new(&settings);
        login(&mut app, "alice", "1234");
        app.close_dialog();

        app.banking_form.set_focus(BankingField::Recipient);
        app.banking_form.recipient = app.banking_form.recipient.clone().content("nobody");
        app.banking_form.send_amount = app.banking_form.send_amount.clone().content("5");
        app.submit_banking();

        assert!(matches!(
            app.active_dialog(),
            Some(ActiveDialog::Error(info)) if info.title == "Recipient Not Found"
        ));
        assert_eq!(app.banking_form.recipient.value(), "nobody");
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(DashboardTab::Banking.next(), DashboardTab::Transactions);
        assert_eq!(DashboardTab::Banking.prev(), DashboardTab::Summary);
        assert_eq!(SummaryView::Overview.next(), SummaryView::ExpensePie);
    }
}
