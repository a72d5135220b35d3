//! Application state for the TUI
//!
//! The App struct holds the nine input fields and the results of the most
//! recent compute pass. Every edit reruns the full pass; results never
//! accumulate across passes.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::models::{BudgetInputs, LoanInputs, LoanResult};
use crate::services::{estimate_loan, evaluate_budget, format_report, BudgetEvaluation};

use super::widgets::TextInput;

/// The input fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Income,
    Rent,
    Utilities,
    OtherExpenses,
    LoanAmount,
    InterestRate,
    TimePeriod,
    AmountPaid,
    StartDate,
}

impl InputField {
    /// All fields in focus order
    pub const ALL: [InputField; 9] = [
        InputField::Income,
        InputField::Rent,
        InputField::Utilities,
        InputField::OtherExpenses,
        InputField::LoanAmount,
        InputField::InterestRate,
        InputField::TimePeriod,
        InputField::AmountPaid,
        InputField::StartDate,
    ];

    /// Display label for the field
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::OtherExpenses => "Other Expenses",
            Self::LoanAmount => "Loan Amount",
            Self::InterestRate => "Interest Rate %",
            Self::TimePeriod => "Term (months)",
            Self::AmountPaid => "Amount Paid",
            Self::StartDate => "Loan Start Date",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::StartDate => "YYYY-MM-DD",
            _ => "0",
        }
    }
}

/// Width the field labels are padded to, so values line up in a column
const LABEL_WIDTH: usize = 17;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// The input fields, indexed in `InputField::ALL` order
    pub fields: Vec<TextInput>,

    /// Index of the focused field
    pub focus: usize,

    /// Date the last compute pass ran against
    pub as_of: NaiveDate,

    /// Budget inputs from the last compute pass
    pub inputs: BudgetInputs,

    /// Loan estimate from the last compute pass
    pub loan: LoanResult,

    /// Budget evaluation from the last compute pass
    pub evaluation: BudgetEvaluation,

    /// Narrative analysis, generated on demand and cleared by any edit
    pub report: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app with empty fields and an initial compute pass
    pub fn new(settings: &'a Settings) -> Self {
        let fields = InputField::ALL
            .iter()
            .map(|field| {
                TextInput::new()
                    .label(format!("{:<width$}", field.label(), width = LABEL_WIDTH))
                    .placeholder(field.placeholder())
            })
            .collect();

        let inputs = BudgetInputs::default();
        let mut app = Self {
            settings,
            should_quit: false,
            fields,
            focus: 0,
            as_of: Local::now().date_naive(),
            inputs,
            loan: LoanResult::insufficient_data(),
            evaluation: evaluate_budget(&inputs, settings.savings_target_percent),
            report: None,
        };
        app.recompute();
        app
    }

    /// The raw text of a field
    pub fn value(&self, field: InputField) -> &str {
        self.fields[field as usize].value()
    }

    /// The currently focused field
    pub fn focused_input(&mut self) -> &mut TextInput {
        &mut self.fields[self.focus]
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Run one full compute pass from the current field contents.
    ///
    /// The loan estimate feeds the budget evaluation as structured data,
    /// and any displayed analysis is cleared — it no longer reflects the
    /// figures on screen.
    pub fn recompute(&mut self) {
        self.as_of = Local::now().date_naive();

        let loan_inputs = LoanInputs::from_raw(
            self.value(InputField::LoanAmount),
            self.value(InputField::InterestRate),
            self.value(InputField::TimePeriod),
            self.value(InputField::AmountPaid),
            Some(self.value(InputField::StartDate)),
            &self.settings.date_format,
        );
        self.loan = estimate_loan(&loan_inputs, self.as_of);

        self.inputs = BudgetInputs::from_raw(
            self.value(InputField::Income),
            self.value(InputField::Rent),
            self.value(InputField::Utilities),
            self.value(InputField::OtherExpenses),
            self.loan.installment_or_zero(),
        );
        self.evaluation = evaluate_budget(&self.inputs, self.settings.savings_target_percent);

        self.report = None;
    }

    /// Toggle the analysis panel, generating the narrative from the
    /// current evaluation when turning it on
    pub fn toggle_report(&mut self) {
        if self.report.is_some() {
            self.report = None;
            return;
        }

        let savings_display = self
            .evaluation
            .result
            .savings
            .with_symbol(&self.settings.currency_symbol);
        self.report = Some(format_report(
            self.inputs.income,
            self.evaluation.result.health,
            &savings_display,
            self.settings.savings_target_percent,
            &self.settings.currency_symbol,
        ));
    }

    /// Request shutdown
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthTier;

    fn type_into(app: &mut App, field: InputField, text: &str) {
        app.focus = field as usize;
        for c in text.chars() {
            app.focused_input().insert(c);
        }
        app.recompute();
    }

    #[test]
    fn test_initial_state_is_no_data() {
        let settings = Settings::default();
        let app = App::new(&settings);

        assert_eq!(app.evaluation.result.health, HealthTier::NoData);
        assert!(!app.loan.is_estimated());
        assert!(app.report.is_none());
    }

    #[test]
    fn test_edit_recomputes_evaluation() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        type_into(&mut app, InputField::Income, "50000");
        assert_eq!(app.evaluation.result.health, HealthTier::Strong);
        assert_eq!(app.inputs.income.cents(), 5_000_000);
    }

    #[test]
    fn test_recompute_clears_stale_report() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        type_into(&mut app, InputField::Income, "50000");
        app.toggle_report();
        assert!(app.report.is_some());

        // Any further edit invalidates the displayed analysis
        type_into(&mut app, InputField::Rent, "49000");
        assert!(app.report.is_none());
    }

    #[test]
    fn test_toggle_report_hides_visible_report() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.toggle_report();
        assert!(app.report.is_some());
        app.toggle_report();
        assert!(app.report.is_none());
    }

    #[test]
    fn test_report_without_income_is_the_prompt() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.toggle_report();
        assert_eq!(
            app.report.as_deref(),
            Some(crate::services::report::NO_INCOME_PROMPT)
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.focus_prev();
        assert_eq!(app.focus, InputField::ALL.len() - 1);
        app.focus_next();
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn test_installment_feeds_budget_as_data() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

        type_into(&mut app, InputField::Income, "50000");
        type_into(&mut app, InputField::LoanAmount, "120000");
        type_into(&mut app, InputField::InterestRate, "12");
        type_into(&mut app, InputField::TimePeriod, "24");
        type_into(&mut app, InputField::AmountPaid, "20000");
        type_into(&mut app, InputField::StartDate, &today);

        assert_eq!(
            app.loan.monthly_installment,
            Some(crate::models::Money::from_cents(536_667))
        );
        assert_eq!(app.inputs.monthly_installment.cents(), 536_667);
    }
}
