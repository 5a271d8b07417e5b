// File: ./src/model/budget.rs
//! Budget vs. actual ledger shown on the budget screen.
use crate::config::Language;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum BudgetKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub title: String,
    pub kind: BudgetKind,
    /// Whole yen.
    pub budget: u64,
    pub actual: u64,
}

impl BudgetLine {
    pub fn expense(title: &str, budget: u64, actual: u64) -> Self {
        Self {
            title: title.to_string(),
            kind: BudgetKind::Expense,
            budget,
            actual,
        }
    }

    pub fn income(title: &str, budget: u64, actual: u64) -> Self {
        Self {
            title: title.to_string(),
            kind: BudgetKind::Income,
            budget,
            actual,
        }
    }

    /// Signed difference in the line's favour.
    ///
    /// Expenses: positive when under budget. Income: `None` until the target
    /// has been collected.
    pub fn variance(&self) -> Option<i64> {
        match self.kind {
            BudgetKind::Expense => Some(signed_diff(self.budget, self.actual)),
            BudgetKind::Income if self.actual < self.budget => None,
            BudgetKind::Income => Some(signed_diff(self.actual, self.budget)),
        }
    }
}

fn signed_diff(a: u64, b: u64) -> i64 {
    (a as i128 - b as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub budget: u64,
    pub actual: u64,
    pub variance: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetLedger {
    pub lines: Vec<BudgetLine>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The figures the prototype's budget screen ships with, titled in `lang`.
    pub fn sample(lang: Language) -> Self {
        let locale = lang.locale();
        Self {
            lines: vec![
                BudgetLine::expense(&t!("budget_line_venue", locale = locale), 750_000, 800_000),
                BudgetLine::expense(
                    &t!("budget_line_advertising", locale = locale),
                    500_000,
                    450_000,
                ),
                BudgetLine::expense(&t!("budget_line_supplies", locale = locale), 400_000, 350_000),
                BudgetLine::expense(&t!("budget_line_guests", locale = locale), 600_000, 250_000),
                BudgetLine::income(
                    &t!("budget_line_tickets", locale = locale),
                    3_000_000,
                    1_200_000,
                ),
            ],
        }
    }

    pub fn push(&mut self, line: BudgetLine) {
        self.lines.push(line);
    }

    pub fn expense_totals(&self) -> BudgetTotals {
        self.totals_for(BudgetKind::Expense)
    }

    pub fn income_totals(&self) -> BudgetTotals {
        self.totals_for(BudgetKind::Income)
    }

    fn totals_for(&self, kind: BudgetKind) -> BudgetTotals {
        let (budget, actual) = self
            .lines
            .iter()
            .filter(|l| l.kind == kind)
            .fold((0u64, 0u64), |(b, a), l| {
                (b.saturating_add(l.budget), a.saturating_add(l.actual))
            });

        let variance = match kind {
            BudgetKind::Expense => signed_diff(budget, actual),
            BudgetKind::Income => signed_diff(actual, budget),
        };
        BudgetTotals {
            budget,
            actual,
            variance,
        }
    }
}

/// `¥1,234,567`
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('¥');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `+¥50,000` / `-¥50,000`. Zero is shown with a plus sign.
pub fn format_signed_yen(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    format!("{}{}", sign, format_yen(amount.unsigned_abs()))
}
