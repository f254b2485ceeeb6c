//! Expense display formatting

use crate::calc::{normalize, Rate};
use crate::models::{money::format_yen_f64, Expense, Frequency, UserSettings};

/// Format an expense list as a table
///
/// The rate column shows each expense converted to the chosen display rate,
/// so a yearly bill and a daily coffee stay comparable side by side.
pub fn format_expense_list(expenses: &[Expense], settings: &UserSettings, rate: Rate) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n\nAdd one with 'kakeibo expense add'.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<12} {:<10} {:<10} {:>12} {:>16}\n",
        "ID", "Date", "Category", "Type", "Amount", "Normalized"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        let policy = settings.policy_for(expense.category);
        let normalized = normalize(expense, &policy, settings.age);
        let converted = format!("{}{}", format_yen_f64(normalized.at(rate)), rate.suffix());

        output.push_str(&format!(
            "{:<14} {:<12} {:<10} {:<10} {:>12} {:>16}\n",
            expense.id.to_string(),
            expense.date.to_string(),
            expense.category.label(),
            expense.kind.label(),
            expense.amount.to_string(),
            converted
        ));
    }

    output
}

/// Format one expense with full details and all three normalized figures
pub fn format_expense_details(expense: &Expense, settings: &UserSettings) -> String {
    let policy = settings.policy_for(expense.category);
    let normalized = normalize(expense, &policy, settings.age);

    let frequency = match policy.frequency {
        Frequency::Irregular if policy.annual_count > 0 => {
            format!("{} ({}回/年)", policy.frequency.label(), policy.annual_count)
        }
        _ => policy.frequency.label().to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Date:      {}\n", expense.date));
    output.push_str(&format!(
        "  Category:  {} ({})\n",
        expense.category.label(),
        frequency
    ));
    output.push_str(&format!("  Type:      {}\n", expense.kind.label()));
    output.push_str(&format!("  Amount:    {}\n", expense.amount));
    if let Some(memo) = &expense.memo {
        output.push_str(&format!("  Memo:      {}\n", memo));
    }
    output.push('\n');
    output.push_str(&format!(
        "  Daily:     {}\n  Monthly:   {}\n  Yearly:    {}\n",
        format_yen_f64(normalized.daily),
        format_yen_f64(normalized.monthly),
        format_yen_f64(normalized.yearly)
    ));

    output
}
