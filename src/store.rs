use crate::models::{BudgetCategory, BudgetData, Field, Kind, PeriodData, PeriodSummary};
use chrono::Utc;

/// Fixed category templates every new period starts from. Default categories
/// keep positional ids (`income-0`, `expense-3`, ...) that repeat across
/// periods; only user-added categories get globally unique ids.
pub const DEFAULT_INCOME_CATEGORIES: [&str; 4] = ["Paycheck", "Bonus", "Interest", "Other"];

pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 11] = [
    "Food",
    "Gifts",
    "Health/Medical",
    "Home",
    "Transportation",
    "Personal",
    "Pets",
    "Utilities",
    "Travel",
    "Debt",
    "Other",
];

const INCOME_CUSTOM_SLOTS: u32 = 1;
const EXPENSE_CUSTOM_SLOTS: u32 = 3;

fn zeroed(id: String, name: String, is_custom: bool) -> BudgetCategory {
    BudgetCategory {
        id,
        name,
        planned: 0.0,
        actual: 0.0,
        is_custom,
    }
}

fn seed_list(kind: Kind, defaults: &[&str], custom_slots: u32) -> Vec<BudgetCategory> {
    let prefix = kind.as_str();
    defaults
        .iter()
        .enumerate()
        .map(|(index, name)| zeroed(format!("{prefix}-{index}"), name.to_string(), false))
        .chain((1..=custom_slots).map(|slot| {
            zeroed(format!("{prefix}-custom-{slot}"), format!("Custom {slot}"), true)
        }))
        .collect()
}

/// A fresh period: the default categories followed by empty custom slots,
/// everything zeroed.
pub fn seed_period() -> PeriodData {
    PeriodData {
        income: seed_list(Kind::Income, &DEFAULT_INCOME_CATEGORIES, INCOME_CUSTOM_SLOTS),
        expenses: seed_list(Kind::Expense, &DEFAULT_EXPENSE_CATEGORIES, EXPENSE_CUSTOM_SLOTS),
    }
}

/// Materializes `period` from the templates if it is not already present.
/// Idempotent: a known period comes back unchanged.
pub fn ensure_period(data: &BudgetData, period: &str) -> BudgetData {
    if data.periods.contains_key(period) {
        return data.clone();
    }
    let mut next = data.clone();
    next.periods.insert(period.to_string(), seed_period());
    next
}

/// Sets one numeric field on the category with `category_id`, wherever it
/// lives. Unknown period or id is a silent no-op. The value is stored as
/// given; callers coerce malformed input before calling.
pub fn update_field(
    data: &BudgetData,
    period: &str,
    category_id: &str,
    field: Field,
    value: f64,
) -> BudgetData {
    let Some(period_data) = data.periods.get(period) else {
        return data.clone();
    };

    let apply = |categories: &[BudgetCategory]| -> Vec<BudgetCategory> {
        categories
            .iter()
            .map(|category| {
                if category.id != category_id {
                    return category.clone();
                }
                let mut updated = category.clone();
                match field {
                    Field::Planned => updated.planned = value,
                    Field::Actual => updated.actual = value,
                }
                updated
            })
            .collect()
    };

    let mut next = data.clone();
    next.periods.insert(
        period.to_string(),
        PeriodData {
            income: apply(&period_data.income),
            expenses: apply(&period_data.expenses),
        },
    );
    next
}

/// Appends a user-defined category to the end of the named list. The id
/// embeds the creation time in milliseconds so user-added ids stay unique
/// across periods. Unknown period is a silent no-op.
pub fn add_custom_category(data: &BudgetData, period: &str, kind: Kind, name: &str) -> BudgetData {
    let Some(period_data) = data.periods.get(period) else {
        return data.clone();
    };

    let category = BudgetCategory {
        id: format!("{}-custom-{}", kind.as_str(), Utc::now().timestamp_millis()),
        name: name.to_string(),
        planned: 0.0,
        actual: 0.0,
        is_custom: true,
    };

    let mut updated = period_data.clone();
    match kind {
        Kind::Income => updated.income.push(category),
        Kind::Expense => updated.expenses.push(category),
    }

    let mut next = data.clone();
    next.periods.insert(period.to_string(), updated);
    next
}

/// Drops the category with `category_id` from whichever list holds it.
/// Unknown period or id is a silent no-op. The store does not check
/// `is_custom`; the page only offers removal on user-added rows.
pub fn remove_category(data: &BudgetData, period: &str, category_id: &str) -> BudgetData {
    let Some(period_data) = data.periods.get(period) else {
        return data.clone();
    };

    let keep = |categories: &[BudgetCategory]| -> Vec<BudgetCategory> {
        categories
            .iter()
            .filter(|category| category.id != category_id)
            .cloned()
            .collect()
    };

    let mut next = data.clone();
    next.periods.insert(
        period.to_string(),
        PeriodData {
            income: keep(&period_data.income),
            expenses: keep(&period_data.expenses),
        },
    );
    next
}

pub fn planned_total(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(|category| category.planned).sum()
}

pub fn actual_total(categories: &[BudgetCategory]) -> f64 {
    categories.iter().map(|category| category.actual).sum()
}

pub fn summarize(period_data: &PeriodData) -> PeriodSummary {
    let income_planned = planned_total(&period_data.income);
    let income_actual = actual_total(&period_data.income);
    let expense_planned = planned_total(&period_data.expenses);
    let expense_actual = actual_total(&period_data.expenses);
    PeriodSummary {
        income_planned,
        income_actual,
        expense_planned,
        expense_actual,
        net_planned: income_planned - expense_planned,
        net_actual: income_actual - expense_actual,
    }
}
