use crate::models::BudgetData;
use crate::period::ViewType;
use crate::store::{actual_total, planned_total};
use chrono::NaiveDate;

/// Flattens every stored period into one CSV blob: category rows, a
/// three-row summary block, then a blank line per period. Numbers use their
/// plain decimal form, no currency symbol or fixed precision.
pub fn to_csv(data: &BudgetData) -> String {
    let mut csv = String::from("Period,Type,Category,Planned,Actual,Difference\n");

    for (period, period_data) in &data.periods {
        for category in &period_data.income {
            csv.push_str(&format!(
                "{period},Income,{},{},{},{}\n",
                category.name,
                category.planned,
                category.actual,
                category.actual - category.planned
            ));
        }

        for category in &period_data.expenses {
            csv.push_str(&format!(
                "{period},Expense,{},{},{},{}\n",
                category.name,
                category.planned,
                category.actual,
                category.actual - category.planned
            ));
        }

        let income_planned = planned_total(&period_data.income);
        let income_actual = actual_total(&period_data.income);
        let expense_planned = planned_total(&period_data.expenses);
        let expense_actual = actual_total(&period_data.expenses);

        csv.push_str(&format!(
            "{period},Summary,Total Income,{income_planned},{income_actual},\n"
        ));
        csv.push_str(&format!(
            "{period},Summary,Total Expenses,{expense_planned},{expense_actual},\n"
        ));
        // Net savings carries only a difference; planned and actual stay empty.
        csv.push_str(&format!(
            "{period},Summary,Net Savings,,,{}\n",
            income_actual - expense_actual
        ));
        csv.push('\n');
    }

    csv
}

pub fn export_filename(view: ViewType, date: NaiveDate) -> String {
    format!("budget-{view}-{date}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Kind};
    use crate::store::{add_custom_category, ensure_period, update_field};

    #[test]
    fn empty_store_exports_only_the_header() {
        assert_eq!(
            to_csv(&BudgetData::default()),
            "Period,Type,Category,Planned,Actual,Difference\n"
        );
    }

    #[test]
    fn summary_block_shows_net_savings_without_planned_or_actual() {
        let data = ensure_period(&BudgetData::default(), "2025-01");
        let data = update_field(&data, "2025-01", "income-0", Field::Actual, 3000.0);
        let data = update_field(&data, "2025-01", "expense-0", Field::Actual, 1200.0);

        let csv = to_csv(&data);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Period,Type,Category,Planned,Actual,Difference");
        assert!(lines.contains(&"2025-01,Summary,Total Income,0,3000,"));
        assert!(lines.contains(&"2025-01,Summary,Total Expenses,0,1200,"));
        assert!(lines.contains(&"2025-01,Summary,Net Savings,,,1800"));
    }

    #[test]
    fn category_rows_come_before_the_summary_and_periods_are_blank_separated() {
        let data = ensure_period(&BudgetData::default(), "2025-01");
        let data = ensure_period(&data, "2025-02");
        let csv = to_csv(&data);

        // Per period: 5 income + 14 expense + 3 summary rows + 1 blank line.
        let body: Vec<&str> = csv.split('\n').skip(1).collect();
        assert_eq!(body[0], "2025-01,Income,Paycheck,0,0,0");
        assert_eq!(body[19], "2025-01,Summary,Total Income,0,0,");
        assert_eq!(body[22], "");
        assert_eq!(body[23], "2025-02,Income,Paycheck,0,0,0");
        // Trailing blank line after the last period, then the final split rest.
        assert_eq!(body[45], "");
        assert_eq!(body[46], "");
    }

    #[test]
    fn difference_column_is_actual_minus_planned() {
        let data = ensure_period(&BudgetData::default(), "2025-03");
        let data = update_field(&data, "2025-03", "expense-1", Field::Planned, 80.0);
        let data = update_field(&data, "2025-03", "expense-1", Field::Actual, 95.5);

        let csv = to_csv(&data);
        assert!(csv.contains("2025-03,Expense,Gifts,80,95.5,15.5\n"));
    }

    #[test]
    fn user_added_categories_appear_in_export() {
        let data = ensure_period(&BudgetData::default(), "2025-03");
        let data = add_custom_category(&data, "2025-03", Kind::Income, "Tips");
        let csv = to_csv(&data);
        assert!(csv.contains("2025-03,Income,Tips,0,0,0\n"));
    }

    #[test]
    fn filename_embeds_view_and_export_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(export_filename(ViewType::Monthly, date), "budget-monthly-2025-03-10.csv");
        assert_eq!(export_filename(ViewType::Weekly, date), "budget-weekly-2025-03-10.csv");
    }
}
