use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One budget line item. Serialized field names match the persisted blob,
/// so `isCustom` stays camelCase on disk and over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: String,
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    #[serde(rename = "isCustom")]
    pub is_custom: bool,
}

/// The two lists keep insertion order: defaults first, then custom slots,
/// then user-added categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodData {
    pub income: Vec<BudgetCategory>,
    pub expenses: Vec<BudgetCategory>,
}

/// Every period ever materialized, keyed by period id ("2025-01" or
/// "2025-W05"). Serialized transparently so the stored JSON is the bare
/// period-to-data mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BudgetData {
    pub periods: BTreeMap<String, PeriodData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Planned,
    Actual,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub period: String,
    pub id: String,
    pub field: Field,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryRequest {
    pub period: String,
    pub kind: Kind,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveCategoryRequest {
    pub period: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub income_planned: f64,
    pub income_actual: f64,
    pub expense_planned: f64,
    pub expense_actual: f64,
    pub net_planned: f64,
    pub net_actual: f64,
}

#[derive(Debug, Serialize)]
pub struct BudgetView {
    pub period: String,
    pub income: Vec<BudgetCategory>,
    pub expenses: Vec<BudgetCategory>,
    pub summary: PeriodSummary,
}

#[derive(Debug, Serialize)]
pub struct PeriodOption {
    pub value: String,
    pub label: String,
}
