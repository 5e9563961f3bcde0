//! Provides functions for performing financial calculations on projects.

use crate::core::config::Project;
use serde::Serialize;

/// Budget-versus-actual rollup for a single project, with all costs summed
/// from its objectives and all hours summed from their subtasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub contract_amount: f64,
    pub total_budgeted_cost: f64,
    pub total_actual_cost: f64,
    pub total_budgeted_hours: f64,
    pub total_actual_hours: f64,
    pub profit_loss: f64,
    /// Profit/loss as a percentage of the contract amount, formatted to two
    /// decimal places. "0.00" when there is no contract amount to divide by.
    pub profit_loss_pct: String,
    pub status: String,
}

/// Calculates the financial summary of a project.
///
/// This is a pure fold over the two-level Project -> Objective -> SubTask
/// tree. Objective costs feed the cost totals; subtask hours feed the hour
/// totals. Fields absent from the source data have already been defaulted to
/// zero by deserialization, so an empty or partially-filled tree sums
/// cleanly to zeros.
pub fn summarize_project(project: &Project) -> FinancialSummary {
    let mut total_budgeted_cost = 0.0;
    let mut total_actual_cost = 0.0;
    let mut total_budgeted_hours = 0.0;
    let mut total_actual_hours = 0.0;

    for objective in &project.objectives {
        total_budgeted_cost += objective.budgeted_cost;
        total_actual_cost += objective.actual_cost;

        for task in &objective.tasks {
            total_budgeted_hours += task.budgeted_hours;
            total_actual_hours += task.actual_hours;
        }
    }

    let profit_loss = project.contract_amount - total_actual_cost;
    let profit_loss_pct = if project.contract_amount == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:.2}", (profit_loss / project.contract_amount) * 100.0)
    };

    FinancialSummary {
        contract_amount: project.contract_amount,
        total_budgeted_cost,
        total_actual_cost,
        total_budgeted_hours,
        total_actual_hours,
        profit_loss,
        profit_loss_pct,
        status: project
            .status
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    }
}
