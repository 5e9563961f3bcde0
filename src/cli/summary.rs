use super::ui;
use crate::core::config::Project;
use crate::core::financials::{self, FinancialSummary};
use anyhow::Result;
use comfy_table::Cell;
use console::style;

fn display_as_table(project: &Project, summary: &FinancialSummary, currency: &str) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Objective"),
        ui::header_cell(&format!("Budgeted ({currency})")),
        ui::header_cell(&format!("Actual ({currency})")),
        ui::header_cell("Budgeted (h)"),
        ui::header_cell("Actual (h)"),
        ui::header_cell(&format!("Variance ({currency})")),
    ]);

    for objective in &project.objectives {
        let budgeted_hours: f64 = objective.tasks.iter().map(|t| t.budgeted_hours).sum();
        let actual_hours: f64 = objective.tasks.iter().map(|t| t.actual_hours).sum();

        table.add_row(vec![
            Cell::new(&objective.name),
            ui::money_cell(objective.budgeted_cost),
            ui::money_cell(objective.actual_cost),
            ui::hours_cell(budgeted_hours),
            ui::hours_cell(actual_hours),
            ui::signed_money_cell(objective.budgeted_cost - objective.actual_cost),
        ]);
    }

    // Project name at top
    let mut output = format!(
        "Project: {} ({})\n\n",
        ui::style_text(&project.name, ui::StyleType::Title),
        ui::style_text(&project.client, ui::StyleType::Subtle)
    );

    // Table in the middle
    output.push_str(&table.to_string());

    // Contract and profit figures at bottom
    let pl_style = if summary.profit_loss >= 0.0 {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };
    output.push_str(&format!(
        "\n\nContract ({}): {:.2}   Actual cost: {:.2}   P/L: {} ({}%)   Status: {}",
        ui::style_text(currency, ui::StyleType::TotalLabel),
        summary.contract_amount,
        summary.total_actual_cost,
        ui::style_text(&format!("{:.2}", summary.profit_loss), pl_style),
        summary.profit_loss_pct,
        ui::style_text(&summary.status, ui::StyleType::Subtle),
    ));

    output
}

pub fn run(projects: &[Project], currency: &str) -> Result<()> {
    if projects.is_empty() {
        println!("No projects found to summarize.");
        return Ok(());
    }

    let summaries: Vec<FinancialSummary> =
        projects.iter().map(financials::summarize_project).collect();

    let mut grand_total = 0.0;
    for summary in &summaries {
        grand_total += summary.profit_loss;
    }

    let num_projects = projects.len();
    for (i, (project, summary)) in projects.iter().zip(summaries.iter()).enumerate() {
        println!("{}", display_as_table(project, summary, currency));
        if i < num_projects - 1 {
            ui::print_separator();
        }
    }

    if num_projects > 1 {
        let term_width = console::Term::stdout()
            .size_checked()
            .map(|(_, w)| w as usize)
            .unwrap_or(80);
        println!("\n{}", "=".repeat(term_width));
        let total_str = format!("Total P/L ({currency}): {grand_total:.2}");
        let styled_total = if grand_total >= 0.0 {
            style(&total_str).bold().green()
        } else {
            style(&total_str).bold().red()
        };
        println!("{styled_total:>term_width$}");
    }

    Ok(())
}
