use super::ui;
use crate::core::config::{Project, TaskStatus};
use crate::core::progress;
use anyhow::Result;
use comfy_table::Cell;

pub fn run(projects: &[Project]) -> Result<()> {
    if projects.is_empty() {
        println!("No projects found to report progress for.");
        return Ok(());
    }

    let num_projects = projects.len();
    for (i, project) in projects.iter().enumerate() {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Objective"),
            ui::header_cell("Tasks"),
            ui::header_cell("Completed"),
            ui::header_cell("Progress"),
        ]);

        for objective in &project.objectives {
            let total = objective.tasks.len();
            let completed = objective
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count();

            table.add_row(vec![
                Cell::new(&objective.name),
                Cell::new(total.to_string()),
                Cell::new(completed.to_string()),
                ui::completion_cell(progress::percent_complete(completed, total)),
            ]);
        }

        let overall = progress::project_progress(project);
        println!(
            "Project: {} ({})\n\n{table}\n\nOverall: {}",
            ui::style_text(&project.name, ui::StyleType::Title),
            ui::style_text(&project.client, ui::StyleType::Subtle),
            ui::style_text(
                &progress::format_percent(overall),
                if overall == 100 {
                    ui::StyleType::TotalValue
                } else {
                    ui::StyleType::TotalLabel
                }
            ),
        );

        if i < num_projects - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}
