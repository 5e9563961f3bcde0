use super::ui;
use crate::core::config::{Proposal, ScopeCategory, ScopeItem};
use crate::core::scope;
use anyhow::Result;
use comfy_table::Cell;

fn category_label(category: ScopeCategory) -> &'static str {
    match category {
        ScopeCategory::Information => "Information",
        ScopeCategory::Schematic => "Schematic",
        ScopeCategory::Construction => "Construction",
        ScopeCategory::Custom => "Custom",
    }
}

/// The in-scope subset of a proposal's fee schedule: required items plus
/// the optional items the client selected, in schedule order.
fn selected_items(proposal: &Proposal) -> Vec<&ScopeItem> {
    proposal
        .items
        .iter()
        .filter(|item| item.required || proposal.selected.iter().any(|id| id == &item.id))
        .collect()
}

pub fn run(proposals: &[Proposal], currency: &str) -> Result<()> {
    if proposals.is_empty() {
        println!("No proposals found to price.");
        return Ok(());
    }

    let num_proposals = proposals.len();
    for (i, proposal) in proposals.iter().enumerate() {
        let in_scope: Vec<ScopeItem> = selected_items(proposal).into_iter().cloned().collect();
        let totals = scope::scope_totals(&in_scope);

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Group"),
            ui::header_cell("Description"),
            ui::header_cell("Category"),
            ui::header_cell("Hours"),
            ui::header_cell(&format!("Rate ({currency}/h)")),
            ui::header_cell(&format!("Fee ({currency})")),
        ]);

        for item in &in_scope {
            table.add_row(vec![
                Cell::new(item.task_group.to_string()),
                Cell::new(&item.description),
                Cell::new(category_label(item.category)),
                ui::hours_cell(item.default_hours),
                ui::money_cell(item.rate_per_hour),
                ui::money_cell(scope::item_cost(item)),
            ]);
        }

        println!(
            "Proposal: {} ({})\n\n{table}\n\nTotal hours: {}   Total fee ({}): {}",
            ui::style_text(&proposal.name, ui::StyleType::Title),
            ui::style_text(&proposal.client, ui::StyleType::Subtle),
            ui::style_text(&format!("{:.1}", totals.total_hours), ui::StyleType::TotalLabel),
            currency,
            ui::style_text(
                &format!("{:.2}", totals.total_cost),
                ui::StyleType::TotalValue
            ),
        );

        if i < num_proposals - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, required: bool) -> ScopeItem {
        ScopeItem {
            id: id.to_string(),
            task_group: 1,
            description: id.to_string(),
            default_hours: 10.0,
            rate_per_hour: 100.0,
            required,
            category: ScopeCategory::Schematic,
        }
    }

    #[test]
    fn test_selection_keeps_required_and_chosen_items_in_order() {
        let proposal = Proposal {
            name: "Fee proposal".to_string(),
            client: "Client".to_string(),
            items: vec![
                item("S-1", true),
                item("S-2", false),
                item("S-3", false),
                item("S-4", true),
            ],
            selected: vec!["S-3".to_string()],
        };

        let ids: Vec<&str> = selected_items(&proposal)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["S-1", "S-3", "S-4"]);
    }

    #[test]
    fn test_selection_with_nothing_opted_in() {
        let proposal = Proposal {
            name: "Fee proposal".to_string(),
            client: "Client".to_string(),
            items: vec![item("S-1", false), item("S-2", false)],
            selected: vec![],
        };

        assert!(selected_items(&proposal).is_empty());
    }
}
