use super::ui;
use crate::core::payment::{self, PaymentDetails, PaymentForm};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Validates raw payment fields and reports either the per-field problems
/// or a confirmation with display-masked values.
pub fn run(form: &PaymentForm) -> Result<()> {
    debug!("Validating payment form: {form:?}");

    match payment::parse(form) {
        Err(errors) => {
            let mut table = ui::new_styled_table();
            table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Problem")]);
            for error in &errors {
                table.add_row(vec![
                    Cell::new(error.field),
                    Cell::new(&error.message).fg(comfy_table::Color::Red),
                ]);
            }
            println!(
                "{}\n\n{table}",
                ui::style_text("Payment details are not valid", ui::StyleType::Error)
            );
        }
        Ok(parsed) => {
            let method_display = match &parsed.details {
                PaymentDetails::Credit(card) => {
                    format!("Credit card {}", payment::format_card_number(&card.number))
                }
                PaymentDetails::Debit(card) => {
                    format!("Debit card {}", payment::format_card_number(&card.number))
                }
                PaymentDetails::Paypal { email } => format!("PayPal ({email})"),
                PaymentDetails::Zelle { phone } => {
                    format!("Zelle {}", payment::format_phone(phone))
                }
                PaymentDetails::Bitcoin { address } => format!("Bitcoin {address}"),
            };
            println!(
                "{} {}, amount {:.2}",
                ui::style_text("Payment details accepted:", ui::StyleType::TotalValue),
                method_display,
                parsed.amount,
            );
        }
    }

    Ok(())
}
