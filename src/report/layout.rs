use crate::domain::Movement;

use super::{format_timestamp, render_optional, ReportDocument, TableBlock};

pub const DETAIL_TITLE: &str = "Movement Details";
pub const LIST_TITLE: &str = "Movement List";

/// Column headers of the movement list table.
pub const LIST_HEADERS: [&str; 6] = ["ID", "Type", "Date", "Amount", "Balance", "Reversible"];

/// Lays out every field of a single movement as labeled paragraphs.
pub fn movement_detail(movement: &Movement) -> ReportDocument {
    ReportDocument::new(DETAIL_TITLE)
        .paragraph(format!("ID: {}", movement.id))
        .paragraph(format!("Type: {}", movement.type_movement))
        .paragraph(format!("Date: {}", format_timestamp(Some(&movement.date))))
        .paragraph(format!("Amount: {}", movement.amount))
        .paragraph(format!("Balance: {}", movement.balance))
        .paragraph(format!("Reversible: {}", movement.is_reversible))
        .paragraph(format!(
            "Deadline: {}",
            format_timestamp(movement.transfer_deadline_date.as_ref())
        ))
        .paragraph(format!(
            "Origin Account: {}",
            render_optional(movement.origin.as_ref())
        ))
        .paragraph(format!(
            "Destination Account: {}",
            render_optional(movement.destination.as_ref())
        ))
        .paragraph(format!(
            "Sender Client: {}",
            render_optional(movement.sender_client.as_ref())
        ))
        .paragraph(format!(
            "Recipient Client: {}",
            render_optional(movement.recipient_client.as_ref())
        ))
}

/// Lays out `movements` as one table row each, in input order.
pub fn movement_list(movements: &[Movement]) -> ReportDocument {
    let mut table = TableBlock::new(LIST_HEADERS);
    for movement in movements {
        table.push_row(list_row(movement));
    }
    ReportDocument::new(LIST_TITLE).table(table)
}

fn list_row(movement: &Movement) -> Vec<String> {
    vec![
        movement.id.clone(),
        movement.type_movement.clone(),
        format_timestamp(Some(&movement.date)),
        movement.amount.to_string(),
        movement.balance.to_string(),
        movement.is_reversible.to_string(),
    ]
}
