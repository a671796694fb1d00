use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::cost::{CostQuote, Number};

#[derive(Tabled)]
struct CostTableRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

pub fn format_cost_plain(cost: &Number) -> String {
    cost.to_string()
}

pub fn format_cost_json(quote: &CostQuote) -> serde_json::Result<String> {
    serde_json::to_string(quote)
}

pub fn format_cost_table(quote: &CostQuote) -> String {
    let row = CostTableRow {
        quantity: quote.quantity.to_string(),
        unit_price: quote.unit_price.to_string(),
        cost: quote.cost.to_string(),
    };

    let mut table = Table::new([row]);
    table.with(Style::rounded()).with(Alignment::right());

    table.to_string()
}

pub fn format_cost_detail(quote: &CostQuote) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {}\n",
        style("Quantity").bold(),
        style(quote.quantity).cyan()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Unit Price").bold(),
        style(quote.unit_price).cyan()
    ));

    let cost = if quote.cost.as_f64() < 0.0 {
        style(quote.cost).red()
    } else {
        style(quote.cost).green()
    };
    output.push_str(&format!("{}: {}\n", style("Total Cost").bold(), cost));

    output
}
