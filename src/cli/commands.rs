use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::Write;
use tracing::{error, info};

use crate::{
    cli::args::*,
    models::cost::{CostQuote, Number},
    services::{deliver, CostService, ReportMode},
    utils::{
        formatting::{format_cost_detail, format_cost_json, format_cost_plain, format_cost_table},
        Config,
    },
};

static MONEY: Emoji<'_, '_> = Emoji("💰 ", "");

pub struct CliApp {
    cost_service: CostService,
    default_format: OutputFormat,
}

impl CliApp {
    pub fn new(config: &Config) -> Self {
        Self {
            cost_service: CostService::new(),
            default_format: config.output_format,
        }
    }

    pub fn run<W: Write>(&self, args: Args, out: &mut W) -> Result<()> {
        let format = args.format.unwrap_or(self.default_format);

        match args.command {
            Commands::Report { qty, price } => {
                self.handle_cost(out, &qty, &price, ReportMode::Print, format)
            }
            Commands::Compute { qty, price } => {
                self.handle_cost(out, &qty, &price, ReportMode::Return, format)
            }
            Commands::Interactive => self.handle_interactive(out),
        }
    }

    fn handle_cost<W: Write>(
        &self,
        out: &mut W,
        qty: &str,
        price: &str,
        mode: ReportMode,
        format: OutputFormat,
    ) -> Result<()> {
        info!("Cost for quantity {} at unit price {} ({:?})", qty, price, mode);
        let quote = self.cost_service.quote(qty, price).map_err(|e| {
            error!("Cost computation failed: {}", e);
            e
        })?;

        // Print mode has already written the bare value.
        if let Some(cost) = deliver(out, quote.cost, mode).context("Failed to write cost")? {
            let rendered = match format {
                OutputFormat::Plain => format_cost_plain(&cost),
                OutputFormat::Json => {
                    format_cost_json(&quote).context("Failed to encode cost as JSON")?
                }
                OutputFormat::Table => format_cost_table(&quote),
            };
            writeln!(out, "{}", rendered).context("Failed to write cost")?;
        }
        Ok(())
    }

    fn handle_interactive<W: Write>(&self, out: &mut W) -> Result<()> {
        // Prompts and banner go to stderr; only the result is written to `out`.
        eprintln!("{} {}", MONEY, style("Cost Calculator").bold().cyan());

        let theme = ColorfulTheme::default();
        let qty = prompt_number(&theme, "Quantity")?;
        let price = prompt_number(&theme, "Unit price")?;

        let cost = self
            .cost_service
            .compute_numbers(qty, price)
            .context("Failed to compute cost")?;

        let quote = CostQuote {
            quantity: qty,
            unit_price: price,
            cost,
        };
        deliver(out, format_cost_detail(&quote).trim_end(), ReportMode::Print)
            .context("Failed to write cost")?;
        Ok(())
    }
}

fn prompt_number(theme: &ColorfulTheme, prompt: &str) -> Result<Number> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            input.parse::<Number>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;

    raw.parse::<Number>()
        .with_context(|| format!("Invalid {}", prompt.to_lowercase()))
}
