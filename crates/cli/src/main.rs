//! `rxstock`: print the pharmacy stock views for the demo catalogue as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rxstock_core::ItemId;
use rxstock_events::{EventEnvelope, InMemoryEventBus};
use rxstock_inventory::seed::seeded_store;
use rxstock_inventory::{
    CRITICAL_PERCENT_ENV, InMemoryInventoryStore, InventoryEvent, InventoryStore, StockEdit,
    StockPolicy, StockService,
};

type Bus = Arc<InMemoryEventBus<EventEnvelope<InventoryEvent>>>;
type Service = StockService<InMemoryInventoryStore, Bus>;

/// Pharmacy stock classifier and alert feed
#[derive(Parser, Debug)]
#[command(name = "rxstock", version)]
struct Cli {
    /// Percentage of the minimum below which stock is critical (1..=100)
    #[arg(
        long,
        global = true,
        env = CRITICAL_PERCENT_ENV,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    critical_percent: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Inventory table, optionally filtered by name or category
    Table {
        /// Case-insensitive text matched against name and category
        query: Option<String>,
    },
    /// Critical and low stock groups
    Alerts,
    /// Dashboard counts per tier
    Summary,
    /// Request a reorder for a medicine and print the outcome
    Reorder {
        /// Medicine name (case-insensitive)
        name: String,
    },
    /// Edit stock levels or price of a medicine
    Edit {
        /// Medicine name (case-insensitive)
        name: String,
        /// New current stock (whole units)
        #[arg(long)]
        current: Option<String>,
        /// New minimum stock (whole units, greater than zero)
        #[arg(long)]
        minimum: Option<String>,
        /// New unit price, e.g. 12.99
        #[arg(long)]
        price: Option<String>,
    },
}

fn main() -> Result<()> {
    rxstock_observability::init();
    let cli = Cli::parse();

    let policy = match cli.critical_percent {
        Some(percent) => StockPolicy::new(percent).context("invalid critical percent")?,
        None => StockPolicy::default(),
    };
    tracing::info!(critical_percent = policy.critical_percent(), "stock policy loaded");

    let store = seeded_store().context("failed to seed inventory")?;
    let service: Service =
        StockService::with_policy(store, Arc::new(InMemoryEventBus::new()), policy);

    match cli.command.unwrap_or(Command::Table { query: None }) {
        Command::Table { query } => {
            print_json(&service.inventory_table(query.as_deref().unwrap_or("")))
        }
        Command::Alerts => print_json(&service.alerts()),
        Command::Summary => print_json(&service.dashboard_summary()),
        Command::Reorder { name } => {
            let id = find_by_name(&service, &name)?;
            print_json(&service.request_reorder(id))
        }
        Command::Edit {
            name,
            current,
            minimum,
            price,
        } => {
            let id = find_by_name(&service, &name)?;
            let edit = build_edit(id, current, minimum, price);
            let row = service.edit_item(&edit).context("edit rejected")?;
            print_json(&row)
        }
    }
}

fn find_by_name(service: &Service, name: &str) -> Result<ItemId> {
    service
        .store()
        .list()
        .into_iter()
        .find(|item| item.name().eq_ignore_ascii_case(name.trim()))
        .map(|item| item.id_typed())
        .with_context(|| format!("no medicine named '{name}'"))
}

fn build_edit(
    id: ItemId,
    current: Option<String>,
    minimum: Option<String>,
    price: Option<String>,
) -> StockEdit {
    let mut edit = StockEdit::new(id);
    if let Some(raw) = current {
        edit = edit.with_current_stock(raw);
    }
    if let Some(raw) = minimum {
        edit = edit.with_minimum_stock(raw);
    }
    if let Some(raw) = price {
        edit = edit.with_unit_price(raw);
    }
    edit
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn no_arguments_defaults_to_table() {
        let cli = Cli::try_parse_from(["rxstock"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn help_is_rendered_by_clap() {
        let err = Cli::try_parse_from(["rxstock", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["rxstock", "edit", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn table_takes_an_optional_query() {
        let cli = Cli::try_parse_from(["rxstock", "table", "pain"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Table {
                query: Some("pain".into())
            })
        );
    }

    #[test]
    fn edit_fields_are_named_flags() {
        let cli = Cli::try_parse_from([
            "rxstock", "edit", "Metformin", "--current", "30", "--price", "15.99",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Edit {
                name: "Metformin".into(),
                current: Some("30".into()),
                minimum: None,
                price: Some("15.99".into()),
            })
        );
    }

    #[test]
    fn bare_edit_field_is_an_argument_error() {
        let args = ["rxstock", "edit", "Metformin", "current"];
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn reorder_requires_a_name() {
        let err = Cli::try_parse_from(["rxstock", "reorder"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["rxstock", "restock"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn critical_percent_is_range_checked() {
        let cli = Cli::try_parse_from(["rxstock", "--critical-percent", "40", "alerts"]).unwrap();
        assert_eq!(cli.critical_percent, Some(40));
        assert_eq!(cli.command, Some(Command::Alerts));

        let err = Cli::try_parse_from(["rxstock", "--critical-percent", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn edit_flags_map_onto_stock_edit() {
        let id = ItemId::new();
        let edit = build_edit(id, Some("30".into()), None, Some("4.99".into()));
        let patch = edit.validate().unwrap();
        assert_eq!(patch.current_stock, Some(30));
        assert_eq!(patch.minimum_stock, None);

        assert!(build_edit(id, None, None, None).validate().is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
