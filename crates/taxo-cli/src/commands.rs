use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::{info, warn};

use taxo_ingest::read_records;
use taxo_model::{FlatDimension, OrderDocument, Record, scope_key};
use taxo_order::OrderingSession;
use taxo_store::{JsonFileStore, OrderStore};

use crate::cli::{DimensionArg, ReorderArgs, ShowArgs};

pub fn run_dimensions() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dimension"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for dimension in FlatDimension::ALL {
        table.add_row(vec![dimension.name().to_string(), "flat".to_string()]);
    }
    table.add_row(vec!["Set".to_string(), "hierarchy level 1".to_string()]);
    table.add_row(vec![
        "Grouping".to_string(),
        "hierarchy level 2, per Set".to_string(),
    ]);
    table.add_row(vec![
        "List".to_string(),
        "hierarchy level 3, per (Set, Grouping)".to_string(),
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let records = load_dataset(&args.dataset)?;
    let document = match &args.orders {
        Some(path) => JsonFileStore::new(path)
            .load()
            .context("load order document")?,
        None => OrderDocument::new(),
    };
    let mut session = OrderingSession::new(document, &records);

    if let Some(set) = &args.set {
        session.select_set(set);
        match &args.grouping {
            Some(grouping) => {
                session.select_grouping(grouping);
                let order = session.list_order().unwrap_or_default().to_vec();
                print_order(&format!("List ({})", scope_key(set, grouping)), &order);
            }
            None => {
                let order = session.grouping_order().unwrap_or_default().to_vec();
                print_order(&format!("Grouping ({set})"), &order);
            }
        }
        return Ok(());
    }

    match args.dimension {
        Some(DimensionArg::Set) => print_order("Set", session.set_order()),
        Some(flat) => {
            let dimension = flat_dimension(flat);
            print_order(dimension.name(), session.flat_order(dimension));
        }
        None => {
            for dimension in FlatDimension::ALL {
                print_order(dimension.name(), session.flat_order(dimension));
            }
            print_order("Set", session.set_order());
        }
    }
    Ok(())
}

pub fn run_reorder(args: &ReorderArgs) -> Result<()> {
    let records = load_dataset(&args.dataset)?;
    let store = JsonFileStore::new(&args.orders);
    let document = store.load().context("load order document")?;
    let mut session = OrderingSession::new(document, &records);

    let moved = if let Some(set) = &args.set {
        session.select_set(set);
        match &args.grouping {
            Some(grouping) => {
                session.select_grouping(grouping);
                session.move_list(&args.item, args.target_index)
            }
            None => session.move_grouping(&args.item, args.target_index),
        }
    } else {
        match args.dimension {
            Some(DimensionArg::Set) => session.move_set(&args.item, args.target_index),
            Some(flat) => session.move_flat(flat_dimension(flat), &args.item, args.target_index),
            None => anyhow::bail!("specify --dimension or --set to address an order"),
        }
    };

    if moved {
        info!(item = %args.item, target = args.target_index, "moved value");
    } else {
        // Stale gestures are tolerated; the document is still rewritten.
        warn!(item = %args.item, "value not present in the addressed order, nothing moved");
    }

    let document = session.commit();
    store.save(&document).context("save order document")?;
    println!(
        "{} '{}' {} (saved to {})",
        if moved { "Moved" } else { "Ignored" },
        args.item,
        if moved {
            format!("to index {}", args.target_index)
        } else {
            "- not present in the addressed order".to_string()
        },
        args.orders.display()
    );
    Ok(())
}

fn load_dataset(path: &std::path::Path) -> Result<Vec<Record>> {
    let records = read_records(path).context("read dataset")?;
    info!(records = records.len(), "dataset loaded");
    Ok(records)
}

fn flat_dimension(arg: DimensionArg) -> FlatDimension {
    match arg {
        DimensionArg::Sector => FlatDimension::Sector,
        DimensionArg::Domain => FlatDimension::Domain,
        DimensionArg::Country => FlatDimension::Country,
        // Callers route Set to the hierarchy before getting here.
        DimensionArg::Set => unreachable!("Set is not a flat dimension"),
    }
}

fn print_order(title: &str, values: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, value) in values.iter().enumerate() {
        table.add_row(vec![index.to_string(), value.clone()]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
