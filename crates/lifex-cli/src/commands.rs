use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::{info_span, warn};

use lifex_model::Region;
use lifex_transform::clean;

use crate::cli::CleanArgs;
use crate::pipeline::{load_input, write_frame};
use crate::summary::{CleanSummary, apply_table_style, dim_cell, header_cell};

pub fn run_clean(args: &CleanArgs) -> Result<CleanSummary> {
    let country = args.country.trim().to_string();
    // Catalog membership is advisory: an unknown code still runs and
    // simply matches nothing.
    if Region::from_str(&country).is_err() {
        warn!(country = %country, "not a recognized region code; output will be empty");
    }

    let span = info_span!("clean", input = %args.input.display(), country = %country);
    let _guard = span.enter();

    let input = load_input(&args.input, args.format)?;
    let encoding = input.encoding();
    let records_in = input.record_count();

    let frame = clean(input, &country)?;
    let records_out = frame.record_count();

    let output = resolve_output_path(args, &country);
    write_frame(frame, &output)?;

    Ok(CleanSummary {
        input: args.input.clone(),
        output,
        country,
        encoding,
        records_in,
        records_out,
    })
}

pub fn run_regions() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Classification")]);
    apply_table_style(&mut table);
    for region in Region::ALL {
        if region.is_aggregate() {
            table.add_row(vec![dim_cell(region.as_str()), dim_cell("Aggregate")]);
        } else {
            table.add_row(vec![Cell::new(region.as_str()), Cell::new("Country")]);
        }
    }
    println!("{table}");
}

fn resolve_output_path(args: &CleanArgs, country: &str) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    let file_name = format!("{}_life_expectancy.csv", country.to_lowercase());
    match args.input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
