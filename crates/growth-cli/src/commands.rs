use anyhow::{Context, Result};
use growth_core::{BracketStrategy, D2_ZSCORE, ZScoreFunction};
use growth_standards::{ReferenceTable, load_configured};
use tracing::{info, info_span};

use growth_cli::render::{info_table, reference_table};
use growth_cli::report::{EvalReport, InfoReport};

use crate::cli::{EvalArgs, OutputFormatArg, TableArgs};

fn load_table() -> Result<ReferenceTable> {
    let table = load_configured().context("load reference tables")?;
    info!(source = %table.source(), rows = table.len(), "reference tables ready");
    Ok(table)
}

pub fn run_eval(args: &EvalArgs) -> Result<EvalReport> {
    let span = info_span!("eval");
    let _guard = span.enter();

    let table = load_table()?;
    let strategy: BracketStrategy = args.strategy.into();
    let function = ZScoreFunction::new(&table).with_strategy(strategy);
    let result = function
        .evaluate_arguments(args.arguments.as_slice())
        .with_context(|| format!("evaluate {D2_ZSCORE}"))?;
    Ok(EvalReport::new(args.arguments.clone(), strategy, result))
}

pub fn print_eval(report: &EvalReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Text => println!("{}", report.result),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize result")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_table(args: &TableArgs) -> Result<()> {
    let table = load_table()?;
    let rendered = reference_table(&table, args.sex.map(Into::into), args.age);
    if rendered.row_count() == 0 {
        anyhow::bail!("no reference rows match the filter");
    }
    println!("{rendered}");
    Ok(())
}

pub fn run_info() -> Result<()> {
    let table = load_table()?;
    let report = InfoReport::from_table(&table);
    println!("Source: {}", report.source);
    println!("Fingerprint: {}", report.fingerprint);
    println!("{}", info_table(&report));
    Ok(())
}
