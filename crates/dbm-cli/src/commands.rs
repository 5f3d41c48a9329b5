use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use dbm_cli::pipeline::{
    self, Toolchain, read_class, read_snapshot, render_artifacts, write_snapshot,
};

use crate::cli::{GenerateArgs, OutputFormatArg, PlanArgs, ResolveArgs};
use crate::summary::{ResolutionRow, print_plan_summary, resolution_table, strategy_table};

pub fn run_generate(args: &GenerateArgs, toolchain: &Toolchain) -> Result<()> {
    let class = read_class(&args.class)?;
    let span = info_span!("generate", class = %class.name);
    let _guard = span.enter();

    let generated = pipeline::generate(&toolchain.generator, &class, args.artifacts.into())
        .with_context(|| format!("generate artifacts for {}", class.name))?;
    let rendered = match args.format {
        OutputFormatArg::Text => render_artifacts(&generated),
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(&generated).context("serialize artifacts")? + "\n"
        }
    };
    emit(args.output.as_deref(), &rendered)
}

pub fn run_plan(args: &PlanArgs, toolchain: &Toolchain) -> Result<()> {
    let class = read_class(&args.class)?;
    let span = info_span!("plan", class = %class.name);
    let _guard = span.enter();

    let snapshot = read_snapshot(args.snapshot.as_deref())?;
    let outcome = pipeline::plan(toolchain, &class, &snapshot, args.artifacts.into())?;
    if outcome.plan.conflicts() > 0 {
        warn!(
            conflicts = outcome.plan.conflicts(),
            "plan contains conflict-annotated insertions"
        );
    }

    match args.format {
        OutputFormatArg::Text => print_plan_summary(&class.name, &outcome.plan),
        OutputFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&outcome.plan).context("serialize edit plan")?;
            println!("{json}");
        }
    }

    if let Some(path) = &args.write_snapshot {
        write_snapshot(path, &outcome.merged)?;
        info!(path = %path.display(), "wrote merged snapshot");
    }
    Ok(())
}

pub fn run_strategies(toolchain: &Toolchain) -> Result<()> {
    let table = strategy_table(toolchain.generator.resolver().order());
    println!("{table}");
    Ok(())
}

/// Returns false when any type is unsupported.
pub fn run_resolve(args: &ResolveArgs, toolchain: &Toolchain) -> Result<bool> {
    if args.types.is_empty() && args.class.is_none() {
        bail!("nothing to resolve: pass type names or --class");
    }
    let resolver = toolchain.generator.resolver();
    let mut rows: Vec<ResolutionRow> = args
        .types
        .iter()
        .map(|type_name| ResolutionRow {
            subject: "-".to_string(),
            type_name: type_name.clone(),
            strategy: resolver.resolve(type_name).ok(),
        })
        .collect();

    if let Some(path) = &args.class {
        let class = read_class(path)?;
        rows.extend(
            toolchain
                .generator
                .resolutions(&class)
                .into_iter()
                .map(|resolution| ResolutionRow {
                    subject: resolution.field,
                    type_name: resolution.type_name,
                    strategy: resolution.strategy,
                }),
        );
    }

    println!("{}", resolution_table(&rows));
    Ok(rows.iter().all(|row| row.strategy.is_some()))
}

fn emit(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("write output {}", path.display()))?;
            info!(path = %path.display(), "wrote artifacts");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
