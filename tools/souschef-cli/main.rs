use clap::Parser;
use souschef::format::pluralize;
use souschef::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Inspect a recipe payload: instruction text, readiness, aggregated
/// shopping and equipment lists, and the dependency graph.
#[derive(Parser, Debug)]
#[command(name = "souschef-cli", version, about)]
struct Args {
    /// Path to a recipe JSON payload
    #[arg(short, long)]
    recipe: String,

    /// Serving-size multiplier applied to all quantities
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Comma-separated 1-based step numbers already completed
    #[arg(short, long)]
    completed: Option<String>,

    /// Emit the dependency graph as Graphviz DOT and exit
    #[arg(long)]
    dot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let payload = fs::read_to_string(&args.recipe)?;
    let recipe = ApiRecipe::parse(&payload)?;
    let graph = StepGraph::build(&recipe);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dot {
        write!(out, "{}", graph.to_dot())?;
        out.flush()?;
        return Ok(());
    }

    writeln!(out, "# {}", recipe.name)?;
    writeln!(out)?;
    writeln!(out, "{}", render_recipe_text(&recipe, args.scale))?;

    let mut pending = vec![true; recipe.steps.len()];
    if let Some(completed) = &args.completed {
        for part in completed.split(',') {
            if let Ok(number) = part.trim().parse::<usize>() {
                if (1..=pending.len()).contains(&number) {
                    pending[number - 1] = false;
                }
            }
        }
    }

    writeln!(out, "\n## Readiness")?;
    for step in &recipe.steps {
        let number = step.display_number();
        let state = if !pending[number - 1] {
            "done"
        } else if graph.step_is_blocked(number, &pending) {
            "blocked"
        } else {
            "ready"
        };
        writeln!(out, "{}. {} [{}]", number, step.preparation, state)?;
    }

    let scaled = [ScaledRecipe::new(&recipe, args.scale)];

    writeln!(out, "\n## Shopping list")?;
    for item in aggregate_ingredients(&scaled) {
        if let Some(catalog) = item.catalog() {
            let amount = format_quantity(
                item.quantity.min,
                item.quantity.max,
                &item.unit.name,
                &item.unit.plural_name,
                1.0,
            );
            let name = pluralize(
                &catalog.name,
                &catalog.plural_name,
                clean_float(item.quantity.min),
            );
            writeln!(out, "- {} {}", amount, name)?;
        }
    }

    writeln!(out, "\n## Equipment")?;
    for item in aggregate_instruments(&scaled) {
        if let Some(catalog) = item.catalog() {
            writeln!(
                out,
                "- {} {}",
                format_number(clean_float(item.quantity.min)),
                pluralize(
                    &catalog.name,
                    &catalog.plural_name,
                    clean_float(item.quantity.min)
                )
            )?;
        }
    }
    for item in aggregate_vessels(&scaled) {
        if let Some(catalog) = item.catalog() {
            writeln!(
                out,
                "- {} {}",
                format_number(clean_float(item.quantity.min)),
                pluralize(
                    &catalog.name,
                    &catalog.plural_name,
                    clean_float(item.quantity.min)
                )
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
