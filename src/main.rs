//! dsge-scaffold entry point.
//! Parses flags, sets up logging and drives the scaffolder.

use dsge_scaffold::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Scaffolder,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let scaffolder = Scaffolder::new(args.scaffold_options())?;

    let abs_base = std::path::absolute(scaffolder.base_dir())?;
    log::debug!(
        "Scaffolding in {} with {} layout",
        abs_base.display(),
        scaffolder.layout()
    );

    let plan = scaffolder.plan()?;

    if args.dry_run {
        for operation in &plan {
            println!("{operation}");
        }
        println!("Dry run: {} operations planned, nothing written.", plan.len());
        return Ok(());
    }

    let summary = scaffolder.execute(&plan, |operation| {
        println!("{}: '{}'", operation.action(), operation.target().display());
    })?;

    println!(
        "Template generation completed successfully in {} ({} source files copied).",
        abs_base.join(dsge_scaffold::constants::OUTPUT_DIR).display(),
        summary.sources
    );
    Ok(())
}
