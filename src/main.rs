mod aggregate;
mod cli;
mod config;
mod error;
mod inventory;
mod pipeline;
mod reference;
mod report;
mod types;
mod ui;

use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    info!("Inventory Parser");
    info!("Inventory directory: {}", args.directory.display());
    info!("Characters: {}", args.characters);

    let plan = match config::build_run_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Nothing is printed until every file has been read and parsed
    let outcome = match pipeline::run(&plan) {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let sections = report::build_sections(outcome.items, &plan.report);

    if let Err(e) = report::print_report(&sections, &plan.report) {
        ui::print_error(&format!("Failed to write report: {}", e));
        std::process::exit(1);
    }

    if let Some(ref path) = plan.json_output {
        match report::export_json_report(&sections, &plan.report, &plan.characters, &outcome.diagnostics, path) {
            Ok(()) => info!("JSON report written to {}", path.display()),
            Err(e) => {
                ui::print_error(&format!("Failed to write JSON report to {}: {}", path.display(), e));
                std::process::exit(1);
            }
        }
    }
}
