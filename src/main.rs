use adplan::cli::commands::Cli;
use adplan::cli::run::run_command;
use adplan::AdPlan;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("ADPLAN_DB").unwrap_or_else(|_| "./adplan.db".into());

    let app = match AdPlan::new(&db_path) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing adplan: {e}");
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    match run_command(&app, cli.command, today).await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
