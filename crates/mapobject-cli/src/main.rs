mod app;
mod config;
mod errors;

use clap::Parser;

fn main() {
    // Cargar .env si existe para obtener MAPOBJECT_*
    let _ = dotenvy::dotenv();
    env_logger::init();
    let args = app::Args::parse();

    let result = config::current().and_then(|cfg| app::execute(&args, cfg));
    if let Err(e) = result {
        eprintln!("[mapobject] {e}");
        std::process::exit(e.exit_code());
    }
}
