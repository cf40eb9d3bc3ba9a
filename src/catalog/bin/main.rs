use std::io::{BufRead, Write};
use tracing::{error, info};
use litstore::catalog::controller::handle;
use litstore::catalog::factory;
use litstore::core::controller::AppState;
use litstore::core::library::LibraryResult;
use litstore::core::repository::RepositoryStore;
use litstore::utils::logs::setup_tracing;

const DEFAULT_DATA_DIR: &str = "data";

fn main() -> LibraryResult<()> {
    setup_tracing();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let state = AppState::new(data_dir.as_str(), RepositoryStore::JsonFile);
    info!(data_dir = state.config.data_dir.as_str(), "starting catalog");

    let mut svc = factory::create_catalog_service(&state.config, state.store)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match handle(svc.as_mut(), line.as_str()) {
            Some(reply) => {
                writeln!(stdout, "{}", reply)?;
                stdout.flush()?;
            }
            None => break,
        }
    }

    if let Err(err) = svc.save_all() {
        error!(error = %err, "final save failed");
        return Err(err);
    }
    info!("catalog saved, bye");
    Ok(())
}
