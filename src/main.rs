use clap::Parser;

use eternum::api::MemorialClient;
use eternum::cli::{Cli, EngineChoice};
use eternum::prefs::PrefStore;
use eternum::trace::init_tracing;
use eternum::ui::runtime::{run, EngineKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.prefs.clone().unwrap_or_else(PrefStore::default_path);
    let store = match PrefStore::open(path.clone()).await {
        Ok(store) => store,
        Err(err) => {
            // An unreadable preference file means defaults, not a
            // refusal to start.
            tracing::warn!("preferences unavailable, using defaults: {}", err);
            PrefStore::fallback(path)
        }
    };

    let client = MemorialClient::new(cli.base_url.clone());
    let engine = match cli.engine {
        EngineChoice::Espeak => EngineKind::Espeak {
            program: cli.espeak_program.clone(),
        },
        EngineChoice::Null => EngineKind::Null,
    };

    run(client, store, engine).await
}
