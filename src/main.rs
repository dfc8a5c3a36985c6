use lol_match_stats::config::Config;
use lol_match_stats::history::MatchHistory;
use lol_match_stats::{lol_api, server, Result, ResultExt};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn do_main() -> Result<()> {

    // a missing .env is fine, the environment may already be set
    let _ = dotenvy::dotenv();
    init_logging();

    let config = Config::load()?;

    //instance ctx
    let ctx = lol_api::Context::new(&config.api_key, config.region, &config.ddragon_version)?;
    let history = MatchHistory::new(ctx);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await
        .chain_err(|| format!("Unable to listen on {}", addr))?;
    tracing::info!(%addr, region = %config.region, "server is running at http://{}", addr);

    server::serve(listener, history).await?;

    Ok(())
}

/// Workaround to integrate error-chain with async main function
/// in tokio. Pretty much just an expansion of the `quick_main!`
/// macro provided by error-chain
#[tokio::main]
async fn main() {
    if let Err(ref e) = do_main().await {
        use error_chain::ChainedError;
        use std::io::Write; // trait which holds `display_chain`
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
        ::std::process::exit(1);
    }
}
