use clap::Parser;
use literal_dns_application::use_cases::ResolveLiteralUseCase;
use literal_dns_domain::CliOverrides;
use literal_dns_infrastructure::dns::LiteralRequestHandler;
use literal_dns_infrastructure::system::SystemClock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "literal-dns")]
#[command(version)]
#[command(about = "Authoritative DNS server that answers AAAA queries for IPv6 literals")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone to serve
    #[arg(long)]
    zone: Option<String>,

    /// DNS port (UDP and TCP)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Nameserver advertised in SOA and NS answers
    #[arg(long)]
    ns: Option<String>,

    /// SOA mailbox (defaults to hostmaster.<zone>)
    #[arg(long)]
    mbox: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Write a CPU profile to this file
    #[arg(long, value_name = "FILE")]
    cpuprofile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        zone: cli.zone,
        nameserver: cli.ns,
        mailbox: cli.mbox,
        log_level: cli.log_level,
        debug: cli.debug,
        cpuprofile: cli.cpuprofile,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting literal-dns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_source(cli.config.as_deref());

    if let Some(path) = &config.logging.cpuprofile {
        warn!(path = %path.display(), "CPU profiling is not available in this build, ignoring");
    }

    let zone = Arc::new(config.zone.to_zone_config()?);
    info!(
        zone = zone.zone(),
        nameserver = zone.nameserver(),
        mailbox = zone.mailbox(),
        negative_response = ?zone.negative_response,
        "Serving zone"
    );

    let use_case = Arc::new(ResolveLiteralUseCase::new(zone, Arc::new(SystemClock)));

    if let Err(e) = use_case.current_serial() {
        error!(error = %e, "Cannot derive SOA serial from the system date");
        return Err(e.into());
    }

    let socket_addr = config.server.socket_addr()?;
    let handler = LiteralRequestHandler::new(use_case);

    if let Err(e) =
        server::start_dns_server(socket_addr, handler, server::shutdown_signal()).await
    {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
