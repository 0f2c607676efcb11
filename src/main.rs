use chartview::config::ServeConfig;
use chartview::serve;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chartview")]
#[command(about = "Rotating browser view of batch-generated simulation charts")]
#[command(long_about = "\
Rotating browser view of batch-generated simulation charts

Point chartview at the directory your batch simulation writes its per-run
output into. Each page load at / shows one run's chart images and the
test_config it was launched with, then advances to the next run, wrapping
around at the end.

Expected layout:

  results/
  ├── baseline-2026-08-12/
  │   ├── test_config            # Shown in a text box on the run page
  │   ├── gdp.png                # Chart images, shown in listing order
  │   └── lending.png
  └── stress-2026-08-13/
      ├── test_config
      └── gdp.png

Runs added or removed while the server is up are picked up on the next
page load; nothing is cached.")]
#[command(version)]
struct Cli {
    /// Directory containing one subdirectory per simulation run
    root: PathBuf,

    /// TCP port to listen on
    #[arg(long, default_value_t = 1234)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = ServeConfig {
        root: cli.root,
        port: cli.port,
    };

    // Validate before binding so a bad root never serves broken pages.
    if let Err(err) = config.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    if let Err(err) = serve::serve(config.root, config.port).await {
        if err.kind() == io::ErrorKind::AddrInUse {
            eprintln!("Error: port {} is already in use — is another chartview running?", config.port);
        } else {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}
