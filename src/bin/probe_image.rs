use clap::Parser;
use unfurl_proxy::adapters::{build_client, HttpRangeFetcher};
use unfurl_proxy::utils::logger;
use unfurl_proxy::{ImageDimensionProbe, Settings};

#[derive(Parser)]
#[command(name = "probe_image")]
#[command(about = "Print the pixel size of a remote image from its first 512 KiB")]
struct Args {
    /// Image URL
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let settings = Settings {
        request_timeout_secs: args.timeout,
        ..Settings::default()
    };
    let probe = ImageDimensionProbe::new(HttpRangeFetcher::new(build_client(&settings)?));

    match probe.probe(&args.url).await {
        Some(dims) => println!("{}", dims),
        None => {
            println!("unknown");
            std::process::exit(2);
        }
    }
    Ok(())
}
