use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the voting API
    #[arg(long, default_value = "http://localhost:3001/api")]
    api_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = ballot_client::run(args.api_url).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
