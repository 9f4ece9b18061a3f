use clap::Parser;

#[derive(Parser)]
#[command(
    name = "transcript-server",
    about = "Serve YouTube transcripts as timestamped lines over HTTP",
    version
)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}
