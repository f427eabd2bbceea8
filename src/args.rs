use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "linkwalk")]
#[command(about = "Text-based web browser for the terminal")]
#[command(version)]
pub struct Args {
    /// URL to open on startup (defaults to the home page)
    pub url: Option<String>,

    /// Home page URL
    #[arg(long)]
    pub home: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<String>,
}
