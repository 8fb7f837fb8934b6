use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base of the match listing API; `/live`, `/football` and `/football/popular` are appended.
    #[arg(
        long,
        value_name = "API_BASE",
        default_value = "https://streamed.pk/api/matches",
        value_parser = crate::args::validation::check_http_url
    )]
    pub api_base: String,
    /// Host serving `/stream/{source}/{id}`.
    #[arg(
        long,
        value_name = "STREAM_HOST",
        default_value = "https://streamed.pk/api",
        value_parser = crate::args::validation::check_http_url
    )]
    pub stream_host: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// Directory holding `styles.css` and `assets/images/logo.png`.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
    /// A countdown modal nobody has polled for this long is stopped.
    #[arg(long, value_name = "SECONDS", default_value = "30")]
    pub countdown_idle_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_base: String,
    pub stream_host: String,
    pub bind: String,
    pub port: u16,
    pub static_dir: String,
    pub countdown_idle_secs: u64,
}
