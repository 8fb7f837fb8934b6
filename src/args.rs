use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            api_base: args.api_base.trim_end_matches('/').to_string(),
            stream_host: args.stream_host.trim_end_matches('/').to_string(),
            bind: args.bind,
            port: args.port,
            static_dir: args.static_dir,
            countdown_idle_secs: args.countdown_idle_secs,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.bind.clone(), self.port)
    }
}
