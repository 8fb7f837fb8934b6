pub mod args;
pub mod clock;
pub mod countdown;
pub mod error;
pub mod model;
pub mod state;
pub mod controller {
    pub mod countdown;
    pub mod listing;
    pub mod player;
    pub mod streamed;
}
pub mod view;

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::AppError;
pub use state::AppState;
