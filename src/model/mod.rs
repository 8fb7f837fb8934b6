pub mod card;
pub mod classify;
pub mod image;
mod lenient;
pub mod payload;
pub mod record;
pub mod stream;
pub mod utils;

pub use card::{CardAction, CardList, CardModel, RenderOptions, build_cards, build_upcoming_cards};
pub use classify::{LiveIdSet, annotate_live, in_live_set, is_football, is_live, live_id_set};
pub use image::{ResolvedImage, resolve_image};
pub use payload::{Payload, normalize_response, normalize_values};
pub use record::{MatchId, MatchRecord, StreamSource, Team, Teams};
pub use stream::{StreamDescriptor, decode_streams};
pub use utils::escape_quotes;
