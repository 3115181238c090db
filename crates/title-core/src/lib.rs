pub mod error;
pub mod favorites;
pub mod filter;
pub mod mock;
pub mod request;
pub mod strategy;
pub mod types;

pub use error::{FavoriteError, GenerationError, Result};
pub use favorites::{
    FavoriteQuery, FavoriteSort, FavoriteStore, FavoriteTitle, NewFavorite, MAX_FAVORITES_PER_USER,
};
pub use filter::{extract_titles, MAX_TITLES, MAX_TITLE_CHARS, MIN_TITLES};
pub use mock::{synthesize_titles, MockStrategy};
pub use request::{GenerateRequestBody, GenerationRequest, SamplesInput};
pub use strategy::{Credential, GenerationStrategy, PLACEHOLDER_API_KEY};
pub use types::{GenerationMode, GenerationResult, TokenUsage};
