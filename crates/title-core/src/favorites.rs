//! Per-user saved titles, kept in memory for the lifetime of the process.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::FavoriteError;

const DEFAULT_RATING: u8 = 5;

/// Upper bound on saved titles per user.
pub const MAX_FAVORITES_PER_USER: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteTitle {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub tags: Vec<String>,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFavorite {
    pub title: String,
    pub topic: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteSort {
    #[default]
    Latest,
    Rating,
    Topic,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoriteQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub sort: FavoriteSort,
}

impl FavoriteQuery {
    fn matches(&self, favorite: &FavoriteTitle) -> bool {
        let term_matches = match self.q.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                favorite.title.to_lowercase().contains(&term)
                    || favorite.topic.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let tag_matches = match self.tag.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => favorite.tags.iter().any(|t| t == tag),
            _ => true,
        };

        term_matches && tag_matches
    }
}

impl NewFavorite {
    fn into_favorite(self) -> Result<FavoriteTitle, FavoriteError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FavoriteError::Invalid("title must not be empty".to_string()));
        }

        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(FavoriteError::Invalid("topic must not be empty".to_string()));
        }

        let rating = self.rating.unwrap_or(DEFAULT_RATING);
        if !(1..=5).contains(&rating) {
            return Err(FavoriteError::Invalid(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_string());
            }
        }

        Ok(FavoriteTitle {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            topic: topic.to_string(),
            tags,
            rating,
            created_at: Utc::now(),
        })
    }
}

#[derive(Default)]
pub struct FavoriteStore {
    by_user: RwLock<HashMap<String, Vec<FavoriteTitle>>>,
}

impl FavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(
        &self,
        user_id: &str,
        new: NewFavorite,
    ) -> Result<FavoriteTitle, FavoriteError> {
        let favorite = new.into_favorite()?;

        let mut by_user = self.by_user.write().await;
        let favorites = by_user.entry(user_id.to_string()).or_default();
        if favorites.len() >= MAX_FAVORITES_PER_USER {
            return Err(FavoriteError::Invalid(format!(
                "at most {MAX_FAVORITES_PER_USER} favorites can be saved"
            )));
        }
        favorites.push(favorite.clone());

        log::debug!("[{}] Saved favorite {}", user_id, favorite.id);
        Ok(favorite)
    }

    /// Filters, then sorts. `Latest` is newest first; the other orders are
    /// stable, so equal keys keep insertion order.
    pub async fn list(&self, user_id: &str, query: &FavoriteQuery) -> Vec<FavoriteTitle> {
        let by_user = self.by_user.read().await;
        let Some(favorites) = by_user.get(user_id) else {
            return Vec::new();
        };

        let mut matched: Vec<FavoriteTitle> = favorites
            .iter()
            .filter(|favorite| query.matches(favorite))
            .cloned()
            .collect();

        match query.sort {
            FavoriteSort::Latest => matched.reverse(),
            FavoriteSort::Rating => matched.sort_by(|a, b| b.rating.cmp(&a.rating)),
            FavoriteSort::Topic => matched.sort_by(|a, b| a.topic.cmp(&b.topic)),
        }

        matched
    }

    pub async fn remove(&self, user_id: &str, id: &str) -> Result<FavoriteTitle, FavoriteError> {
        let mut by_user = self.by_user.write().await;
        let favorites = by_user
            .get_mut(user_id)
            .ok_or_else(|| FavoriteError::NotFound(id.to_string()))?;

        let position = favorites
            .iter()
            .position(|favorite| favorite.id == id)
            .ok_or_else(|| FavoriteError::NotFound(id.to_string()))?;

        let removed = favorites.remove(position);
        if favorites.is_empty() {
            by_user.remove(user_id);
        }

        Ok(removed)
    }

    /// Distinct tags across the user's favorites, in first-seen order.
    pub async fn tags(&self, user_id: &str) -> Vec<String> {
        let by_user = self.by_user.read().await;
        let mut tags: Vec<String> = Vec::new();

        for tag in by_user
            .get(user_id)
            .into_iter()
            .flatten()
            .flat_map(|favorite| favorite.tags.iter())
        {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }

        tags
    }
}
