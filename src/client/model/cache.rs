use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::error::ApiError,
    model::{
        club::{ClubDto, ClubRequestDto},
        event::EventDto,
    },
};

/// Records with a backend id, so cached lists can replace and remove them in place.
pub trait Identified {
    fn id(&self) -> i32;
}

impl Identified for ClubDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Identified for ClubRequestDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Identified for EventDto {
    fn id(&self) -> i32 {
        self.id
    }
}

/// A cached collection with its loading flag and the message of the last failed action.
#[derive(Clone, Debug, PartialEq)]
pub struct ListCache<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Identified + Clone> ListCache<T> {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, error: &ApiError) {
        self.loading = false;
        self.error = Some(error.message.clone());
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
        self.loading = false;
    }

    /// Replaces the item with the same id, or appends it when it is not cached yet.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|cached| cached.id() == item.id()) {
            Some(cached) => *cached = item,
            None => self.items.push(item),
        }
        self.loading = false;
    }

    pub fn remove(&mut self, id: i32) {
        self.items.retain(|item| item.id() != id);
        self.loading = false;
    }
}

/// Runs a store action against a cached list.
///
/// Marks the list as loading, awaits `action`, then applies the result with `apply`. A failure is
/// logged, recorded on the list and returned to the caller.
pub async fn track<T, R, Fut, F>(
    mut state: Signal<ListCache<T>>,
    label: &str,
    action: Fut,
    apply: F,
) -> Result<R, ApiError>
where
    T: Identified + Clone + 'static,
    Fut: Future<Output = Result<R, ApiError>>,
    F: FnOnce(&mut ListCache<T>, &R),
{
    state.write().start_loading();

    match action.await {
        Ok(value) => {
            apply(&mut *state.write(), &value);
            Ok(value)
        }
        Err(error) => {
            tracing::error!("Failed to {}: {}", label, error);
            state.write().fail(&error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::club::ClubStatus;

    fn club(id: i32, name: &str) -> ClubDto {
        ClubDto {
            id,
            name: name.to_string(),
            description: String::new(),
            status: ClubStatus::Active,
            coordinator: None,
            created_at: None,
            creation_request: None,
        }
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut list = ListCache::default();
        list.replace_all(vec![club(1, "Chess"), club(2, "Go")]);

        list.upsert(club(2, "Go & Shogi"));
        list.upsert(club(3, "Bridge"));

        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[1].name, "Go & Shogi");
    }

    #[test]
    fn remove_drops_only_matching_id() {
        let mut list = ListCache::default();
        list.replace_all(vec![club(1, "Chess"), club(2, "Go")]);

        list.remove(1);

        assert_eq!(list.items, vec![club(2, "Go")]);
    }

    #[test]
    fn failure_keeps_items_and_records_message() {
        let mut list = ListCache::default();
        list.append(club(1, "Chess"));
        list.start_loading();

        list.fail(&ApiError::new(500, "Failed to fetch clubs"));

        assert!(!list.loading);
        assert_eq!(list.error.as_deref(), Some("Failed to fetch clubs"));
        assert_eq!(list.items.len(), 1);

        list.start_loading();
        assert_eq!(list.error, None);
    }
}
