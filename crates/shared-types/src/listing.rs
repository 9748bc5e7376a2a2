/// Where a view's list of records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the database.
    Live,
    /// Built-in sample rows substituted after a failed fetch.
    Sample,
}

/// In-memory page of records backing one dashboard view.
///
/// Remote mutations and local reconciliation are kept separate: a view
/// first issues the server call, then patches the cache with
/// [`ListCache::update_where`] or [`ListCache::remove_where`] so the list
/// matches without a re-fetch. A failed server call patches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCache<T> {
    items: Vec<T>,
    source: DataSource,
}

impl<T> ListCache<T> {
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            source: DataSource::Live,
        }
    }

    pub fn sample(items: Vec<T>) -> Self {
        Self {
            items,
            source: DataSource::Sample,
        }
    }

    /// Build from a fetch result, substituting `fallback` rows on failure.
    pub fn from_fetch<E>(result: Result<Vec<T>, E>, fallback: impl FnOnce() -> Vec<T>) -> Self {
        match result {
            Ok(items) => Self::live(items),
            Err(_) => Self::sample(fallback()),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn is_sample(&self) -> bool {
        self.source == DataSource::Sample
    }

    /// Apply `patch` to every record matching `pred`. Records that do not
    /// match are left untouched.
    pub fn update_where(&mut self, pred: impl Fn(&T) -> bool, mut patch: impl FnMut(&mut T)) {
        for item in self.items.iter_mut().filter(|i| pred(i)) {
            patch(item);
        }
    }

    /// Drop every record matching `pred`.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) {
        self.items.retain(|i| !pred(i));
    }

    /// First record matching `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|i| pred(i))
    }
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self::live(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        status: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                status: "pending",
            },
            Row {
                id: 2,
                status: "approved",
            },
            Row {
                id: 3,
                status: "pending",
            },
        ]
    }

    #[test]
    fn successful_fetch_is_live() {
        let cache = ListCache::from_fetch::<()>(Ok(rows()), Vec::new);
        assert_eq!(cache.source(), DataSource::Live);
        assert_eq!(cache.len(), 3);
        assert!(!cache.is_sample());
    }

    #[test]
    fn failed_fetch_substitutes_sample_rows() {
        let cache = ListCache::from_fetch(Err("network down"), rows);
        assert!(cache.is_sample());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn update_where_patches_only_matching_rows() {
        let mut cache = ListCache::live(rows());
        cache.update_where(|r| r.id == 1, |r| r.status = "approved");

        assert_eq!(cache.items()[0].status, "approved");
        assert_eq!(cache.items()[1].status, "approved");
        assert_eq!(cache.items()[2].status, "pending");
    }

    #[test]
    fn remove_where_drops_matching_rows() {
        let mut cache = ListCache::live(rows());
        cache.remove_where(|r| r.id == 2);

        assert_eq!(cache.len(), 2);
        assert!(cache.find(|r| r.id == 2).is_none());
        assert!(cache.find(|r| r.id == 1).is_some());
    }

    #[test]
    fn default_cache_is_empty_and_live() {
        let cache: ListCache<Row> = ListCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.source(), DataSource::Live);
    }
}
