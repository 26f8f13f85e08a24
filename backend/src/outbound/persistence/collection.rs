//! Insertion-ordered record collection shared across actix workers.

use std::sync::{PoisonError, RwLock};

/// Failure to acquire the collection lock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A writer panicked while holding the lock.
    #[error("collection lock poisoned")]
    Poisoned,
}

impl<G> From<PoisonError<G>> for CollectionError {
    fn from(_: PoisonError<G>) -> Self {
        Self::Poisoned
    }
}

/// Ordered sequence of records of one type.
///
/// Lookups scan linearly and act on the first match. Inserts never
/// deduplicate. Every find-then-mutate sequence runs inside one write-lock
/// critical section.
///
/// # Examples
/// ```
/// use in_n_out_books::outbound::persistence::Collection;
///
/// let numbers = Collection::from_records(vec![1, 2, 3, 2]);
/// assert!(numbers.delete_one(|n| *n == 2).expect("lock"));
/// assert_eq!(numbers.find().expect("lock"), vec![1, 3, 2]);
/// ```
#[derive(Debug)]
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    /// Empty collection.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Collection pre-populated in the given order.
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, CollectionError> {
        Ok(self.records.read()?.len())
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> Result<bool, CollectionError> {
        Ok(self.records.read()?.is_empty())
    }

    /// Append a record as given.
    pub fn insert(&self, record: T) -> Result<(), CollectionError> {
        self.records.write()?.push(record);
        Ok(())
    }

    /// Build a record from the current contents and append it atomically.
    ///
    /// `build` sees the records as they are under the write lock, so values
    /// derived from them (such as the next free id) cannot race another
    /// insert.
    pub fn insert_with<F>(&self, build: F) -> Result<T, CollectionError>
    where
        F: FnOnce(&[T]) -> T,
        T: Clone,
    {
        let mut records = self.records.write()?;
        let record = build(&records);
        records.push(record.clone());
        Ok(record)
    }

    /// Apply `patch` to the first record matching `predicate`.
    ///
    /// Returns `false` when nothing matched.
    pub fn update_one<P, F>(&self, predicate: P, patch: F) -> Result<bool, CollectionError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write()?;
        match records.iter_mut().find(|record| predicate(record)) {
            Some(record) => {
                patch(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first record matching `predicate`.
    ///
    /// Returns `false` when nothing matched.
    pub fn delete_one<P>(&self, predicate: P) -> Result<bool, CollectionError>
    where
        P: Fn(&T) -> bool,
    {
        let mut records = self.records.write()?;
        match records.iter().position(|record| predicate(record)) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: Clone> Collection<T> {
    /// Snapshot of every record in insertion order.
    pub fn find(&self) -> Result<Vec<T>, CollectionError> {
        Ok(self.records.read()?.clone())
    }

    /// First record matching `predicate`.
    pub fn find_one<P>(&self, predicate: P) -> Result<Option<T>, CollectionError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .records
            .read()?
            .iter()
            .find(|record| predicate(record))
            .cloned())
    }
}
