//! The user list screen.
//!
//! Holds the displayed sequence of users and the three mutations that can be
//! applied to it: the initial load, a refresh, and adding a single user. At
//! most one mutation is in flight at a time; others are turned away with
//! [`Outcome::Busy`] instead of being queued.

use std::{
    collections::VecDeque,
    sync::{
        PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::Error;

use futures_util::future::BoxFuture;

use roster_model::user::User;

use tracing::instrument;

/// A source of random users.
pub trait UserSource: Send + Sync + 'static {
    /// Fetches a batch of `size` users, in the order the source produced
    /// them.
    fn fetch_users(&self, size: u32) -> BoxFuture<'_, Result<Vec<User>, Error>>;
}

/// The result of a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The fetch succeeded and the list was updated.
    Applied,
    /// The fetch failed or came back empty.
    ///
    /// Loads and refreshes leave an empty list behind; adds leave the list
    /// as it was.
    Failed,
    /// Another mutation was in flight, so nothing happened.
    Busy,
}

/// The user list screen state.
#[derive(Debug)]
pub struct UserList<S> {
    source: S,
    page_size: u32,
    users: RwLock<VecDeque<User>>,
    refreshing: AtomicBool,
    in_flight: AtomicBool,
}

impl<S> UserList<S>
where
    S: UserSource,
{
    /// Creates a new, empty `UserList`.
    ///
    /// Loads and refreshes request `page_size` users.
    pub fn new(source: S, page_size: u32) -> UserList<S> {
        UserList {
            source,
            page_size,
            users: RwLock::new(VecDeque::new()),
            refreshing: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Populates the list for the first time.
    #[instrument(skip(self))]
    pub async fn load_initial(&self) -> Outcome {
        let Some(_in_flight) = self.begin() else {
            return Outcome::Busy;
        };

        self.replace_all().await
    }

    /// Throws away the current list and fetches a new one.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Outcome {
        let Some(_in_flight) = self.begin() else {
            return Outcome::Busy;
        };

        self.refreshing.store(true, Ordering::Release);
        let _refreshing = Raised(&self.refreshing);

        self.replace_all().await
    }

    /// Fetches a single user and puts them at the front of the list.
    #[instrument(skip(self))]
    pub async fn add_one(&self) -> Outcome {
        let Some(_in_flight) = self.begin() else {
            return Outcome::Busy;
        };

        match self.source.fetch_users(1).await {
            Ok(users) => match users.into_iter().next() {
                Some(user) => {
                    tracing::info!(uid = %user.uid, "adding user");
                    self.write().push_front(user);
                    Outcome::Applied
                }
                None => {
                    tracing::warn!("api returned no users, list unchanged");
                    Outcome::Failed
                }
            },
            Err(err) => {
                log_fetch_error(&err);
                Outcome::Failed
            }
        }
    }

    /// A snapshot of the displayed sequence.
    pub fn users(&self) -> Vec<User> {
        self.read().iter().cloned().collect()
    }

    /// The number of users displayed.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether a refresh is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Whether any mutation is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    async fn replace_all(&self) -> Outcome {
        match self.source.fetch_users(self.page_size).await {
            Ok(users) => {
                tracing::info!(count = users.len(), "replacing user list");
                *self.write() = users.into();
                Outcome::Applied
            }
            Err(err) => {
                log_fetch_error(&err);
                self.write().clear();
                Outcome::Failed
            }
        }
    }

    fn begin(&self) -> Option<Raised<'_>> {
        match self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Some(Raised(&self.in_flight)),
            Err(_) => {
                tracing::debug!("another request is in flight, ignoring");
                None
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, VecDeque<User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lowers a flag when dropped.
struct Raised<'a>(&'a AtomicBool);

impl Drop for Raised<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn log_fetch_error(err: &Error) {
    for err in err.chain() {
        tracing::error!("error fetching users: {}", err);
    }
}
