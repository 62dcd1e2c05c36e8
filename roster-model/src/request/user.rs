//! Users endpoint request models.

use serde::{Deserialize, Serialize};

/// The batch size the API serves when nothing else is asked for.
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// Query for the `GET /users` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListUsersQuery {
    /// How many random users should be generated.
    pub size: u32,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        ListUsersQuery {
            size: DEFAULT_BATCH_SIZE,
        }
    }
}
