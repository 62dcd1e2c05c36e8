//! User-related queries and requests.

use futures_util::future::BoxFuture;

use http::Method;

use roster_model::{request::user::ListUsersQuery, response::user::UsersResponse, user::User};

use crate::http::Client;

use anyhow::Error;

/// Generates a batch of random users.
#[derive(Debug)]
pub struct ListUsers {
    client: Client,
    size: Option<u32>,
}

impl ListUsers {
    /// Creates a new `ListUsers`.
    pub fn new(client: Client) -> ListUsers {
        ListUsers { client, size: None }
    }

    /// How many users should be generated.
    ///
    /// Defaults to the client's page size.
    pub fn size(self, size: u32) -> ListUsers {
        ListUsers {
            size: Some(size),
            ..self
        }
    }
}

impl IntoFuture for ListUsers {
    type Output = Result<Vec<User>, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let query = serde_urlencoded::ser::to_string(&ListUsersQuery {
                size: self.size.unwrap_or_else(|| self.client.page_size()),
            })?;

            let request = self
                .client
                .request(Method::GET, format!("/users?{}", query))
                .send()
                .await?;

            let users = request.json::<UsersResponse>().await?.into_users();

            tracing::debug!(count = users.len(), "fetched users");

            Ok(users)
        })
    }
}
