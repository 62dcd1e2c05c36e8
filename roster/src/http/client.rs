//! Random user API client.

use std::sync::Arc;

use anyhow::Error;

use derive_more::{Display, Error};

use futures_util::future::BoxFuture;

use http::{Method, StatusCode};

use roster_model::user::User;

use crate::config::ApiConfig;
use crate::http::request::user::ListUsers;
use crate::screen::UserSource;

/// A client used to access the HTTP API.
///
/// Cheaply cloneable, as it uses an `Arc` to track internal state and manage
/// connections.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    state: Arc<ClientState>,
}

#[derive(Debug)]
struct ClientState {
    endpoint: String,
    page_size: u32,
}

impl Client {
    /// Creates a new client.
    pub fn new(config: &ApiConfig) -> Result<Client, Error> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .deflate(true)
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        let state = ClientState {
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            page_size: config.page_size,
        };

        Ok(Client {
            http,
            state: Arc::new(state),
        })
    }

    /// The batch size used when a request does not name one.
    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    /// Generates a batch of random users.
    pub fn list_users(&self) -> ListUsers {
        ListUsers::new(self.clone())
    }

    /// Makes a generic request to the server.
    pub(super) fn request(&self, method: Method, url: impl AsRef<str>) -> Request {
        Request::new(self.clone(), method, url)
    }
}

impl UserSource for Client {
    fn fetch_users(&self, size: u32) -> BoxFuture<'_, Result<Vec<User>, Error>> {
        self.list_users().size(size).into_future()
    }
}

/// A HTTP client request.
#[derive(Debug)]
pub struct Request {
    client: Client,
    request: reqwest::RequestBuilder,
}

impl Request {
    /// Creates a new `Request`.
    ///
    /// The url is appended to the API endpoint.
    pub fn new(client: Client, method: Method, url: impl AsRef<str>) -> Request {
        let url = format!("{}{}", client.state.endpoint, url.as_ref());

        Request {
            request: client.http.request(method, url),
            client,
        }
    }

    /// Makes a general request to the API.
    ///
    /// Any response that is not a success is turned into a [`StatusError`].
    pub async fn send(self) -> Result<reqwest::Response, Error> {
        let request = self.request.build()?;

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let res = self.client.http.execute(request).await?;

        if res.status().is_success() {
            Ok(res)
        } else {
            Err(StatusError {
                status: res.status(),
            }
            .into())
        }
    }
}

/// The API answered with a non-success status.
#[derive(Debug, Display, Error)]
#[display("api responded with status {status}")]
pub struct StatusError {
    /// The status of the response.
    pub status: StatusCode,
}
