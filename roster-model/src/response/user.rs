//! User API responses.

use serde::{Deserialize, Serialize};

use crate::user::{RawUser, User};

/// A response from `GET /users?size={n}`.
///
/// The endpoint answers with an array of records, except that some
/// deployments collapse a batch of one into a bare object. Both shapes are
/// accepted and normalized into a sequence with [`UsersResponse::into_vec`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum UsersResponse {
    Many(Vec<RawUser>),
    One(RawUser),
}

impl UsersResponse {
    /// Normalizes the response into a sequence of raw records, in the order
    /// the API returned them.
    pub fn into_vec(self) -> Vec<RawUser> {
        match self {
            UsersResponse::Many(users) => users,
            UsersResponse::One(user) => vec![user],
        }
    }

    /// Normalizes and ingests the response.
    ///
    /// Records missing an identifier are given a fallback key here, exactly
    /// once.
    pub fn into_users(self) -> Vec<User> {
        self.into_vec().into_iter().map(User::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn array_keeps_order() {
        let res: UsersResponse = serde_json::from_value(json!([
            { "uid": "a1", "first_name": "Ana", "last_name": "Li" },
            { "uid": "b2", "first_name": "Bo", "last_name": "Ng" },
            { "uid": "c3", "first_name": "Cy", "last_name": "Ow" },
        ]))
        .unwrap();

        let keys = res
            .into_users()
            .into_iter()
            .map(|user| user.uid.to_string())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["a1", "b2", "c3"]);
    }

    #[test]
    fn bare_object_is_one_element_batch() {
        let res: UsersResponse = serde_json::from_value(json!({
            "uid": "b2",
            "first_name": "Bo",
            "last_name": "Ng",
        }))
        .unwrap();

        let users = res.into_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].uid.as_str(), "b2");
        assert_eq!(users[0].first_name, "Bo");
    }

    #[test]
    fn empty_array_is_empty_batch() {
        let res: UsersResponse = serde_json::from_value(json!([])).unwrap();

        assert!(res.into_users().is_empty());
    }

    #[test]
    fn mistyped_uid_does_not_fail_batch() {
        let res: UsersResponse = serde_json::from_value(json!([
            { "uid": 5, "first_name": "Ana", "last_name": "Li" },
            { "uid": "b2", "first_name": "Bo", "last_name": "Ng" },
        ]))
        .unwrap();

        let users = res.into_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].uid.as_str(), "5");
        assert_eq!(users[0].first_name, "Ana");
        assert_eq!(users[1].uid.as_str(), "b2");
    }
}
