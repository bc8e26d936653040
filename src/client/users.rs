use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{Instrument, info, info_span};
use wreq::Method;

use super::{Resource, SweetProcessClient, soften};
use crate::{error::SweetProcessError, filters::UserFilter};

/// Body of `POST /users/`
#[derive(Debug, Serialize)]
struct UserInvite<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(serialize_with = "as_flag")]
    is_super_manager: bool,
}

// the users endpoint takes 1/0, not a JSON boolean
fn as_flag<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*v))
}

impl SweetProcessClient {
    /// `GET /users/` with the filters that are set
    pub async fn try_list_users(&self, filter: &UserFilter) -> Result<Value, SweetProcessError> {
        let path = Resource::Users.collection();
        async {
            let req = self.request(Method::GET, &path).query(filter);
            let res = self
                .execute(req, "Failed to send request to SweetProcess users")
                .await?;
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Users))
        .await
    }

    pub async fn list_users(&self, filter: &UserFilter) -> Option<Value> {
        soften(self.try_list_users(filter).await, "retrieving users")
    }

    /// Invite a new user to the account, `POST /users/`
    pub async fn try_invite_user(
        &self,
        name: &str,
        email: &str,
        is_super_manager: bool,
    ) -> Result<Value, SweetProcessError> {
        let path = Resource::Users.collection();
        let body = UserInvite {
            name,
            email,
            is_super_manager,
        };
        async {
            let req = self.request(Method::POST, &path).json(&body);
            let res = self
                .execute(req, "Failed to send user invite to SweetProcess")
                .await?;
            info!("Invited user {email}");
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Users))
        .await
    }

    pub async fn invite_user(
        &self,
        name: &str,
        email: &str,
        is_super_manager: bool,
    ) -> Option<Value> {
        soften(
            self.try_invite_user(name, email, is_super_manager).await,
            "inviting user",
        )
    }

    /// Partial update, `PATCH /users/{id}/` with `data` sent as is
    pub async fn try_update_user<B>(&self, user_id: u64, data: &B) -> Result<Value, SweetProcessError>
    where
        B: Serialize + ?Sized,
    {
        let path = Resource::Users.item(user_id);
        async {
            let req = self.request(Method::PATCH, &path).json(data);
            let res = self
                .execute(req, "Failed to send user update to SweetProcess")
                .await?;
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Users, user_id))
        .await
    }

    pub async fn update_user<B>(&self, user_id: u64, data: &B) -> Option<Value>
    where
        B: Serialize + ?Sized,
    {
        soften(self.try_update_user(user_id, data).await, "updating user")
    }

    /// `DELETE /users/{id}/`, yields the status code of the response
    pub async fn try_delete_user(&self, user_id: u64) -> Result<u16, SweetProcessError> {
        let path = Resource::Users.item(user_id);
        async {
            let req = self.request(Method::DELETE, &path);
            let res = self
                .execute(req, "Failed to send user deletion to SweetProcess")
                .await?;
            info!("Deleted user {user_id}");
            Ok::<_, SweetProcessError>(res.status().as_u16())
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Users, user_id))
        .await
    }

    pub async fn delete_user(&self, user_id: u64) -> Option<u16> {
        soften(self.try_delete_user(user_id).await, "deleting user")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_invite_body_sends_flag_as_integer() {
        let body = UserInvite {
            name: "Ada",
            email: "ada@example.com",
            is_super_manager: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "Ada", "email": "ada@example.com", "is_super_manager": 1})
        );
    }
}
