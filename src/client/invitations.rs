use serde::Serialize;
use serde_json::Value;
use tracing::{Instrument, info, info_span};
use wreq::Method;

use super::{Resource, SweetProcessClient, soften};
use crate::error::SweetProcessError;

#[derive(Debug, Serialize)]
struct Invitation<'a> {
    send_mail: bool,
    content_type: &'a str,
    permission: &'a str,
    object_id: u64,
    to_user_id: &'a str,
}

impl SweetProcessClient {
    /// Invite a user to an object such as a team, `POST /invitations/`
    ///
    /// `to_user_id` is the API URL of the user. The endpoint expects a list of
    /// invitations, so the body is a one element array.
    pub async fn try_create_invitation(
        &self,
        send_mail: bool,
        content_type: &str,
        permission: &str,
        object_id: u64,
        to_user_id: &str,
    ) -> Result<Value, SweetProcessError> {
        let path = Resource::Invitations.collection();
        let body = [Invitation {
            send_mail,
            content_type,
            permission,
            object_id,
            to_user_id,
        }];
        async {
            let req = self.request(Method::POST, &path).json(&body);
            let res = self
                .execute(req, "Failed to send invitation to SweetProcess")
                .await?;
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Invitations))
        .await
    }

    pub async fn create_invitation(
        &self,
        send_mail: bool,
        content_type: &str,
        permission: &str,
        object_id: u64,
        to_user_id: &str,
    ) -> Option<Value> {
        soften(
            self.try_create_invitation(send_mail, content_type, permission, object_id, to_user_id)
                .await,
            "creating invitation",
        )
    }

    /// Remove a user from a team, `DELETE /teamusers/{id}/`
    pub async fn try_delete_team_user(&self, team_user_id: u64) -> Result<u16, SweetProcessError> {
        let path = Resource::TeamUsers.item(team_user_id);
        async {
            let req = self.request(Method::DELETE, &path);
            let res = self
                .execute(req, "Failed to send team user deletion to SweetProcess")
                .await?;
            info!("Removed team user {team_user_id}");
            Ok::<_, SweetProcessError>(res.status().as_u16())
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::TeamUsers, team_user_id))
        .await
    }

    pub async fn delete_team_user(&self, team_user_id: u64) -> Option<u16> {
        soften(
            self.try_delete_team_user(team_user_id).await,
            "deleting team user",
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_invitation_body_is_single_element_array() {
        let body = [Invitation {
            send_mail: true,
            content_type: "team",
            permission: "view",
            object_id: 12,
            to_user_id: "https://www.sweetprocess.com/api/v1/users/5/",
        }];
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!([{
                "send_mail": true,
                "content_type": "team",
                "permission": "view",
                "object_id": 12,
                "to_user_id": "https://www.sweetprocess.com/api/v1/users/5/",
            }])
        );
    }
}
