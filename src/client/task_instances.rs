use serde_json::Value;
use tracing::{Instrument, info_span};
use wreq::Method;

use super::{Resource, SweetProcessClient, soften};
use crate::{error::SweetProcessError, filters::TaskInstanceFilter};

impl SweetProcessClient {
    /// `GET /taskinstances/` with the filters that are set
    pub async fn try_list_task_instances(
        &self,
        filter: &TaskInstanceFilter,
    ) -> Result<Value, SweetProcessError> {
        let path = Resource::TaskInstances.collection();
        async {
            let req = self.request(Method::GET, &path).query(filter);
            let res = self
                .execute(req, "Failed to send request to SweetProcess task instances")
                .await?;
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::TaskInstances))
        .await
    }

    pub async fn list_task_instances(&self, filter: &TaskInstanceFilter) -> Option<Value> {
        soften(
            self.try_list_task_instances(filter).await,
            "retrieving task instances",
        )
    }
}
