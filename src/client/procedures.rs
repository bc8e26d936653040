use serde_json::Value;
use tracing::{Instrument, info_span};
use wreq::Method;

use super::{Resource, SweetProcessClient, soften};
use crate::{error::SweetProcessError, filters::ProcedureFilter};

impl SweetProcessClient {
    /// `GET /procedures/` with the filters that are set
    pub async fn try_list_procedures(
        &self,
        filter: &ProcedureFilter,
    ) -> Result<Value, SweetProcessError> {
        let path = Resource::Procedures.collection();
        async {
            let req = self.request(Method::GET, &path).query(filter);
            let res = self
                .execute(req, "Failed to send request to SweetProcess procedures")
                .await?;
            Self::decode(res).await
        }
        .instrument(info_span!("sweetprocess", resource = %Resource::Procedures))
        .await
    }

    /// Like [`Self::try_list_procedures`], `None` on any failure
    pub async fn list_procedures(&self, filter: &ProcedureFilter) -> Option<Value> {
        soften(
            self.try_list_procedures(filter).await,
            "retrieving procedures",
        )
    }
}
