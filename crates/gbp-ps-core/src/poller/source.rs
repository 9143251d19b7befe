use std::future::Future;

use crate::graphql::GraphQlClient;
use crate::poller::types::{CycleError, ProcessSource};
use crate::processes::BuildProcess;

impl ProcessSource for GraphQlClient {
    fn fetch_processes(
        &self,
    ) -> impl Future<Output = Result<Vec<BuildProcess>, CycleError>> + Send {
        async move { self.get_processes().await.map_err(CycleError::from) }
    }
}
