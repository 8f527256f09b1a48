//! Commands for the search workflow.
//!
//! These run the catalog lookup off the UI loop and send the outcome back
//! through the screen's message channel; form state is only ever mutated on
//! the main loop.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::catalog::CatalogClient;
use crate::command::Command;
use crate::screen::search::message::SearchMsg;

/// Look up a part at one supplier's catalog.
pub struct SearchPartCmd {
    client: Arc<dyn CatalogClient>,
    supplier: String,
    part_number: String,
    tx: UnboundedSender<SearchMsg>,
}

impl SearchPartCmd {
    pub fn new(
        client: Arc<dyn CatalogClient>,
        supplier: String,
        part_number: String,
        tx: UnboundedSender<SearchMsg>,
    ) -> Self {
        Self {
            client,
            supplier,
            part_number,
            tx,
        }
    }
}

#[async_trait]
impl Command for SearchPartCmd {
    fn name(&self) -> String {
        format!("Searching {} for {}", self.supplier, self.part_number)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        match self.client.search(&self.supplier, &self.part_number).await {
            Ok(record) => {
                let _ = self.tx.send(SearchMsg::ResultLoaded(record));
            }
            Err(e) => {
                let _ = self.tx.send(SearchMsg::SearchFailed(e.to_string()));
            }
        }
        Ok(())
    }
}
