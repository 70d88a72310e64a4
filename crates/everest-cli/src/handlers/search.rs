use anyhow::Result;
use everest_core::{PageRegistry, SearchIndex};

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    query: &[String],
    index: &SearchIndex,
    registry: &PageRegistry,
    ctx: &HandlerContext,
) -> Result<()> {
    let text = query.join(" ");
    let hits = index.query(&text);
    tracing::debug!(query = %text, hits = hits.len(), "search finished");

    ctx.render(presenters::present_search(&text, &hits, registry))
}
