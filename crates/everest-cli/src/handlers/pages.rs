use anyhow::Result;
use everest_core::PageRegistry;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(registry: &PageRegistry, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_pages(registry))
}
