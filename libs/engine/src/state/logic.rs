use alloy::primitives::BlockNumber;

use crate::args::Args;
use crate::error::FetchError;
use crate::source::filter::PageFilter;
use crate::source::handle::SourceInput;
use crate::state::event::Step;

/// Pagination state of one fetch run.
///
/// `api_page` is the page sent to the explorer and is reset each time the
/// query is re-anchored on a start block. `display_page` is the logical page
/// shown to the user and only ever grows by one per request.
#[derive(Debug)]
pub struct State<E> {
    accumulated: Vec<E>,
    api_page: u64,
    display_page: u64,
    start_block: Option<BlockNumber>,
    page_size: u64,
    page_ceiling: u64,
}

impl<E: SourceInput> State<E> {
    pub fn new(page_size: u64, page_ceiling: u64) -> Self {
        Self {
            accumulated: Vec::new(),
            api_page: 1,
            display_page: 1,
            start_block: None,
            page_size,
            page_ceiling,
        }
    }

    pub fn api_page(&self) -> u64 {
        self.api_page
    }

    pub fn display_page(&self) -> u64 {
        self.display_page
    }

    pub fn start_block(&self) -> Option<BlockNumber> {
        self.start_block
    }

    pub fn accumulated(&self) -> &[E] {
        &self.accumulated
    }

    pub fn into_accumulated(self) -> Vec<E> {
        self.accumulated
    }

    pub fn exceeds_ceiling(&self) -> bool {
        self.api_page.saturating_mul(self.page_size) > self.page_ceiling
    }

    /// Transaction range covered by the current logical page, 1-based and inclusive.
    pub fn transaction_range(&self) -> (u64, u64) {
        let first = (self.display_page - 1) * self.page_size + 1;
        (first, self.display_page * self.page_size)
    }

    pub fn filter(&self, args: &Args) -> PageFilter {
        PageFilter {
            contract: args.contract,
            address: args.address,
            page: self.api_page,
            offset: self.page_size,
            start_block: self.start_block,
        }
    }

    /// Re-anchors when the next request would cross the page ceiling.
    /// The logical page is left untouched.
    pub fn before_request(&mut self) -> Result<(), FetchError> {
        if self.exceeds_ceiling() {
            self.reanchor()?;
        }
        Ok(())
    }

    /// The two last records share a block, which may go on past the page.
    pub fn splits_last_block(&self) -> bool {
        match self.accumulated.as_slice() {
            [.., before, last] => {
                before.block_number().is_some() && before.block_number() == last.block_number()
            }
            _ => false,
        }
    }

    pub fn on_page(&mut self, items: Vec<E>) -> Step {
        let full = items.len() as u64 >= self.page_size;
        self.accumulated.extend(items);

        if !full {
            Step::Done
        } else if self.start_block.is_some() {
            Step::Reanchor
        } else {
            Step::NextPage
        }
    }

    pub fn next_page(&mut self) {
        self.api_page += 1;
        self.display_page += 1;
    }

    /// Re-anchors after a full page and starts a new logical page.
    pub fn reanchor_next(&mut self) -> Result<(), FetchError> {
        self.reanchor()?;
        self.display_page += 1;
        Ok(())
    }

    fn reanchor(&mut self) -> Result<(), FetchError> {
        let last_block = self
            .accumulated
            .last()
            .and_then(|item| item.block_number())
            .ok_or(FetchError::MissingBlockNumber)?;
        let next = last_block.saturating_add(1);

        match self.start_block {
            Some(previous) if next <= previous => {
                return Err(FetchError::Stalled { previous, next });
            }
            _ => {}
        }

        if self.splits_last_block() {
            tracing::warn!(
                "Block {last_block} may hold more transfers past the page boundary, \
                 they are skipped by restarting at block {next}"
            );
        }

        tracing::debug!("Re-anchoring on start block {next} after block {last_block}");
        self.start_block = Some(next);
        self.api_page = 1;
        Ok(())
    }
}
