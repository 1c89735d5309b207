use crate::args::Args;
use crate::error::FetchError;
use crate::source::handle::{Source, SourceInput};
use crate::state::event::Step;
use crate::state::logic::State;

/// Downloads every page of the listing and returns the records in order.
pub async fn fetch_all<E>(args: &Args, source: &dyn Source<Item = E>) -> Result<Vec<E>, FetchError>
where
    E: SourceInput + Send,
{
    let state = fetch_pages(args, source).await?;
    Ok(state.into_accumulated())
}

/// Runs the page loop to completion and hands back the final state.
///
/// Requests are strictly sequential. Whenever `api_page * page_size` would
/// cross the ceiling, the query is re-anchored on the block following the
/// last record received, and pagination restarts at page 1.
pub async fn fetch_pages<E>(
    args: &Args,
    source: &dyn Source<Item = E>,
) -> Result<State<E>, FetchError>
where
    E: SourceInput + Send,
{
    if args.page_size == 0 || args.page_size > args.page_ceiling {
        return Err(FetchError::InvalidPageSize {
            page_size: args.page_size,
            page_ceiling: args.page_ceiling,
        });
    }

    // Local mut state
    let mut state = State::new(args.page_size, args.page_ceiling);

    loop {
        state.before_request()?;

        let display_page = state.display_page();
        let (first, last) = state.transaction_range();
        match state.start_block() {
            Some(start_block) => tracing::info!(
                "Downloading page {display_page} (transactions {first}-{last}) from block {start_block}..."
            ),
            None => {
                tracing::info!("Downloading page {display_page} (transactions {first}-{last})...")
            }
        }

        let items = match source.page(state.filter(args)).await {
            Ok(items) => items,
            Err(e) if args.empty_is_ok && e.is_no_transactions() => {
                tracing::info!("Page {display_page} is empty: {e}");
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Fetch failed on page {display_page}: {e}");
                return Err(FetchError::Page {
                    display_page,
                    api_page: state.api_page(),
                    start_block: state.start_block(),
                    source: e,
                });
            }
        };

        match state.on_page(items) {
            Step::Done => break,
            Step::NextPage => state.next_page(),
            Step::Reanchor => state.reanchor_next()?,
        }

        // Stay under the explorer rate limit
        tokio::time::sleep(args.request_delay).await;
    }

    tracing::info!("Downloaded {} transactions total", state.accumulated().len());

    Ok(state)
}
