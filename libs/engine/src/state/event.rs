/// What the fetch loop does once a page has been accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Short page: the history is complete.
    Done,
    /// Full page: move on to the next API page.
    NextPage,
    /// Full page under a start block filter: restart at page 1 past the last block.
    Reanchor,
}
