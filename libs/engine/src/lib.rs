pub mod args;
pub mod error;
pub mod fetcher;
pub mod source {
    pub mod explorer;
    pub mod filter;
    pub mod handle;
}
pub mod state {
    pub mod event;
    pub mod logic;
}
