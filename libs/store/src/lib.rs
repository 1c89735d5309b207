pub mod error;
pub mod utils;
pub mod output {
    pub mod sheet;
    pub mod text;
}
pub mod transfer {
    pub mod adapter;
    pub mod model;
    pub mod pretty;
}
