/// A transfer ready for display, derived 1:1 from a raw `TransferRecord`.
#[derive(Clone, PartialEq, Eq)]
pub struct FormattedTransfer {
    pub date: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub hash: String,
    /// Unix seconds, kept for sorting
    pub timestamp: i64,
}
