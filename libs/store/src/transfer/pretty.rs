use std::fmt::{Debug, Display, Formatter, Result};

use crate::transfer::model::FormattedTransfer;

impl Debug for FormattedTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("FormattedTransfer")
            .field("date", &self.date)
            .field("hash", &self.hash)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("value", &self.value)
            .finish()
    }
}

// One line of the text report
impl Display for FormattedTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} | FROM: {} | TO: {} | VALUE: {} | HASH: {}",
            self.date, self.from, self.to, self.value, self.hash
        )
    }
}
