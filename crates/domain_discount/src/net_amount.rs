//! The amount a customer pays after discounts

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Amount;

/// Net payable amount; never negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct NetAmount {
    value: Amount,
}

impl NetAmount {
    pub fn new(value: Amount) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value.value()
    }
}

impl fmt::Display for NetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
