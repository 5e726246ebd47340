#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use mape_tensor as tensor;

#[doc(inline)]
pub use mape_metrics as metrics;
