/// Analysis modules — pure functions over a completed `ScanResult`.

pub mod counts;
pub mod extensions;

pub use counts::{aggregate, Aggregate};
pub use extensions::{ExtensionCount, ExtensionHistogram};
