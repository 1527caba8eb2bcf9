mod analysis;
pub use analysis::*;

mod storage;
pub use storage::*;
