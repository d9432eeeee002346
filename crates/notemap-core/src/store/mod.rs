mod memory;
mod record;
mod traits;

pub use memory::MemoryStore;
pub use record::{Record, ID_FIELD, TITLE_FIELD};
pub use traits::RecordStore;
