mod library_manager;

pub use library_manager::{CATALOG_HEADER, LibraryManager};
