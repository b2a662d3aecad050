pub mod errors;
pub mod events;
pub mod library_item;
pub mod member;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use library_item::*;
pub use member::*;
pub use value_objects::*;
