// Domain value objects
pub mod categories;
pub mod identifiers;
pub mod priority;
pub mod rating;
pub mod ticket_status;

pub use categories::*;
pub use identifiers::*;
pub use priority::*;
pub use rating::*;
pub use ticket_status::*;
