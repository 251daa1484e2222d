pub mod extract;
pub mod hierarchy;
pub mod reconcile;
pub mod relocate;
pub mod session;

pub use extract::{distinct_values, distinct_values_where};
pub use hierarchy::WorkingOrder;
pub use reconcile::reconcile;
pub use relocate::relocate;
pub use session::{OrderingSession, Selection};
