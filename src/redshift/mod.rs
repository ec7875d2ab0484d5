mod lookup;
pub mod record;
pub mod resources;

pub use lookup::fetch;
pub use record::{ClusterNode, ClusterRecord};
pub use resources::LoggingStatus;
