// Domain services
pub mod analytics;
pub mod classifier;
pub mod recommender;
pub mod voice_router;

pub use analytics::*;
pub use classifier::*;
pub use recommender::*;
pub use voice_router::*;
