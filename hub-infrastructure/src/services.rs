pub mod backend_client;
pub mod health_service;
pub mod identity_service;
pub mod speech_service;
pub mod storage_service;

pub use backend_client::*;
pub use health_service::*;
pub use identity_service::*;
pub use speech_service::*;
pub use storage_service::*;
