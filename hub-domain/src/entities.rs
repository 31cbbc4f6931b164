// Domain entities
pub mod cctv;
pub mod config;
pub mod event;
pub mod feedback;
pub mod hall;
pub mod notification;
pub mod reminder;
pub mod seed;
pub mod ticket;
pub mod user;
pub mod voice;

pub use cctv::*;
pub use config::*;
pub use event::*;
pub use feedback::*;
pub use hall::*;
pub use notification::*;
pub use reminder::*;
pub use seed::*;
pub use ticket::*;
pub use user::*;
pub use voice::*;
