pub mod voice_command_hub;
pub mod voice_consumers;

pub use voice_command_hub::VoiceCommandHub;
pub use voice_consumers::spawn_voice_consumers;
