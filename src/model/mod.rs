// Re-export all model types from submodules.

pub use app::AppView;
pub use bot::{BotState, BotStatus};
pub use command::CommandDescriptor;
pub use log::ExecutionLogEntry;
pub use server::ServerSummary;

mod app;
mod bot;
mod command;
mod log;
mod server;
