pub mod bootstrap;
pub mod checkout;
pub mod config;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;

pub use bootstrap::load_directory;
pub use checkout::{CheckoutClient, CheckoutError};
pub use config::AppConfig;
pub use server::{AppdeckServer, ServerBuilder, build_app};
pub use state::AppState;
