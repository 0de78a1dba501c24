pub mod console;
pub mod error;
pub mod session;
pub mod state;
pub mod view;

pub use console::Console;
pub use state::AppState;
