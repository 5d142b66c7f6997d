//! Logging setup and crash reporting.
//!
//! Install both at startup, before the browser takes over the terminal:
//!
//! ```ignore
//! use omni_deals::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     init_tracing(0);
//!     install_panic_hook();
//!     // ... dispatch command
//! }
//! ```

pub mod panic_hook;
pub mod tracing;

pub use panic_hook::{install_panic_hook, set_catalog_label};
pub use tracing::{filter_directive, init_tracing, is_tui_active, set_tui_active};
