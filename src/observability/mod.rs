//! Logging and crash reporting.
//!
//! Install both at startup:
//!
//! ```ignore
//! use impact_dashboard::observability::{init_logging, install_panic_hook};
//!
//! fn main() -> anyhow::Result<()> {
//!     install_panic_hook();
//!     init_logging(0, None)?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{init_logging, is_tui_active, set_tui_active};
pub use panic_hook::install_panic_hook;
