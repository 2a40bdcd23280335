//! Services talking to the outside world.
//!
//! A service holds whatever state it needs (usually an HTTP client) and
//! exposes functions with the following signature:
//!
//! ```ignore
//! async fn(&self, request: Request) -> Result<Response, Error>;
//! ```

pub mod speedrun_com;
pub use speedrun_com::SpeedrunComService;
