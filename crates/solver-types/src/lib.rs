//! Shared types for the intent solver.
//!
//! Every other crate in the workspace speaks in terms of these types: the
//! intents read from the ledger, the routes produced by the resolver, the
//! transactions handed to delivery and the events published while the solver
//! works through them.

pub mod account;
pub mod delivery;
pub mod discovery;
pub mod events;
pub mod order;
pub mod route;
pub mod utils;
pub mod validation;

pub use account::*;
pub use delivery::*;
pub use discovery::*;
pub use events::*;
pub use order::*;
pub use route::*;
pub use utils::*;
pub use validation::*;
