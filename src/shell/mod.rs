// Composition root for the calendar events service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory repository and wire it into the router.
// - Serve HTTP until a shutdown signal arrives.

pub mod config;
pub mod http;
pub mod state;
