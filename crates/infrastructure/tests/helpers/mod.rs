pub mod literal_server;

pub use literal_server::{empty_query, FixedClock, LiteralTestServer};
