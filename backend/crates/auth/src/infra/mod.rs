//! Infrastructure Layer
//!
//! Store connection handling and repository implementations.

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::PgConnectionProvider;
pub use memory::MemoryAuthRepository;
pub use postgres::PgAuthRepository;
