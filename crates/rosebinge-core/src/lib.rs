pub mod catalog;
pub mod gateway;

pub use gateway::MovieGateway;
