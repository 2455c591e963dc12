pub mod consistency;
pub mod contract;
pub mod error;
pub mod helpers;
pub mod msg;
pub mod state;
