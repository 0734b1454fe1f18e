//! Node RPC access and the fetch pair built on it.

pub mod client;
pub mod errors;
pub mod fetch;

pub use client::{HttpRpcClient, RpcClient};
pub use errors::RpcError;
pub use fetch::{RpcFetch, RpcState, use_rpc};

/// Current epoch and next validation time.
pub const EPOCH_METHOD: &str = "dna_epoch";

/// Transaction lookup by hash.
pub const TRANSACTION_METHOD: &str = "bcn_transaction";
