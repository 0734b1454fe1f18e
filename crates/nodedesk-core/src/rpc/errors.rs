use crate::errors::DeskError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    #[error("RPC calls require a running tokio runtime")]
    NoRuntime,

    #[error("Failed to build HTTP client: {message}")]
    ClientBuildFailed { message: String },

    #[error("Node at '{url}' is unreachable: {message}")]
    Transport { url: String, message: String },

    #[error("Node returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Node returned an invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Node rejected '{method}' ({code}): {message}")]
    Node {
        method: String,
        code: i64,
        message: String,
    },
}

impl DeskError for RpcError {
    fn error_code(&self) -> &'static str {
        match self {
            RpcError::NoRuntime => "RPC_NO_RUNTIME",
            RpcError::ClientBuildFailed { .. } => "RPC_CLIENT_BUILD_FAILED",
            RpcError::Transport { .. } => "RPC_TRANSPORT_FAILED",
            RpcError::HttpStatus { .. } => "RPC_HTTP_STATUS",
            RpcError::InvalidResponse { .. } => "RPC_INVALID_RESPONSE",
            RpcError::Node { .. } => "RPC_NODE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        // An unreachable node usually means a wrong address in settings.
        matches!(self, RpcError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_error_display() {
        let error = RpcError::Node {
            method: "dna_epoch".to_string(),
            code: -32601,
            message: "method not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Node rejected 'dna_epoch' (-32601): method not found"
        );
        assert_eq!(error.error_code(), "RPC_NODE_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_transport_error_is_user_error() {
        let error = RpcError::Transport {
            url: "http://localhost:9009".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(error.is_user_error());
    }
}
