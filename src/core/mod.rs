pub mod mapping;
pub mod upstream;

// Re-export commonly used types for convenience
pub use mapping::{prepare_body, query_to_body, rename_fields, renames_for};
pub use upstream::{
    Operation, OperationKind, Resource, RetellClient, UpstreamApi, UpstreamError, UpstreamRequest,
    UpstreamResponse,
};
