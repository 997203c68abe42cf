pub mod http;
pub mod service;
pub mod types;

pub use http::HttpCorrectionService;
pub use service::{CorrectionService, RemoteError};
pub use types::{
    Annotation, CorrectionRequest, CorrectionResponse, ErrorPayload, MessageParams,
    MessageRequest, Mode,
};
