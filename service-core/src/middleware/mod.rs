pub mod request_id;

pub use request_id::{http_request_span, propagate_request_id, REQUEST_ID_HEADER};
