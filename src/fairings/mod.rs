mod request_logger;

pub(crate) use request_logger::request_span_for;
pub use request_logger::RequestLogger;
pub(crate) use request_logger::REQUEST_ID_HEADER;
