pub mod backend;

pub use backend::{BackendError, PdfBackend};
