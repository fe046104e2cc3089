pub mod invoice;
pub mod request;

pub use invoice::InvoiceRecord;
pub use request::{Approval, InvoiceNumbers, Organization, RequestDocument, RequestItem};
