mod sheet;
mod submission;

pub use sheet::SheetSource;
pub use submission::{Delivery, SubmissionTransport};
