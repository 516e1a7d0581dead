pub mod identifiers;
pub mod summary_report;

pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion, SentenceId};
pub use summary_report::{SelectedSentence, SummarizeError, SummaryMetadata, SummaryReport};
