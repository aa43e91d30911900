pub mod case;
pub mod selection;
pub mod taxonomy;

pub use case::{CaseBean, CaseDocument, CaseRecord};
pub use selection::Selection;
pub use taxonomy::{CaseRef, Grade, ItemDocument, Stage, SubjectNode, Unit};
