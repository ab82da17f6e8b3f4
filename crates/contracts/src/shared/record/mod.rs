//! Generic record model shared by every page: closed tags with their display
//! tokens, filter views, aggregate summaries, the in-memory record store and
//! the create/edit modal state machine.

pub mod editor;
pub mod filter;
pub mod store;
pub mod summary;
pub mod tag;
pub mod workflow;

pub use editor::{EditableRecord, EditorError, EditorState, ModalEditor, SaveOutcome};
pub use filter::{filter_view, tab_counts, FilterError, FilterKey, Filterable, TabCount};
pub use store::{Confirmation, DeleteOutcome, IdSequence, RecordStore};
pub use summary::{count_where, sum_where, Summarize, SummaryCard, SummaryValue};
pub use tag::{classify, DisplayToken, Icon, Tag, Tone};
pub use workflow::TransitionError;

pub(crate) use tag::closed_tag;
