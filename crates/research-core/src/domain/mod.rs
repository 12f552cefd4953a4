//! Domain model (task document, ids, requests, events, errors).

pub mod document;
pub mod errors;
pub mod events;
pub mod ids;
pub mod report;
pub mod request;
pub mod state;
pub mod tone;

pub use self::document::{Scalar, TaskDocument, TaskValue};
pub use self::errors::{ConfigError, EmitError, ErrorKind, OrchestratorError, ResearchError};
pub use self::events::{LOGS_CATEGORY, RESEARCH_REPORT_EVENT, StreamEvent};
pub use self::ids::{RunId, Id, IdMarker};
pub use self::report::Report;
pub use self::request::{Headers, ResearchRequest};
pub use self::state::RunState;
pub use self::tone::{Tone, UnknownTone};
