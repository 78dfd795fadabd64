//! Storymark Export Library
//!
//! Turns finalized storyboard frames into downstream artifacts: the
//! bilingual shot directives consumed by the video-generation prompt,
//! the page/grid layout of the exported board, and the ordered job
//! queue that sequences per-shot generation.

pub mod directive;
pub mod locale;
pub mod paginate;
pub mod queue;

pub use directive::{project_preamble, translate, Fragment, FragmentSlot, ShotDirective};
pub use locale::{Language, Localized};
pub use paginate::{grid_columns, paginate, DEFAULT_PAGE_SIZE};
pub use queue::{ExportJob, ExportQueue, JobState};
