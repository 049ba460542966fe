pub mod comparison;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod progress;
pub mod render;
pub mod share;
pub mod storage;

pub use comparison::{compare_machines, compare_views, View};
pub use config::AppConfig;
pub use engine::{ComparisonEngine, ComparisonRun};
pub use error::Error;
pub use model::{ComparisonResult, ComparisonViews, Group, MachineRecord, ReferenceSpecs};
pub use progress::{ProgressReporter, SilentReporter};
