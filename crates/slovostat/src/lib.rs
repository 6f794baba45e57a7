pub mod input;
pub mod pipeline;
pub mod report;

pub use input::{InputError, InputFile, LoadMode};
pub use pipeline::{Analysis, FrequencyTable, analyze};
pub use report::write_report;
