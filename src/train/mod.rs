pub mod loop_fn;
pub mod progress;
pub mod source;
pub mod train_config;

pub use loop_fn::train_online;
pub use progress::ProgressStats;
pub use source::{Cycle, Generator, RandomChoice, SampleSource};
pub use train_config::TrainConfig;
