pub mod reanalysis_scheduler;

pub use reanalysis_scheduler::ReanalysisScheduler;
