pub mod alignment_scorer;
pub mod attempt_report;
pub mod normalizer;
