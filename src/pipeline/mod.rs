pub mod stage1_prepare;
pub mod stage2_metrics;
pub mod stage3_aggregate;
pub mod stage4_annotate;
pub mod stage5_report;
