//! Timeline simulation, planning sessions and KPI evaluation.
//!
//! # Algorithm
//!
//! `ScheduleSimulator` walks a fixed ordering once on a single,
//! non-preemptive server starting at t=0 and stamps each task with its
//! waiting time, turnaround time, remaining time and miss flag.
//!
//! `ScheduleSession` owns a `PriorityHeap` and plans it: the snapshot is
//! sorted by priority (descending) and simulated. The raw heap array
//! order can be selected explicitly, but it is not a priority order.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, waiting, turnaround, tardiness and
//! on-time rate.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod config;
mod kpi;
mod plan;
mod session;
mod simulator;

pub use config::{SessionConfig, SimulationOrder, DEFAULT_NEAR_DEADLINE_MIN};
pub use kpi::ScheduleKpi;
pub use plan::{AlertKind, DeadlineAlert, SchedulePlan};
pub use session::ScheduleSession;
pub use simulator::ScheduleSimulator;
