//! Background Tasks Module
//!
//! Contains the task that sweeps a register on its schedule.

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
