//! Movement domain: system modules for locomotion updates.

pub(crate) mod emitters;
pub(crate) mod input;
pub(crate) mod physics;
pub(crate) mod rig;

pub(crate) use emitters::{setup_exhaust_assets, trigger_jetpack_emitters, update_exhaust_particles};
pub(crate) use input::{grab_cursor, issue_commands, read_input};
pub(crate) use physics::tick_locomotion;
pub(crate) use rig::verify_locomotion_rigs;
