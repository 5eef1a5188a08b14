//! Data layer for the GPM demo apps.
//!
//! `table` parses uploaded country/population CSVs and joins geocoded
//! coordinates back onto the rows; `synth` generates the deterministic
//! pseudo-random series the widget gallery charts.

pub mod synth;
pub mod table;
