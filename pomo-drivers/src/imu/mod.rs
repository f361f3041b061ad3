//! Inertial measurement units

pub mod qmi8658;

pub use qmi8658::{ImuError, Qmi8658, QMI8658_ADDR};
