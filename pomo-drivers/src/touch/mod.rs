//! Touch controllers

pub mod axs5106l;

pub use axs5106l::{reset_pulse, Axs5106l, TouchError, AXS5106L_ADDR};
