//! The demo elevator state machine.
//!
//! A deliberately small, deterministic simulation: no wall clock, no
//! physics. Callers drive it with [`Elevator::press`] and
//! [`Elevator::tick`]; everything else is read-only state. The demo page
//! ticks it once per second over the JSON API, so the car travels one
//! floor per second and holds its doors for three.

#![doc = include_str!("../README.md")]

pub mod elevator;

pub use elevator::{
    CarState, DOOR_HOLD_TICKS, Direction, Elevator, ElevatorSnapshot, FLOOR_MAX, FLOOR_MIN,
};
