//! The elevator car, its call queue, and the tick transition.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Lowest served floor.
pub const FLOOR_MIN: u8 = 1;
/// Highest served floor.
pub const FLOOR_MAX: u8 = 10;
/// Ticks the door stays open after arrival.
pub const DOOR_HOLD_TICKS: u8 = 3;

/// What the car is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarState {
    /// Parked with the door closed; calls are accepted
    Idle,
    /// Between floors; calls are rejected
    Moving,
    /// Holding the door open; calls are rejected
    DoorOpen,
}

/// Travel direction while moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward higher floors
    Up,
    /// Toward lower floors
    Down,
}

/// The demo elevator.
///
/// Calls join a FIFO queue; the car serves the head request one floor
/// per tick, opens the door on arrival, and only then looks at the next
/// request. While the car is moving or the door is open every call is a
/// no-op, the same one-slot gate the page enforces by disabling its
/// buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elevator {
    current_floor: u8,
    state: CarState,
    direction: Option<Direction>,
    door_ticks_left: u8,
    queue: VecDeque<u8>,
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new()
    }
}

impl Elevator {
    /// A parked car at the ground floor with an empty queue.
    pub fn new() -> Self {
        Self {
            current_floor: FLOOR_MIN,
            state: CarState::Idle,
            direction: None,
            door_ticks_left: 0,
            queue: VecDeque::new(),
        }
    }

    /// The floor the car is currently at (or passing).
    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    /// Current car state.
    pub fn state(&self) -> CarState {
        self.state
    }

    /// Travel direction, `Some` only while moving.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Pending called floors in service order.
    pub fn queued_floors(&self) -> Vec<u8> {
        self.queue.iter().copied().collect()
    }

    /// Whether a call would currently be accepted.
    pub fn accepts_calls(&self) -> bool {
        self.state == CarState::Idle
    }

    /// Press a floor button.
    ///
    /// Returns whether the call was accepted. Rejected outright while
    /// the car is moving or the door is open, for out-of-range floors,
    /// and for floors already queued. A call for the floor the car is
    /// parked at opens the door in place instead of queueing.
    pub fn press(&mut self, floor: u8) -> bool {
        if self.state != CarState::Idle {
            log::debug!("Call for floor {floor} rejected while {:?}", self.state);
            return false;
        }
        if !(FLOOR_MIN..=FLOOR_MAX).contains(&floor) {
            log::debug!("Call for out-of-range floor {floor} rejected");
            return false;
        }
        if floor == self.current_floor {
            self.open_door();
            return true;
        }
        if self.queue.contains(&floor) {
            return false;
        }
        self.queue.push_back(floor);
        true
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        match self.state {
            CarState::DoorOpen => {
                self.door_ticks_left -= 1;
                if self.door_ticks_left == 0 {
                    self.state = CarState::Idle;
                }
            }
            CarState::Idle | CarState::Moving => {
                let Some(&target) = self.queue.front() else {
                    self.state = CarState::Idle;
                    self.direction = None;
                    return;
                };
                if target > self.current_floor {
                    self.current_floor += 1;
                    self.direction = Some(Direction::Up);
                } else if target < self.current_floor {
                    self.current_floor -= 1;
                    self.direction = Some(Direction::Down);
                }
                if self.current_floor == target {
                    self.queue.pop_front();
                    self.open_door();
                } else {
                    self.state = CarState::Moving;
                }
            }
        }
    }

    fn open_door(&mut self) {
        self.state = CarState::DoorOpen;
        self.door_ticks_left = DOOR_HOLD_TICKS;
        self.direction = None;
    }

    /// A serializable copy of the full state, for the demo API.
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            current_floor: self.current_floor,
            state: self.state,
            direction: self.direction,
            door_ticks_left: self.door_ticks_left,
            queue: self.queued_floors(),
            floors: FLOOR_MAX,
        }
    }
}

/// Wire form of the elevator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorSnapshot {
    /// Floor the car is at
    pub current_floor: u8,
    /// What the car is doing
    pub state: CarState,
    /// Travel direction while moving
    pub direction: Option<Direction>,
    /// Remaining door-open ticks
    pub door_ticks_left: u8,
    /// Pending called floors in service order
    pub queue: Vec<u8>,
    /// Number of floors the building has
    pub floors: u8,
}

// ============================================================================
// Tests
// ============================================================================
