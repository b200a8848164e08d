//! Seat allocation: a deterministic linear walk over each cabin's seat
//! order, preserving pre-assigned seats and keeping travel groups together
//! on a best-effort basis.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{AircraftConfig, Passenger, PassengerId, PassengerManifest, SeatClass, SeatMap};

/// Passengers a cabin could not absorb, keyed by their requested class.
/// Non-fatal; reported alongside the best-effort seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{class} cabin full: {} passenger(s) unseated", .unseated.len())]
pub struct SeatShortage {
    pub class: SeatClass,
    pub unseated: Vec<PassengerId>,
}

/// Result of one allocation pass: the seat map, the finalized passenger
/// list in input order, and any per-class shortages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingOutcome {
    pub seat_map: SeatMap,
    pub passengers: Vec<Passenger>,
    pub shortages: Vec<SeatShortage>,
}

/// Forward-only walk over one cabin's enumerated seats.
struct ClassCursor {
    seats: Vec<String>,
    index: usize,
}

impl ClassCursor {
    fn new(seats: Vec<String>) -> Self {
        Self { seats, index: 0 }
    }

    /// Next unoccupied seat in cabin order, advancing past it. Skipped
    /// occupied seats are never revisited.
    fn next_free(&mut self, occupied: &BTreeSet<String>) -> Option<String> {
        while self.index < self.seats.len() {
            let seat = self.seats[self.index].clone();
            self.index += 1;
            if !occupied.contains(&seat) {
                return Some(seat);
            }
        }
        None
    }
}

/// Assign seats to every passenger that needs one, first-come first-served
/// in manifest order. Affiliates of a freshly seated passenger are attempted
/// immediately from the same class cursor, so groups land as close together
/// as the linear walk allows (best effort, order-dependent). Infants never
/// consume seats; pre-assigned seats are never reassigned.
pub fn allocate_seats(config: &AircraftConfig, manifest: &PassengerManifest) -> SeatingOutcome {
    let mut passengers = manifest.passengers().to_vec();
    let mut seat_map = SeatMap::default();
    let mut occupied: BTreeSet<String> = BTreeSet::new();
    for passenger in &passengers {
        if let Some(seat) = &passenger.seat {
            occupied.insert(seat.clone());
            seat_map.assign(seat.clone(), passenger.id.clone());
        }
    }

    let mut business = ClassCursor::new(config.seat_identities(SeatClass::Business));
    let mut economy = ClassCursor::new(config.seat_identities(SeatClass::Economy));

    for index in 0..passengers.len() {
        if passengers[index].is_infant() || passengers[index].seat.is_some() {
            continue;
        }

        let class = passengers[index].seat_class;
        let cursor = match class {
            SeatClass::Business => &mut business,
            SeatClass::Economy => &mut economy,
        };
        let Some(seat) = cursor.next_free(&occupied) else {
            continue;
        };
        occupied.insert(seat.clone());
        seat_map.assign(seat.clone(), passengers[index].id.clone());
        passengers[index].seat = Some(seat);

        // Affiliates ride the leader's cursor, in the order they are listed.
        // One already seated in another class stays where it is.
        let affiliates: Vec<PassengerId> = passengers[index].affiliates().to_vec();
        for affiliate in affiliates {
            let Some(position) = passengers.iter().position(|p| p.id == affiliate) else {
                continue;
            };
            if passengers[position].is_infant() || passengers[position].seat.is_some() {
                continue;
            }
            let cursor = match class {
                SeatClass::Business => &mut business,
                SeatClass::Economy => &mut economy,
            };
            let Some(seat) = cursor.next_free(&occupied) else {
                break;
            };
            occupied.insert(seat.clone());
            seat_map.assign(seat.clone(), passengers[position].id.clone());
            passengers[position].seat = Some(seat);
        }
    }

    let shortages = collect_shortages(&passengers);

    SeatingOutcome {
        seat_map,
        passengers,
        shortages,
    }
}

/// Pass-through used when the seat-assignment switch is off: existing seats
/// are reflected in the map, nobody new is seated, nothing is reported.
pub(crate) fn passthrough(manifest: &PassengerManifest) -> SeatingOutcome {
    let passengers = manifest.passengers().to_vec();
    let mut seat_map = SeatMap::default();
    for passenger in &passengers {
        if let Some(seat) = &passenger.seat {
            seat_map.assign(seat.clone(), passenger.id.clone());
        }
    }
    SeatingOutcome {
        seat_map,
        passengers,
        shortages: Vec::new(),
    }
}

fn collect_shortages(passengers: &[Passenger]) -> Vec<SeatShortage> {
    let mut business_unseated = Vec::new();
    let mut economy_unseated = Vec::new();
    for passenger in passengers {
        if passenger.is_infant() || passenger.seat.is_some() {
            continue;
        }
        match passenger.seat_class {
            SeatClass::Business => business_unseated.push(passenger.id.clone()),
            SeatClass::Economy => economy_unseated.push(passenger.id.clone()),
        }
    }

    let mut shortages = Vec::new();
    if !business_unseated.is_empty() {
        shortages.push(SeatShortage {
            class: SeatClass::Business,
            unseated: business_unseated,
        });
    }
    if !economy_unseated.is_empty() {
        shortages.push(SeatShortage {
            class: SeatClass::Economy,
            unseated: economy_unseated,
        });
    }
    shortages
}
