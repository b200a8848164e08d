use chrono::Utc;
use clap::Args;
use std::sync::Arc;

use crate::infra::{standard_fleet, InMemoryRosterRepository};
use skyroster::error::AppError;
use skyroster::roster::{
    CabinCrewMember, CrewRole, CrewSelection, FlightInfo, Passenger, PassengerId, Pilot,
    RosterGenerationRequest, RosterOptions, RosterService, SeatClass, Seniority, TravelerKind,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Flight number for the generated roster
    #[arg(long, default_value = "TK1234")]
    pub(crate) flight_number: String,
    /// Aircraft type to roster (must exist in the standard fleet)
    #[arg(long, default_value = "A320")]
    pub(crate) aircraft_type: String,
    /// Flight distance in kilometers
    #[arg(long, default_value_t = 1500)]
    pub(crate) distance_km: u32,
    /// Leave crew assignment to the caller (keeps the current, empty crew)
    #[arg(long)]
    pub(crate) skip_crew: bool,
    /// Leave seat assignment to the caller (keeps pre-assigned seats only)
    #[arg(long)]
    pub(crate) skip_seats: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryRosterRepository::default());
    let service = RosterService::new(repository, standard_fleet());

    let request = RosterGenerationRequest {
        flight: FlightInfo {
            flight_number: args.flight_number.clone(),
            aircraft_type: args.aircraft_type.clone(),
            distance_km: args.distance_km,
            departure: Some(Utc::now()),
        },
        pilots: demo_pilots(&args.aircraft_type),
        cabin_crew: demo_cabin_crew(&args.aircraft_type),
        passengers: demo_passengers(),
        current_crew: CrewSelection::default(),
        options: RosterOptions {
            assign_crew: !args.skip_crew,
            assign_seats: !args.skip_seats,
            ..RosterOptions::default()
        },
    };

    println!(
        "Roster demo for flight {} ({}, {} km)",
        args.flight_number, args.aircraft_type, args.distance_km
    );

    let record = service.generate(request)?;

    println!("\nFlight deck");
    if record.roster.crew.pilots.is_empty() {
        println!("- no pilots assigned");
    }
    for pilot in &record.roster.crew.pilots {
        println!("- {} ({})", pilot.name, pilot.seniority.label());
    }

    println!("\nCabin crew");
    if record.roster.crew.cabin_crew.is_empty() {
        println!("- no cabin crew assigned");
    }
    for member in &record.roster.crew.cabin_crew {
        println!("- {} ({})", member.name, member.role.label());
    }

    if record.roster.menu.is_empty() {
        println!("\nMenu: none");
    } else {
        println!("\nMenu: {}", record.roster.menu.join(", "));
    }

    println!("\nSeat assignments");
    for (seat, passenger) in record.roster.seat_map.seats() {
        println!("- {seat}: {passenger}");
    }

    for passenger in &record.roster.passengers {
        if passenger.is_infant() {
            println!("- lap infant (no seat): {}", passenger.id);
        }
    }

    if record.crew_shortages.is_empty() && record.seat_shortages.is_empty() {
        println!("\nShortages: none");
    } else {
        println!("\nShortages");
        for shortage in &record.crew_shortages {
            println!("- {shortage}");
        }
        for shortage in &record.seat_shortages {
            println!(
                "- {} cabin full, unseated: {}",
                shortage.class,
                shortage
                    .unseated
                    .iter()
                    .map(|id| id.0.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    match serde_json::to_string_pretty(&record.status_view()) {
        Ok(json) => println!("\nStatus payload:\n{}", json),
        Err(err) => println!("\nStatus payload unavailable: {}", err),
    }

    Ok(())
}

fn demo_pilots(aircraft_type: &str) -> Vec<Pilot> {
    let pilot = |id: &str, name: &str, range: u32, seniority: Seniority| Pilot {
        id: id.to_string(),
        name: name.to_string(),
        vehicle_restriction: aircraft_type.to_string(),
        allowed_range_km: range,
        seniority,
    };

    vec![
        pilot("PL-001", "Ahmet Yilmaz", 6200, Seniority::Senior),
        pilot("PL-002", "Elena Petrova", 5400, Seniority::Senior),
        pilot("PL-003", "Marcus Chen", 4100, Seniority::Junior),
        pilot("PL-004", "Sofia Rossi", 3800, Seniority::Junior),
        pilot("PL-005", "Tom Baker", 1200, Seniority::Trainee),
    ]
}

fn demo_cabin_crew(aircraft_type: &str) -> Vec<CabinCrewMember> {
    let member = |id: &str, name: &str, role: CrewRole, recipes: &[&str]| CabinCrewMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        permitted_vehicles: vec![aircraft_type.to_string()],
        recipes: recipes.iter().map(|recipe| recipe.to_string()).collect(),
    };

    vec![
        member("CC-001", "Fatma Demir", CrewRole::Chief, &[]),
        member("CC-002", "James O'Brien", CrewRole::Regular, &[]),
        member("CC-003", "Yuki Tanaka", CrewRole::Regular, &[]),
        member("CC-004", "Pierre Dubois", CrewRole::Chef, &["Coq au Vin", "Ratatouille"]),
        member("CC-005", "Anna Kowalska", CrewRole::Regular, &[]),
        member("CC-006", "Diego Alvarez", CrewRole::Regular, &[]),
        member("CC-007", "Leila Haddad", CrewRole::Regular, &[]),
    ]
}

fn demo_passengers() -> Vec<Passenger> {
    let pax = |id: &str, name: &str, class: SeatClass, seat: Option<&str>| Passenger {
        id: PassengerId(id.to_string()),
        name: name.to_string(),
        seat_class: class,
        seat: seat.map(str::to_string),
        kind: TravelerKind::Unaccompanied,
    };

    let mut passengers = vec![
        pax("PS-001", "John Doe", SeatClass::Business, Some("1A")),
        pax("PS-002", "Jane Smith", SeatClass::Business, Some("1B")),
        pax("PS-003", "Carlos Rodriguez", SeatClass::Economy, Some("10A")),
        pax("PS-004", "Maria Garcia", SeatClass::Economy, Some("10B")),
        pax("PS-005", "Baby Garcia", SeatClass::Economy, None),
        pax("PS-006", "Michael Brown", SeatClass::Business, Some("2A")),
        pax("PS-007", "Emma Wilson", SeatClass::Economy, Some("15C")),
        pax("PS-008", "David Lee", SeatClass::Economy, None),
        pax("PS-009", "Sarah Lee", SeatClass::Economy, None),
        pax("PS-010", "Ali Kaya", SeatClass::Business, None),
    ];

    passengers[4].kind = TravelerKind::Infant {
        guardian: PassengerId("PS-004".to_string()),
    };
    passengers[7].kind = TravelerKind::GroupMember {
        affiliates: vec![PassengerId("PS-009".to_string())],
    };
    passengers[8].kind = TravelerKind::GroupMember {
        affiliates: vec![PassengerId("PS-008".to_string())],
    };

    passengers
}
