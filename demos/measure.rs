use roof_area::outline::OutlineResponse;
use roof_area::report::{Report, edge_label};
use roof_area::{calculate_roof_area, edge_measurements};
use std::env;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <overpass-json> <pitch-degrees> [address]", args[0]);
        std::process::exit(1);
    }

    let response = OutlineResponse::from_reader(File::open(&args[1])?)?;
    let pitch: f64 = args[2].parse()?;

    let mut warnings = Vec::new();
    let outline = response.building_outline(&mut warnings)?;
    for warning in &warnings {
        eprintln!("warning: {warning:?}");
    }

    let result = calculate_roof_area(&outline, pitch)?;
    let report = Report {
        address: args.get(3).map(String::as_str),
        pitch_degrees: pitch,
        result: &result,
    };

    print!("{report}");

    println!("\n=== Edges ===");
    for (i, edge) in edge_measurements(&outline).iter().enumerate() {
        println!(
            "{}. {} ({:.6}, {:.6}) -> ({:.6}, {:.6})",
            i + 1,
            edge_label(edge.length_ft),
            edge.start.latitude,
            edge.start.longitude,
            edge.end.latitude,
            edge.end.longitude
        );
    }

    Ok(())
}
