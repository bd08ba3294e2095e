//! Minimal Hilbert curve example: map an index to a point and back.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 3D Hilbert curve on an 8x8x8 grid (order 3)
    let spec = hilbertpath::configure(3, 3)?;
    println!(
        "{}D Hilbert length: {} cells",
        spec.dimension(),
        spec.len()
    );

    let index = 10;
    let point = spec.encode(index)?;
    println!("Point at index {index}: {point}");

    let round_trip = spec.decode(&point)?;
    println!("Index for {point}: {round_trip}");

    assert_eq!(round_trip, index);

    // The first few steps of the path, one axis at a time.
    for (i, p) in spec.enumerate().take(8).enumerate() {
        println!("{i}: {p}");
    }

    Ok(())
}
