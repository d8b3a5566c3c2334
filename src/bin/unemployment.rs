//! County Unemployment Histogram Demo
//!
//! Builds a histogram of county unemployment rates from a static in-memory
//! dataset and renders it to PNG and SVG.
//!
//! Run with: `cargo run --bin unemployment`

use binviz::prelude::*;

/// One county record: id, labels, and the rate being distributed.
#[derive(Clone)]
struct County {
    id: u32,
    state: &'static str,
    county: &'static str,
    rate: f32,
}

const fn county(id: u32, state: &'static str, county: &'static str, rate: f32) -> County {
    County { id, state, county, rate }
}

/// Alabama county unemployment rates (percent of labor force).
const UNEMPLOYMENT: [County; 20] = [
    county(1001, "Alabama", "Autauga County", 5.1),
    county(1003, "Alabama", "Baldwin County", 4.9),
    county(1005, "Alabama", "Barbour County", 8.6),
    county(1007, "Alabama", "Bibb County", 6.2),
    county(1009, "Alabama", "Blount County", 5.1),
    county(1011, "Alabama", "Bullock County", 7.1),
    county(1013, "Alabama", "Butler County", 6.7),
    county(1015, "Alabama", "Calhoun County", 6.1),
    county(1017, "Alabama", "Chambers County", 5.0),
    county(1019, "Alabama", "Cherokee County", 5.0),
    county(1021, "Alabama", "Chilton County", 5.2),
    county(1023, "Alabama", "Choctaw County", 7.9),
    county(1025, "Alabama", "Clarke County", 11.1),
    county(1027, "Alabama", "Clay County", 5.9),
    county(1029, "Alabama", "Cleburne County", 5.5),
    county(1031, "Alabama", "Coffee County", 5.6),
    county(1033, "Alabama", "Colbert County", 6.5),
    county(1035, "Alabama", "Conecuh County", 7.7),
    county(1037, "Alabama", "Coosa County", 5.7),
    county(1039, "Alabama", "Covington County", 6.7),
];

fn main() -> Result<()> {
    println!("County Unemployment Histogram");
    println!("=============================\n");

    let first = &UNEMPLOYMENT[0];
    println!(
        "{} records ({} {}, id {}, rate {}%, ...)",
        UNEMPLOYMENT.len(),
        first.county,
        first.state,
        first.id,
        first.rate
    );

    let chart = Histogram::from_series(&UNEMPLOYMENT)
        .value(|c: &County| c.rate)
        .label("Unemployment rate (%) →")
        .dimensions(500, 500)
        .color(Rgba::STEEL_BLUE)
        .build()?;

    println!("\n{} bins over x domain {:?}:", chart.bar_count(), chart.x_domain);
    for bar in &chart.bars {
        println!(
            "  [{:>4.1}, {:>4.1})  {}",
            bar.bin.x0,
            bar.bin.x1,
            "█".repeat(bar.frequency as usize)
        );
    }

    chart.write_png("unemployment.png")?;
    chart.write_svg("unemployment.svg")?;
    println!("\nSaved unemployment.png and unemployment.svg");
    println!("SIMD backend: {:?}", Framebuffer::backend());

    Ok(())
}
