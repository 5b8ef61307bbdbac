use anyhow::Result;
use fission_types::isotope::Fissile;

pub fn run() -> Result<()> {
    println!("{:<8} {:>4} {:>4}", "NAME", "Z", "A");
    for fissile in Fissile::ALL {
        let iso = fissile.isotope();
        println!(
            "{:<8} {:>4} {:>4}",
            fissile.to_string(),
            iso.atomic_number,
            iso.mass_number
        );
    }
    Ok(())
}
