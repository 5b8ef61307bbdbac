use anyhow::Result;
use std::path::Path;

pub fn run(atomic_number: u32, mass_number: u32, reference: Option<&Path>) -> Result<()> {
    let table = super::load_table(reference)?;
    if let Some(symbol) = table.lookup(atomic_number, mass_number) {
        println!("{symbol}-{mass_number} (Z={atomic_number})");
        return Ok(());
    }

    println!("No known isotope with Z={atomic_number}, A={mass_number}");
    let known = table
        .symbols()
        .into_iter()
        .map(|symbol| table.isotopes_of(symbol))
        .find(|isotopes| {
            isotopes
                .first()
                .is_some_and(|iso| iso.atomic_number == atomic_number)
        })
        .unwrap_or_default();
    if let (Some(first), Some(last)) = (known.first(), known.last()) {
        println!(
            "Known {} isotopes: A={}..={}",
            first.symbol, first.mass_number, last.mass_number
        );
    }
    Ok(())
}
