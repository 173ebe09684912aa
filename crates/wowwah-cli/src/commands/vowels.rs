//! `wowwah vowels`: the humanizer formant table.

use wowwah_engine::Vowel;

pub fn run() -> anyhow::Result<()> {
    println!("Humanizer formants\n");
    println!("  {:<6} {:>8} {:>8}", "VOWEL", "F1 (Hz)", "F2 (Hz)");
    for vowel in Vowel::ALL {
        let f = vowel.formants();
        println!("  {:<6} {:>8} {:>8}", vowel.name(), f.f1, f.f2);
    }
    Ok(())
}
