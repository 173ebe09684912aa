//! `wowwah params`: the parameter table.

use wowwah_engine::WahControls;

pub fn run() -> anyhow::Result<()> {
    println!("Parameters\n");
    println!(
        "  {:<14} {:<16} {:>24}  {:>10}",
        "ID", "NAME", "RANGE", "DEFAULT"
    );

    for (_, desc) in WahControls::descriptors() {
        let range = format!(
            "{} .. {}",
            desc.format_value(desc.min),
            desc.format_value(desc.max)
        );
        println!(
            "  {:<14} {:<16} {:>24}  {:>10}",
            desc.string_id,
            desc.name,
            range,
            desc.format_value(desc.default)
        );
    }

    println!("\nChoices:");
    for (_, desc) in WahControls::descriptors().filter(|(_, d)| d.is_choice()) {
        let options: Vec<String> = desc
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{i} = {label}"))
            .collect();
        println!("  {:<14} {}", desc.string_id, options.join(", "));
    }
    Ok(())
}
