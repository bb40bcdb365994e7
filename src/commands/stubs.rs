use anyhow::Result;
use colored::Colorize;

use spaify::stubs::STUBS;

/// List the built-in stubs and where the scaffold installs them
pub fn execute(json: bool) -> Result<()> {
    if json {
        let stubs: Vec<_> = STUBS
            .iter()
            .map(|stub| {
                serde_json::json!({
                    "name": stub.name,
                    "target": stub.target,
                    "bytes": stub.contents.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&stubs)?);
        return Ok(());
    }

    println!("{}", "📄 Stubs".bold());
    for stub in STUBS {
        println!("   {:<20} → {}", stub.name, stub.target.dimmed());
    }
    println!(
        "\n   Override any stub by placing a file with the same name in {}",
        "[files] stubs_dir".bold()
    );

    Ok(())
}
