// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locates an rc file and prints what it configures.
//!
//! To run this example:
//! ```bash
//! # Point at a specific file, or let the locator search ./pylintrc, ~/.pylintrc, ...
//! export PYLINTRC=/path/to/.pylintrc
//! cargo run --example print_rcfile -- pylintrc
//! ```

use lintrc::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "pylintrc".to_string());
    let locator = RcFileLocator::new(name.as_str());

    println!("=== Searching for {} (override with ${}) ===", name, locator.env_var());
    for candidate in locator.candidates() {
        println!("  candidate: {}", candidate.display());
    }

    let adapter = match locator.load() {
        Ok(adapter) => adapter,
        Err(e) => {
            println!("\n✗ {}", e);
            return Ok(());
        }
    };
    println!("\n✓ Loaded {}\n", adapter.file_path().display());

    for section in adapter.document().sections() {
        println!("[{}]", section.name());
        for (option, value) in section.options() {
            match value {
                OptionValue::Scalar(s) => println!("  {} = {:?}", option, s),
                OptionValue::List(items) => println!("  {} = {:?} (list)", option, items),
            }
        }
    }

    let service = DefaultConfigService::builder()
        .with_source(Box::new(adapter))
        .build()?;
    let length = service.get_or_default(&ConfigKey::new("FORMAT", "max-line-length"), "100");
    println!("\nEffective max-line-length: {}", length);

    Ok(())
}
