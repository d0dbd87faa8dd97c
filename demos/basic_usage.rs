// ============================================================================
// Basic Usage Example
// ============================================================================

use bignumber_input::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Big Number Input Example ===\n");

    // Ether amount between 0.01 and 100, starting at 1.5
    let mut input = BigNumberInputBuilder::wei()
        .value("1500000000000000000")
        .min("10000000000000000")
        .max("100000000000000000000")
        .placeholder("Amount in ETH")
        .build(Arc::new(|raw: &str| println!("  -> host received raw amount {:?}", raw)))
        .unwrap();

    println!("Initial field: {:?}\n", input.view());

    // Simulate a user editing the field keystroke by keystroke
    println!("Typing...");
    for text in ["", "2", "2.", "2.5", "2.5x", "250", "0.001", "0.05"] {
        let outcome = input.handle_edit(text);
        println!(
            "  typed {:<8} => {:<45} field shows {:?}",
            format!("{:?}", text),
            format!("{:?}", outcome),
            input.display_text()
        );
    }

    // Host pushes a new value from elsewhere (e.g. a "max" button)
    println!("\n=== Host Update ===");
    input.set_value(Some("100000000000000000000")).unwrap();
    println!("Field after host update: {:?}", input.display_text());

    // Amounts past native integer range stay exact
    println!("\n=== Large Amounts ===");
    let huge: RawAmount = "123456789012345678901234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    println!("Raw:     {}", huge);
    println!("Display: {}", huge.to_display(18));
    println!("As rust_decimal: {:?}", huge.to_decimal(18));
}
