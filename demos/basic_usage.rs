// ============================================================================
// Basic Usage Example
// ============================================================================

use pocketcalc::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Pocket Calculator Example ===\n");

    let mut calc = Calculator::new(CalculatorConfig::default(), Arc::new(LoggingEventHandler));

    println!("Typing: 0.1 + 0.2 =");
    for key in "0.1+0.2=".chars() {
        calc.press_key(key);
    }
    println!("Display: {}\n", calc.display());

    println!("Repeated equals: 2 + 3 = = =");
    calc.press(KeyEvent::ClearAll);
    for key in "2+3===".chars() {
        calc.press_key(key);
    }
    println!("Display: {}\n", calc.display());

    println!("Percent in an operation: 200 + 10 %");
    calc.press(KeyEvent::ClearAll);
    for key in "200+10%".chars() {
        calc.press_key(key);
    }
    println!("Display: {}\n", calc.display());

    println!("Division by zero: 8 ÷ 0 =");
    calc.press(KeyEvent::ClearAll);
    let mut events = Vec::new();
    for key in "8÷0=".chars() {
        if let Some(event) = key_event_for_char(key) {
            events.extend(calc.press(event));
        }
    }
    println!("Display: {}", calc.display());
    println!("Clear key now reads: {}", calc.clear_label());

    println!("\nEvents generated:");
    for event in &events {
        match event {
            CalcEvent::DisplayChanged { display } => {
                println!("  display -> {}", display);
            }
            CalcEvent::ErrorEntered { error } => {
                println!("  error: {}", error);
            }
            _ => {}
        }
    }
}
