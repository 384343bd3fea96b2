//! Example demonstrating crayons colors
//!
//! Run with: cargo run --example styling

use crayons::{Color, Colorize, Style};

fn main() {
    println!("=== crayons Demo ===\n");

    println!("--- Colors ---");
    for color in crayons::COLORS {
        println!("  {}  - {}", crayons::colorize("sample text", color), color);
    }
    println!("  {}  - normal", crayons::normal("sample text"));
    println!();

    println!("--- Modifiers ---");
    println!("  {}  - bold red", crayons::red("bold red").bold());
    println!("  {}  - underlined cyan", "underlined cyan".cyan().underline());
    println!(
        "  {}  - bold underlined yellow",
        crayons::colorize("both", Style::new(Color::Yellow).bold().underline())
    );
    println!();

    println!("--- Random ---");
    for _ in 0..3 {
        println!("  {}", crayons::random("pick a color"));
    }
    println!();

    println!("--- Replacement ---");
    crayons::replace_colors([(Color::Magenta, Color::Blue)]);
    println!("  {}", crayons::magenta("this is blue!"));
    crayons::reset_replace_colors();
    println!("  {}", crayons::magenta("this is magenta again!"));
    println!();

    println!("--- Disabled ---");
    crayons::disable();
    println!("  {} white {}", crayons::red("red"), crayons::blue("blue"));
    println!("  {}", crayons::green("forced anyway").always());
    crayons::enable();
    println!();

    println!("--- Clean ---");
    let painted = format!("{} clean {}", crayons::red("red").always(), "blue".blue().always());
    println!("  {:?}", crayons::clean(&painted));
}
