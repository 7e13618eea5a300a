//! List the scale table for a base unit.

use swatchgrid::{fmt_number, GRID_SCALE};

use super::prefs::load_prefs;

/// Execute the scales command.
pub fn cmd_scales(args: &[String]) {
    let mut base_unit = load_prefs().base_unit;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-b" | "--base" => {
                i += 1;
                if let Some(raw) = args.get(i) {
                    match raw.parse::<f64>() {
                        Ok(v) if v > 0.0 && v.is_finite() => base_unit = v,
                        _ => {
                            eprintln!("Error: --base expects a positive number, got '{}'", raw);
                            std::process::exit(1);
                        }
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    println!("Scale table (base unit: {}px)", fmt_number(base_unit));
    for scale in GRID_SCALE {
        println!("  x{:<4} -> {}px", fmt_number(*scale), fmt_number(base_unit * scale));
    }
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("swatchgrid scales - List the scale table for a base unit");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    swatchgrid scales [-b <px>]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -b, --base <px>    Base unit (default: last used, else 8)");
}
