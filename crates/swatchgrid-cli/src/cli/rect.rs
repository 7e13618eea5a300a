//! Free-form rectangle generation - the manual entry counterpart to the
//! fixed scale-table grid.
//!
//! Accepts arbitrary width/height/colors, generates one labeled SVG
//! rectangle, and copies it to the clipboard (or writes it to a file or
//! stdout with `-o`).

use std::fs;

use swatchgrid::{generate_rect, RectSpec};

use super::actions::{copy_with_feedback, StderrNotify, SystemClipboard};

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Clipboard,
    Stdout,
    File(String),
}

/// Parse `rect` arguments into a spec and output target.
///
/// Numeric flags are validated strictly: a value that doesn't parse, or a
/// non-positive dimension, is an error rather than a silently malformed
/// document. Stroke width may be zero.
pub fn parse_rect_args(args: &[String]) -> Result<(RectSpec, Output), String> {
    let mut spec = RectSpec::default();
    let mut output = Output::Clipboard;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                spec.width = parse_dimension("--width", args.get(i))?;
            }
            "--height" => {
                i += 1;
                spec.height = parse_dimension("--height", args.get(i))?;
            }
            "--stroke-width" | "-w" => {
                i += 1;
                spec.stroke_width = parse_non_negative("--stroke-width", args.get(i))?;
            }
            "--fill" => {
                i += 1;
                spec.fill_color = required_value("--fill", args.get(i))?;
            }
            "--stroke" => {
                i += 1;
                spec.stroke_color = required_value("--stroke", args.get(i))?;
            }
            "--bg" => {
                i += 1;
                spec.background_color = required_value("--bg", args.get(i))?;
            }
            "-o" | "--output" => {
                i += 1;
                let target = required_value("--output", args.get(i))?;
                output = if target == "-" {
                    Output::Stdout
                } else {
                    Output::File(target)
                };
            }
            other => {
                return Err(format!("unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok((spec, output))
}

fn required_value(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .map(|v| v.to_string())
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_dimension(flag: &str, value: Option<&String>) -> Result<f64, String> {
    let raw = required_value(flag, value)?;
    match raw.parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(v),
        _ => Err(format!("{} expects a positive number, got '{}'", flag, raw)),
    }
}

fn parse_non_negative(flag: &str, value: Option<&String>) -> Result<f64, String> {
    let raw = required_value(flag, value)?;
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Ok(v),
        _ => Err(format!("{} expects a non-negative number, got '{}'", flag, raw)),
    }
}

/// Execute the rect command.
pub fn cmd_rect(args: &[String]) {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let (spec, output) = match parse_rect_args(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let svg = generate_rect(&spec);

    match output {
        Output::Stdout => {
            print!("{}", svg);
        }
        Output::File(path) => {
            if let Err(e) = fs::write(&path, &svg) {
                eprintln!("Error: failed to write {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", path);
        }
        Output::Clipboard => {
            // Copy failure is reported, not fatal
            copy_with_feedback(&mut SystemClipboard::new(), &mut StderrNotify, &svg);
        }
    }
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("swatchgrid rect - Generate a labeled SVG rectangle");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    swatchgrid rect [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --width <px>           Rectangle width (default: 64)");
    eprintln!("    --height <px>          Rectangle height (default: 64)");
    eprintln!("    --fill <color>         Fill color (default: pink)");
    eprintln!("    --stroke <color>       Stroke color (default: red)");
    eprintln!("    -w, --stroke-width <n> Stroke width (default: 4)");
    eprintln!("    --bg <color>           Background color (default: red)");
    eprintln!("    -o, --output <file>    Write to file instead of clipboard (- for stdout)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    # 64x64 default rectangle, straight to the clipboard");
    eprintln!("    swatchgrid rect");
    eprintln!();
    eprintln!("    # Wide banner printed to stdout");
    eprintln!("    swatchgrid rect --width 320 --height 80 --fill '#BDE0FE' -o -");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let (spec, output) = parse_rect_args(&[]).unwrap();
        assert_eq!(spec, RectSpec::default());
        assert_eq!(output, Output::Clipboard);
    }

    #[test]
    fn parses_all_flags() {
        let (spec, output) = parse_rect_args(&args(&[
            "--width", "320", "--height", "80", "--fill", "teal", "--stroke", "navy",
            "-w", "2", "--bg", "white", "-o", "-",
        ]))
        .unwrap();
        assert_eq!(spec.width, 320.0);
        assert_eq!(spec.height, 80.0);
        assert_eq!(spec.fill_color, "teal");
        assert_eq!(spec.stroke_color, "navy");
        assert_eq!(spec.stroke_width, 2.0);
        assert_eq!(spec.background_color, "white");
        assert_eq!(output, Output::Stdout);
    }

    #[test]
    fn rejects_non_numeric_width() {
        let err = parse_rect_args(&args(&["--width", "wide"])).unwrap_err();
        assert!(err.contains("--width"));
        assert!(err.contains("wide"));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(parse_rect_args(&args(&["--width", "0"])).is_err());
        assert!(parse_rect_args(&args(&["--height", "-5"])).is_err());
        // Stroke width of zero is fine (no stroke)
        let (spec, _) = parse_rect_args(&args(&["-w", "0"])).unwrap();
        assert_eq!(spec.stroke_width, 0.0);
    }

    #[test]
    fn rejects_missing_value_and_unknown_flag() {
        assert!(parse_rect_args(&args(&["--width"])).is_err());
        assert!(parse_rect_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn file_output_target() {
        let (_, output) = parse_rect_args(&args(&["-o", "out.svg"])).unwrap();
        assert_eq!(output, Output::File("out.svg".to_string()));
    }
}
