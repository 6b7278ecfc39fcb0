//! Keypad Calculator - CLI Entry Point
//!
//! Commands:
//! - `keypad-calc` / `keypad-calc tui` - Interactive terminal keypad
//! - `keypad-calc press <keys>...` - Feed a press sequence and print the display
//! - `keypad-calc test` - Built-in self-test

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keypad-calc")]
#[command(version)]
#[command(about = "A four-function keypad calculator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive keypad (default)
    Tui,
    /// Press a sequence of keys and print the resulting display
    Press {
        /// Keys by label, symbol or test id, e.g. `5 + 3 =` or `number-5 add-button`
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the display after every press
        #[arg(short, long)]
        trace: bool,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            init_logging(cli.verbose, "off");
            run_tui();
        }
        Some(Commands::Press { keys, trace, json }) => {
            init_logging(cli.verbose, "warn");
            press_keys(&keys, trace, json);
        }
        Some(Commands::Test) => {
            init_logging(cli.verbose, "warn");
            run_self_test();
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8, quiet: &str) {
    let level = match verbose {
        0 => quiet,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "tui")]
fn run_tui() {
    if let Err(e) = keypad::run_keypad() {
        eprintln!("❌ Terminal error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui() {
    eprintln!("❌ Built without the `tui` feature. Use `press` instead.");
    std::process::exit(1);
}

fn press_keys(tokens: &[String], trace: bool, json: bool) {
    use keypad::{parse_sequence, Calculator};

    let keys = match parse_sequence(&tokens.join(" ")) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut calc = Calculator::new();
    for key in keys {
        let display = calc.press(key.event());
        if trace {
            println!("{:>3}  {:<16} {}", key.label(), key.test_id(), display);
        }
    }

    if json {
        match serde_json::to_string_pretty(&calc.snapshot()) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("❌ Failed to serialize state: {}", e);
                std::process::exit(1);
            }
        }
    } else if !trace {
        println!("{}", calc.display());
    }
}

fn run_self_test() {
    use keypad::{parse_sequence, Calculator};

    println!("━━━ Keypad Calculator Self-Test ━━━");
    println!();

    let scenarios = [
        ("Digit concatenation", "5 2", "52"),
        ("Leading zero suppressed", "0 0 7", "7"),
        ("Single decimal point", "1 . . 2", "1.2"),
        ("Addition", "5 + 3 =", "8"),
        ("Divide by zero shows 0", "6 / 0 =", "0"),
        ("Chained operators", "2 + 3 + 4 =", "9"),
        ("Equals without operator", "7 =", "7"),
        ("Repeated equals", "5 + 3 = = =", "8"),
        ("Clear", "9 × 4 AC", "0"),
    ];

    let mut passed = 0;
    let mut failed = 0;

    for (name, sequence, expected) in scenarios {
        print!("{}... ", name);
        let keys = match parse_sequence(sequence) {
            Ok(keys) => keys,
            Err(e) => {
                println!("✗ ({})", e);
                failed += 1;
                continue;
            }
        };

        let mut calc = Calculator::new();
        calc.press_all(keys.iter().map(|k| k.event()));
        if calc.display() == expected {
            println!("✓");
            passed += 1;
        } else {
            println!("✗ (got {}, expected {})", calc.display(), expected);
            failed += 1;
        }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_args(args: &[&str]) -> (Vec<String>, u8) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Press { keys, .. }) => (keys, cli.verbose),
            _ => panic!("expected press subcommand"),
        }
    }

    #[test]
    fn test_trailing_verbose_flag_is_not_a_key() {
        let (keys, verbose) = press_args(&["keypad-calc", "press", "5", "+", "3", "=", "-v"]);
        assert_eq!(keys, ["5", "+", "3", "="]);
        assert_eq!(verbose, 1);
    }

    #[test]
    fn test_bare_minus_is_a_key() {
        let (keys, verbose) = press_args(&["keypad-calc", "-vv", "press", "9", "-", "4", "="]);
        assert_eq!(keys, ["9", "-", "4", "="]);
        assert_eq!(verbose, 2);
    }
}
