use clap::Parser;
use std::process;
use storm_reporter::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - output has already been rendered by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Storm Reporter - NOAA Storm Event Rankings");
    println!("==========================================");
    println!();
    println!("Summarise NOAA storm-event data into top-N tables of event types");
    println!("by fatalities, injuries, property damage, and crop damage.");
    println!();
    println!("USAGE:");
    println!("    storm-reporter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Generate the four ranking tables (main command)");
    println!("    validate    Check an input file without rendering tables");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate the default top-10 report:");
    println!("    storm-reporter report storms.csv");
    println!();
    println!("    # Top-5 tables as JSON, written to a file:");
    println!("    storm-reporter report storms.csv --top-n 5 \\");
    println!("                           --output-format json --output-file report.json");
    println!();
    println!("    # Check a new export for unknown damage exponent codes:");
    println!("    storm-reporter validate storms.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    storm-reporter <COMMAND> --help");
}
