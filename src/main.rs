use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use shapeslice::utils::logger::Logger;
use shapeslice::commands::{CommandFactory, ShapesliceCommandFactory};

fn main() {
    let matches = ClapCommand::new("ShapeSlice")
        .version("0.1")
        .about("Slice a GeoTIFF by polygon shapes from a shapefile")
        .arg(
            Arg::new("shapefile")
                .help("Input shapefile")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("raster")
                .help("Input raster (GeoTIFF)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("band")
                .short('b')
                .long("band")
                .help("1-based raster band to slice")
                .value_name("BAND")
                .default_value("1")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "shapeslice.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let verbose = matches.get_flag("verbose");
    if let Err(e) = Logger::init_global_logger("shapeslice-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = ShapesliceCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
