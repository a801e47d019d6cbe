//! Command-line front end for lookboard color suggestions
//!
//! Suggests catalog products for a set of lookboard images, or for a single
//! picked color with `--color`.

use lookboard_colors::{
    suggest_for_hex, suggest_for_lookboard, ColorError, FileFetcher, Product, SuggestionConfig,
};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = None;
    let mut config_path = None;
    let mut seed_color = None;
    let mut image_paths: Vec<String> = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "--config" | "--color" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires a value", args[i]);
                    process::exit(1);
                };
                match args[i].as_str() {
                    "--catalog" => catalog_path = Some(value.clone()),
                    "--config" => config_path = Some(value.clone()),
                    _ => seed_color = Some(value.clone()),
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => image_paths.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(catalog_path) = catalog_path else {
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => SuggestionConfig::from_json_file(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Error: Failed to load config '{}': {}", path, e);
            process::exit(1);
        }),
        None => SuggestionConfig::default(),
    };

    let catalog = load_catalog(Path::new(&catalog_path)).unwrap_or_else(|e| {
        eprintln!("Error: Failed to load catalog '{}': {}", catalog_path, e);
        process::exit(1);
    });

    let output = match seed_color {
        Some(hex) => suggest_for_hex(&hex, &catalog, &config)
            .map(|suggestions| serde_json::to_string_pretty(&suggestions)),
        None => {
            if image_paths.is_empty() {
                eprintln!("Error: No lookboard images provided");
                process::exit(1);
            }
            suggest_for_lookboard(&FileFetcher, &image_paths, &catalog, &config)
                .map(|looks| serde_json::to_string_pretty(&looks))
        }
    };

    match output {
        Ok(Ok(json)) => println!("{}", json),
        Ok(Err(e)) => {
            eprintln!("Error: Failed to serialize suggestions: {}", e);
            process::exit(1);
        }
        Err(error) => report(&error),
    }
}

fn load_catalog(path: &Path) -> Result<Vec<Product>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn report(error: &ColorError) -> ! {
    eprintln!("Suggestion failed: {}", error);
    eprintln!("Suggestion: {}", error.user_message());
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} --catalog <products.json> [OPTIONS] <image_path>...", program_name);
    eprintln!();
    eprintln!("Suggest catalog products that harmonize with a lookboard.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog FILE   JSON array of products (required)");
    eprintln!("  --config FILE    JSON suggestion settings (default: built-in)");
    eprintln!("  --color HEX      Suggest for a picked color instead of images");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --catalog products.json look-1.jpg look-2.png", program_name);
    eprintln!("  {} --catalog products.json --color '#FF6B6B'", program_name);
}
