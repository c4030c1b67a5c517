use clap::Parser;
use page_parity::Comparison;
use page_parity::config::ComparisonConfig;
use page_parity::diff::links::LinkDiffMode;
use std::io::{self, Write};

mod args;
use args::{Args, convert_engine};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load the base configuration, then let flags override it
    let mut config = match &args.config {
        Some(path) => match ComparisonConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                println!("Failed to load configuration: {}", e);
                return;
            }
        },
        None => ComparisonConfig::default(),
    };
    if let Some(engine) = args.engine {
        config.renderer.engine = convert_engine(engine);
    }
    if let Some(webdriver_url) = args.webdriver_url {
        config.renderer.webdriver_url = webdriver_url;
    }
    if args.full_page {
        config.renderer.full_page = true;
    }
    if args.symmetric_links {
        config.link_diff_mode = LinkDiffMode::Symmetric;
    }
    if args.no_link_check {
        config.check_links = false;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }

    println!("Note: Comparison requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Read any URL not supplied on the command line as a line of input
    let url1 = match args.url1 {
        Some(url) => url,
        None => prompt("Enter the first website URL: "),
    };
    let url2 = match args.url2 {
        Some(url) => url,
        None => prompt("Enter the second website URL: "),
    };

    ::log::info!("Starting comparison of {} and {}", url1, url2);

    let start_time = std::time::Instant::now();
    match Comparison::new(url1, url2).with_config(config).run().await {
        Ok(_report) => {
            ::log::info!(
                "Comparison complete in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            // Validation and fetch failures terminate with a printed message
            println!("{}", e);
        }
    }
}

/// Prints a prompt and reads one trimmed line from standard input
fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
