use clap::Parser;
use rdotswift_cli::{GenerateRequest, InputFormat, OptionOverrides, run_generate_command};
use tracing_subscriber::EnvFilter;

/// Generate Swift static accessors from resource trees.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resource tree files (.json, .yaml); glob patterns are expanded
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Force the input format instead of inferring it from the extension
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// The output file; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// TOML file with generation options
    #[arg(long)]
    config: Option<String>,

    /// Root type name (default: R)
    #[arg(long)]
    class: Option<String>,

    /// Only emit extensions; the root type is declared elsewhere
    #[arg(long)]
    extension: bool,

    /// Omit the generated-by banner and the import
    #[arg(long)]
    no_header: bool,

    /// Target AppKit (NSColor) instead of UIKit (UIColor)
    #[arg(long)]
    appkit: bool,

    /// Wrap the output in `#if <CONDITION>`
    #[arg(long = "if", value_name = "CONDITION")]
    condition: Option<String>,

    /// Always close with `#endif`
    #[arg(long, conflicts_with = "no_endif")]
    endif: bool,

    /// Never close with `#endif`
    #[arg(long)]
    no_endif: bool,

    /// Provenance written as a comment above the declarations
    #[arg(long)]
    source: Option<String>,

    /// Also save the merged resource tree as JSON
    #[arg(long, value_name = "FILE")]
    save_tree: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let request = GenerateRequest {
        inputs: args.inputs,
        input_format: args.input_format,
        output: args.output,
        config: args.config,
        overrides: OptionOverrides {
            class: args.class,
            extension: args.extension,
            no_header: args.no_header,
            appkit: args.appkit,
            condition: args.condition,
            endif: args.endif,
            no_endif: args.no_endif,
            source: args.source,
        },
        save_tree: args.save_tree,
    };

    if let Err(e) = run_generate_command(request) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
