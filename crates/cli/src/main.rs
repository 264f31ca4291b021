use std::{fs, process};

use clap::Parser;
use diekert_cli::{dot_files, render_text, App, Command, Report};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Analyze(args) => analyze(args),
        Command::Generate(args) => generate(args),
        Command::Schema => schema(),
    }
}

fn analyze(args: &diekert_cli::AnalyzeArgs) {
    let input = fs::read_to_string(&args.transactions).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", args.transactions.display());
        process::exit(1);
    });

    let transactions = diekert_parser::parse_transactions(&input).unwrap_or_else(|e| {
        eprintln!("{}: {e}", args.transactions.display());
        process::exit(1);
    });
    tracing::info!(
        transactions = transactions.len(),
        file = %args.transactions.display(),
        "parsed transactions"
    );

    let analysis = diekert_core::analyze(&transactions, &args.word, &args.options())
        .unwrap_or_else(|e| {
            eprintln!("Failed to analyze {}: {e}", args.word);
            process::exit(1);
        });

    if let Some(dir) = &args.dot_dir {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory: {e}");
            process::exit(1);
        });
        for (name, dot) in dot_files(&analysis) {
            let path = dir.join(name);
            fs::write(&path, dot).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {e}", path.display());
                process::exit(1);
            });
            tracing::info!(path = %path.display(), "wrote graph");
        }
    }

    if args.json {
        let report = Report::from(&analysis);
        let json = serde_json::to_string(&report).unwrap_or_else(|e| {
            eprintln!("Failed to serialize report: {e}");
            process::exit(1);
        });
        println!("{json}");
    } else {
        print!("{}", render_text(&transactions, &analysis, args.verbose));
    }
}

fn generate(args: &diekert_cli::GenerateArgs) {
    if args.n_transaction == 0 || args.n_variable == 0 {
        eprintln!("--n-transaction and --n-variable must be positive");
        process::exit(1);
    }

    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let samples = diekert_testgen::generator::generate_mult_samples(
        args.n_sample,
        args.n_transaction,
        args.n_variable,
        args.n_read,
        args.word_length,
    );

    for sample in &samples {
        let path = args.output_dir.join(format!("{}.json", sample.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, sample).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });

        let path = args.output_dir.join(format!("{}.txt", sample.get_id()));
        fs::write(&path, sample.to_input()).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} samples to {}",
        samples.len(),
        args.output_dir.display()
    );
}

fn schema() {
    let schema = schemars::schema_for!(Report);
    let json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        process::exit(1);
    });
    println!("{json}");
}
