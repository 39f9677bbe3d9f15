use clap::{Arg, Command};
use markup_mt::mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator};
use markup_mt::{FilterConfig, MarkupFilter};
use std::env;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("markup-mt")
        .version("0.1.0")
        .about("Tag-safe machine translation for markup documents")
        .arg(
            Arg::new("input")
                .help("Path to the source document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-locale")
                .help("Target language code (e.g., fr, es, de)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the translated document to this file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Filter configuration JSON file"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show translation progress")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let target_locale = matches.get_one::<String>("target-locale").unwrap();
    let source_locale = matches.get_one::<String>("source-locale").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // 1. Build the filter
    let config = match matches.get_one::<String>("config") {
        Some(path) => FilterConfig::from_file(Path::new(path))?,
        None => FilterConfig::default(),
    };
    let filter = MarkupFilter::with_config(config)?;

    // 2. Read the document
    let doc = fs::read_to_string(input)?;
    if verbose {
        println!("📄 Read {} bytes from {}", doc.len(), input);
        let tokenized = filter.tokenize_document(&doc);
        println!(
            "🧱 {} blocks, {} formatting tags",
            tokenized.blocks.len(),
            tokenized.tags.len()
        );
    }

    // 3. Pick a provider
    let translator: Box<dyn MachineTranslator> = if use_mock {
        Box::new(MockTranslator::new(MockMode::Suffix))
    } else {
        if env::var("GOOGLE_TRANSLATE_API_KEY").is_err() {
            eprintln!("❌ GOOGLE_TRANSLATE_API_KEY environment variable not set");
            eprintln!("   Set it with: export GOOGLE_TRANSLATE_API_KEY=your_api_key");
            eprintln!("   Or use --mock to use the mock translator");
            return Err("Missing API key".into());
        }
        Box::new(GoogleTranslateProvider::from_env(
            source_locale,
            target_locale,
        )?)
    };

    if verbose {
        println!(
            "🌍 {} → {} via {}",
            source_locale,
            target_locale,
            translator.provider_name()
        );
    }

    // 4. Translate and write
    let translated = filter
        .translate_document(&doc, translator.as_ref())
        .await?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, &translated)?;
            if verbose {
                println!("✅ Wrote {} bytes to {}", translated.len(), path);
            }
        }
        None => print!("{}", translated),
    }

    Ok(())
}
