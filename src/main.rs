mod cli;

use clipstitch::{
    catalog::{ApiClient, TranscriptSearch},
    config,
    session::{PlaybackSession, Services},
};
use clipstitch_common::channels::channel_display_name;
use clipstitch_common::Side;
use clipstitch_parser::{config::civil_offset, HitRecord, Parser as SegmentParser};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clipstitch=trace,clipstitch_parser=debug,clipstitch_common=debug,reqwest=debug"
                .to_string()
        } else {
            "clipstitch=info,clipstitch_parser=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { identifier, json } => parse_identifier(&identifier, json),
        Commands::Search { query } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(search(&query, cli.config.as_deref()))
        }
        Commands::Open {
            channel,
            timestamp,
            back,
            forward,
            download,
            output,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(open(
                OpenArgs {
                    channel,
                    timestamp,
                    back,
                    forward,
                    download,
                    output,
                },
                cli.config.as_deref(),
            ))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("clipstitch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_identifier(identifier: &str, json: bool) -> Result<()> {
    let parser = SegmentParser::default();
    let info = parser.parse(identifier);

    if json {
        let json_str = serde_json::to_string_pretty(&info)?;
        println!("{}", json_str);
        return Ok(());
    }

    println!("Channel: {}", info.channel);
    println!("Label: {}", info.label);
    match info.start {
        Some(start) => println!("Start: {}", start.to_rfc3339()),
        None => println!("Start: unknown"),
    }
    match info.end {
        Some(end) => println!("End: {}", end.to_rfc3339()),
        None => println!("End: unknown"),
    }
    if let Some(date) = info.local_date(&civil_offset()) {
        println!("Date: {}", date);
    }
    if let Some(duration) = info.duration() {
        println!("Duration: {}s", duration.num_seconds());
    }

    Ok(())
}

fn build_client(config: &config::Config) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&config.api).with_neighbor_range(config.session.neighbor_range))
}

async fn search(query: &str, config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let client = build_client(&config);
    let parser = SegmentParser::default();

    let hits = client.search(query).await?;
    if hits.is_empty() {
        println!("No results for {:?}", query);
        return Ok(());
    }

    println!("{} result(s) for {:?}", hits.len(), query);
    for (i, hit) in hits.iter().enumerate() {
        let info = parser.parse_hit(&HitRecord::from(hit));
        let date = info
            .local_date(&civil_offset())
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown date".to_string());
        println!(
            "  [{}] {} {} {}",
            i + 1,
            channel_display_name(&info.channel),
            date,
            info.label
        );
        if let Some(ref text) = hit.text {
            println!("      {}", text.trim());
        }
    }

    Ok(())
}

struct OpenArgs {
    channel: String,
    timestamp: String,
    back: usize,
    forward: usize,
    download: bool,
    output: Option<std::path::PathBuf>,
}

async fn open(args: OpenArgs, config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let client = build_client(&config);
    let mut session = PlaybackSession::new(Services::from_client(client.clone()), config.session);

    let hit = HitRecord::at(args.channel, args.timestamp);
    let playback = session.open_hit(&hit).await?;

    println!(
        "Channel: {} ({})",
        channel_display_name(&playback.channel),
        playback.channel
    );
    println!("Segment: {} ({})", playback.segment, playback.info.label);
    println!("Play: {}", client.segment_url(&playback.channel, &playback.segment)?);
    if !playback.transcript.is_empty() {
        println!("Transcript: {}", playback.transcript.text.trim());
    }

    for (side, steps) in [(Side::Back, args.back), (Side::Forward, args.forward)] {
        for _ in 0..steps {
            let outcome = session.expand(side);
            if !outcome.is_change() {
                println!("{}", outcome);
                break;
            }
        }
    }

    let selection = session.selection()?;
    println!("Selected {} segment(s):", selection.len());
    for segment in selection {
        let marker = if Some(segment) == session.window().anchor() {
            "*"
        } else {
            " "
        };
        println!("  {} {}", marker, segment);
    }

    if let Some(output) = args.output {
        let artifact = session.merge().await?;
        let written = client.download_to(&artifact, &output).await?;
        println!("Saved {} ({} bytes) to {}", artifact, written, output.display());
    } else if args.download {
        let url = session.download_url().await?;
        println!("Download: {}", url);
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&config::Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &config::Config) {
    println!("  Server: {}", config.api.base_url);
    println!("  Timeout: {}s", config.api.timeout_secs);
    println!("  Max extra segments: {}", config.session.max_extra);
    println!("  Neighbor range: {}", config.session.neighbor_range);
    println!(
        "  Transcript window: {}s",
        config.session.transcript_window_secs
    );
}
