use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use epcrawl_core::{AdRecord, AppConfig, ExportFormat};
use epcrawl_scraper::Discovery;

use super::*;
use crate::crawl::{apply_overrides, dry_run_summary};
use crate::export::export_records;

fn test_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_owned(),
        base_url: "https://www.etreproprio.com".to_owned(),
        search_path: "/annonces/thflcpo.odd.g{page}#list".to_owned(),
        start_page: 0,
        max_pages: 30,
        output_path: PathBuf::from("annonces_scrapees.csv"),
        export_format: ExportFormat::Csv,
        request_timeout_secs: 10,
        user_agent: "epcrawl-test/0.1".to_owned(),
        min_delay_ms: 0,
        max_delay_ms: 0,
        dedupe_across_pages: false,
    }
}

fn sample_records() -> Vec<AdRecord> {
    vec![
        AdRecord {
            price: 249_000.0,
            title: "Maison 4 pièces, jardin".to_owned(),
            area_bati: 85.0,
            area_terrain: 320.0,
            room: 4,
        },
        AdRecord {
            price: 0.0,
            title: String::new(),
            area_bati: 45.5,
            area_terrain: 0.0,
            room: 2,
        },
    ]
}

/// A fresh scratch directory per test under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("epcrawl-cli-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read exported file")
}

// -----------------------------------------------------------------------
// argument parsing
// -----------------------------------------------------------------------

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["epcrawl"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_bare_crawl_command() {
    let cli = Cli::try_parse_from(["epcrawl", "crawl"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Crawl(ref args)) if *args == CrawlArgs::default()
    ));
}

#[test]
fn parses_crawl_overrides() {
    let cli = Cli::try_parse_from([
        "epcrawl",
        "crawl",
        "--pages",
        "3",
        "--start-page",
        "2",
        "--output",
        "out/annonces.json",
        "--format",
        "json",
        "--dedupe-across-pages",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Crawl(args)) = cli.command else {
        panic!("expected crawl command");
    };
    assert_eq!(args.pages, Some(3));
    assert_eq!(args.start_page, Some(2));
    assert_eq!(args.output, Some(PathBuf::from("out/annonces.json")));
    assert_eq!(args.format, Some(ExportFormat::Json));
    assert!(args.dedupe_across_pages);
    assert!(!args.dry_run);
}

#[test]
fn parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["epcrawl", "crawl", "--dry-run"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Crawl(CrawlArgs { dry_run: true, .. }))
    ));
}

#[test]
fn rejects_unknown_format() {
    let result = Cli::try_parse_from(["epcrawl", "crawl", "--format", "xlsx"]);
    assert!(result.is_err());
}

#[test]
fn rejects_non_numeric_page_count() {
    let result = Cli::try_parse_from(["epcrawl", "crawl", "--pages", "many"]);
    assert!(result.is_err());
}

#[test]
fn help_is_answered_by_the_argument_parser() {
    let err = Cli::try_parse_from(["epcrawl", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn unknown_crawl_flag_is_a_usage_error() {
    let err = Cli::try_parse_from(["epcrawl", "crawl", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

// -----------------------------------------------------------------------
// dry_run_summary
// -----------------------------------------------------------------------

#[test]
fn dry_run_summary_counts_fetched_pages() {
    let discovery = Discovery {
        urls: vec![
            "https://www.etreproprio.com/immobilier-1".to_owned(),
            "https://www.etreproprio.com/immobilier-2".to_owned(),
        ],
        pages_fetched: 1,
        pages_failed: 0,
    };
    assert_eq!(
        dry_run_summary(&discovery),
        "dry-run: found 2 advertisements on 1 results pages"
    );
}

#[test]
fn dry_run_summary_mentions_failed_pages() {
    let discovery = Discovery {
        urls: Vec::new(),
        pages_fetched: 0,
        pages_failed: 30,
    };
    assert_eq!(
        dry_run_summary(&discovery),
        "dry-run: found 0 advertisements on 0 results pages (30 pages could not be fetched)"
    );
}

// -----------------------------------------------------------------------
// apply_overrides
// -----------------------------------------------------------------------

#[test]
fn no_overrides_keep_config() {
    let config = apply_overrides(test_config(), &CrawlArgs::default());
    assert_eq!(config.max_pages, 30);
    assert_eq!(config.start_page, 0);
    assert_eq!(config.export_format, ExportFormat::Csv);
    assert!(!config.dedupe_across_pages);
}

#[test]
fn overrides_replace_config_values() {
    let args = CrawlArgs {
        pages: Some(2),
        start_page: Some(5),
        output: Some(PathBuf::from("x.json")),
        format: Some(ExportFormat::Json),
        dedupe_across_pages: true,
        dry_run: false,
    };
    let config = apply_overrides(test_config(), &args);
    assert_eq!(config.max_pages, 2);
    assert_eq!(config.start_page, 5);
    assert_eq!(config.output_path, PathBuf::from("x.json"));
    assert_eq!(config.export_format, ExportFormat::Json);
    assert!(config.dedupe_across_pages);
}

#[test]
fn dedupe_flag_absent_keeps_env_setting() {
    let mut config = test_config();
    config.dedupe_across_pages = true;
    let config = apply_overrides(config, &CrawlArgs::default());
    assert!(config.dedupe_across_pages);
}

// -----------------------------------------------------------------------
// export_records
// -----------------------------------------------------------------------

#[test]
fn csv_export_has_header_and_one_row_per_record() {
    let dir = scratch_dir("csv");
    let path = dir.join("annonces.csv");

    export_records(&sample_records(), &path, ExportFormat::Csv).unwrap();

    let content = read(&path);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "price,title,area_bati,area_terrain,room");
    assert_eq!(lines[1], r#"249000.0,"Maison 4 pièces, jardin",85.0,320.0,4"#);
    assert_eq!(lines[2], "0.0,,45.5,0.0,2");
}

#[test]
fn csv_export_of_empty_collection_writes_header_only() {
    let dir = scratch_dir("csv-empty");
    let path = dir.join("annonces.csv");

    export_records(&[], &path, ExportFormat::Csv).unwrap();

    assert_eq!(read(&path).trim_end(), "price,title,area_bati,area_terrain,room");
}

#[test]
fn export_overwrites_existing_file() {
    let dir = scratch_dir("overwrite");
    let path = dir.join("annonces.csv");
    std::fs::write(&path, "stale\ncontent\nthat\nis\nlonger\n").unwrap();

    export_records(&sample_records()[..1], &path, ExportFormat::Csv).unwrap();

    let content = read(&path);
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn export_creates_missing_parent_directory() {
    let dir = scratch_dir("nested");
    let path = dir.join("out").join("annonces.csv");

    export_records(&sample_records(), &path, ExportFormat::Csv).unwrap();

    assert!(path.exists());
}

#[test]
fn json_export_round_trips_records() {
    let dir = scratch_dir("json");
    let path = dir.join("annonces.json");
    let records = sample_records();

    export_records(&records, &path, ExportFormat::Json).unwrap();

    let parsed: Vec<AdRecord> = serde_json::from_str(&read(&path)).unwrap();
    assert_eq!(parsed, records);
}
