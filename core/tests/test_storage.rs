use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use loadmonitor_core::cli::{render_report, RenderOptions};
use loadmonitor_core::{analyze, load_config, save_report, EngineConfig, EngineError, Session};
use serde_json::Value;

fn tmp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("loadmonitor_{}_{name}", std::process::id()))
}

fn sessions() -> Vec<Session> {
    (0..6)
        .map(|i| Session {
            date: NaiveDate::from_ymd_opt(2024, 3, 4 + i * 2).unwrap(),
            distance: 9.0,
            aerobic_effect: 3.2,
            mean_heart_rate: 148.0,
            mean_pace: Some("5:10".to_string()),
        })
        .collect()
}

#[test]
fn test_missing_config_gives_defaults() {
    let cfg = load_config(tmp_path("finnes_ikke.json")).expect("load_config feilet");
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn test_partial_config_is_merged_with_defaults() {
    let path = tmp_path("cfg.json");
    fs::write(&path, r#"{ "load_scale": 25.0, "chronic_window": 21 }"#).unwrap();

    let cfg = load_config(&path).expect("load_config feilet");
    assert_eq!(cfg.load_scale, 25.0);
    assert_eq!(cfg.chronic_window, 21);
    assert_eq!(cfg.fatigue_span, 7);

    fs::remove_file(&path).ok();
}

#[test]
fn test_bad_config_reports_field_path() {
    let path = tmp_path("bad_cfg.json");
    fs::write(&path, r#"{ "fitness_span": "lang" }"#).unwrap();

    match load_config(&path) {
        Err(EngineError::Json { path: p, .. }) => assert_eq!(p, "fitness_span"),
        other => panic!("forventet JSON-feil, fikk {other:?}"),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn test_save_report_roundtrip() {
    let path = tmp_path("report.json");
    let report = analyze(&sessions(), &EngineConfig::default(), None).unwrap();

    save_report(&report, &path).expect("save_report feilet");
    let v: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(v["sessions"].as_array().unwrap().len(), 6);
    assert_eq!(v["latest"]["summary"]["session_count"], 6);
    assert_eq!(v["latest"]["summary"]["span_days"], 10);
    let recs = v["latest"]["recommendations"].as_array().unwrap();
    assert!(!recs.is_empty());
    assert!(recs.iter().all(|r| r["tag"].is_string() && r["message"].is_string()));
    assert_eq!(recs[0]["message"], report.latest.recommendations[0].message());

    fs::remove_file(&path).ok();
}

#[test]
fn test_text_report_contains_statuses_and_table() {
    let report = analyze(&sessions(), &EngineConfig::default(), None).unwrap();

    let short = render_report(&report, &RenderOptions::default());
    assert!(short.contains("Form (TSB):"));
    assert!(short.contains(report.latest.injury_risk.label()));
    assert!(short.contains(report.latest.recommendations[0].message()));
    assert!(!short.contains("[Sessions]"));

    let full = render_report(&report, &RenderOptions { decimals: 2, show_table: true });
    assert!(full.contains("[Sessions]"));
    assert!(full.contains("2024-03-14"));
}
