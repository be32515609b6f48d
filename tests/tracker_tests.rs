use chrono::{NaiveDate, NaiveTime};
use rworkhours::config::Config;
use rworkhours::core::add::{AddLogic, EntryDefaults, EntryInput, next_id};
use rworkhours::core::del::DeleteLogic;
use rworkhours::core::edit::EditLogic;
use rworkhours::core::months::{MonthLogic, available_months, resolve_selected};
use rworkhours::core::settings::SettingsLogic;
use rworkhours::db::pool::DbPool;
use rworkhours::db::store::{KEY_ENTRIES, KEY_SELECTED_MONTH, KeyValueStore, MemoryStore, SqliteStore};
use rworkhours::errors::AppError;
use rworkhours::models::entry::Entry;
use rworkhours::models::settings::Settings;
use rworkhours::models::tracker::Tracker;
use rworkhours::models::year_month::YearMonth;
use rworkhours::utils::formatting::{month_label, resolve_locale};
use rworkhours::utils::number::parse_amount;
use rworkhours::utils::time::next_half_hour;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

fn defaults() -> EntryDefaults {
    EntryDefaults {
        date: d("2024-01-10"),
        start: t("07:00"),
        end: t("15:30"),
    }
}

fn input(date: &str, start: &str, end: &str) -> EntryInput {
    EntryInput {
        date: Some(date.to_string()),
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_add_uses_defaults_for_missing_flags() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    let e = AddLogic::apply(&mut tracker, &mut store, &EntryInput::default(), &defaults()).unwrap();

    assert_eq!(e.date, d("2024-01-10"));
    assert_eq!(e.start, t("07:00"));
    assert_eq!(e.end, t("15:30"));
    assert_eq!(e.hours(), 8.5);
    assert_eq!(e.note, "");
    assert_eq!(e.bonus, 0.0);
    assert_eq!(tracker.entries.len(), 1);
    assert!(store.get(KEY_ENTRIES).unwrap().is_some());
}

#[test]
fn test_add_rejects_cleared_fields() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    let no_date = EntryInput {
        date: Some(String::new()),
        ..Default::default()
    };
    let err = AddLogic::apply(&mut tracker, &mut store, &no_date, &defaults()).unwrap_err();
    assert!(matches!(err, AppError::MissingField("date")));

    let no_end = EntryInput {
        end: Some("  ".to_string()),
        ..Default::default()
    };
    let err = AddLogic::apply(&mut tracker, &mut store, &no_end, &defaults()).unwrap_err();
    assert!(matches!(err, AppError::MissingField("end")));

    assert!(tracker.entries.is_empty());
    assert!(store.get(KEY_ENTRIES).unwrap().is_none());
}

#[test]
fn test_add_rejects_malformed_time() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    let err = AddLogic::apply(
        &mut tracker,
        &mut store,
        &input("2024-01-05", "7am", "15:00"),
        &defaults(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidTime(_)));
    assert!(tracker.entries.is_empty());
}

#[test]
fn test_bonus_defaults_to_zero_when_invalid_or_negative() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    let mut bad = input("2024-01-05", "07:00", "15:00");
    bad.bonus = Some("abc".into());
    let e1 = AddLogic::apply(&mut tracker, &mut store, &bad, &defaults()).unwrap();

    let mut neg = input("2024-01-06", "07:00", "15:00");
    neg.bonus = Some("-10".into());
    let e2 = AddLogic::apply(&mut tracker, &mut store, &neg, &defaults()).unwrap();

    let mut comma = input("2024-01-07", "07:00", "15:00");
    comma.bonus = Some("12,5".into());
    let e3 = AddLogic::apply(&mut tracker, &mut store, &comma, &defaults()).unwrap();

    assert_eq!(e1.bonus, 0.0);
    assert_eq!(e2.bonus, 0.0);
    assert_eq!(e3.bonus, 12.5);
}

#[test]
fn test_ids_stay_unique() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    for day in 1..=5 {
        let date = format!("2024-01-{day:02}");
        AddLogic::apply(&mut tracker, &mut store, &input(&date, "07:00", "15:00"), &defaults()).unwrap();
    }

    let mut ids: Vec<i64> = tracker.entries.iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);

    let existing = vec![Entry::new(5_000, d("2024-01-01"), t("07:00"), t("08:00"), "", 0.0)];
    assert_eq!(next_id(&existing, 1_000), 5_001);
    assert_eq!(next_id(&existing, 9_000), 9_000);
    assert_eq!(next_id(&[], 42), 42);
}

#[test]
fn test_edit_rederives_hours_and_selects_month() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    let e = AddLogic::apply(&mut tracker, &mut store, &input("2024-01-05", "07:00", "15:00"), &defaults()).unwrap();
    assert_eq!(e.hours(), 8.0);

    let change = EntryInput {
        date: Some("2024-02-01".into()),
        end: Some("05:00".into()),
        note: Some("night".into()),
        bonus: Some("15".into()),
        ..Default::default()
    };
    let updated = EditLogic::apply(&mut tracker, &mut store, e.id, &change).unwrap();

    assert_eq!(updated.id, e.id);
    assert_eq!(updated.start, t("07:00"));
    assert_eq!(updated.hours(), 22.0);
    assert_eq!(updated.note, "night");
    assert_eq!(updated.bonus, 15.0);
    assert_eq!(tracker.entries.len(), 1);
    assert_eq!(tracker.selected_month, Some(ym("2024-02")));
    assert_eq!(store.get(KEY_SELECTED_MONTH).unwrap().as_deref(), Some("2024-02"));
}

#[test]
fn test_edit_unknown_id_and_cleared_field() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();
    let e = AddLogic::apply(&mut tracker, &mut store, &input("2024-01-05", "07:00", "15:00"), &defaults()).unwrap();

    let err = EditLogic::apply(&mut tracker, &mut store, 1, &EntryInput::default()).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(1)));

    let cleared = EntryInput {
        start: Some(String::new()),
        ..Default::default()
    };
    let err = EditLogic::apply(&mut tracker, &mut store, e.id, &cleared).unwrap_err();
    assert!(matches!(err, AppError::MissingField("start")));
    assert_eq!(tracker.find(e.id).unwrap().start, t("07:00"));
}

#[test]
fn test_delete_removes_entry() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();
    let a = AddLogic::apply(&mut tracker, &mut store, &input("2024-01-05", "07:00", "15:00"), &defaults()).unwrap();
    let b = AddLogic::apply(&mut tracker, &mut store, &input("2024-01-06", "07:00", "15:00"), &defaults()).unwrap();

    let removed = DeleteLogic::apply(&mut tracker, &mut store, a.id).unwrap();
    assert_eq!(removed.id, a.id);
    assert!(tracker.find(a.id).is_none());
    assert!(tracker.find(b.id).is_some());

    let reloaded = Tracker::load(&store).unwrap();
    assert_eq!(reloaded.entries.len(), 1);

    let err = DeleteLogic::apply(&mut tracker, &mut store, a.id).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(_)));
}

#[test]
fn test_available_months_newest_first_with_current() {
    let entries = vec![
        Entry::new(1, d("2023-11-02"), t("07:00"), t("15:00"), "", 0.0),
        Entry::new(2, d("2024-01-05"), t("07:00"), t("15:00"), "", 0.0),
        Entry::new(3, d("2024-01-09"), t("07:00"), t("15:00"), "", 0.0),
    ];

    let months = available_months(&entries, ym("2024-03"));
    assert_eq!(months, vec![ym("2024-03"), ym("2024-01"), ym("2023-11")]);
}

#[test]
fn test_resolve_selected_falls_back_to_newest() {
    let available = vec![ym("2024-03"), ym("2024-01")];

    assert_eq!(resolve_selected(Some(ym("2024-01")), &available, ym("2024-03")), ym("2024-01"));
    assert_eq!(resolve_selected(Some(ym("2022-07")), &available, ym("2024-03")), ym("2024-03"));
    assert_eq!(resolve_selected(None, &available, ym("2024-03")), ym("2024-03"));
}

#[test]
fn test_month_refresh_persists_selection() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker {
        entries: vec![Entry::new(1, d("2024-01-05"), t("07:00"), t("15:00"), "", 0.0)],
        selected_month: Some(ym("2024-01")),
        ..Default::default()
    };

    let selected = MonthLogic::refresh(&mut tracker, &mut store, ym("2024-03")).unwrap();
    assert_eq!(selected, ym("2024-01"));
    assert_eq!(store.get(KEY_SELECTED_MONTH).unwrap().as_deref(), Some("2024-01"));

    tracker.entries.clear();
    let selected = MonthLogic::refresh(&mut tracker, &mut store, ym("2024-03")).unwrap();
    assert_eq!(selected, ym("2024-03"));
}

#[test]
fn test_month_entries_filtered_and_sorted() {
    let tracker = Tracker {
        entries: vec![
            Entry::new(1, d("2024-01-09"), t("07:00"), t("15:00"), "", 0.0),
            Entry::new(2, d("2024-02-01"), t("07:00"), t("15:00"), "", 0.0),
            Entry::new(3, d("2024-01-02"), t("13:00"), t("15:00"), "", 0.0),
            Entry::new(4, d("2024-01-02"), t("06:00"), t("10:00"), "", 0.0),
        ],
        ..Default::default()
    };

    let ids: Vec<i64> = tracker.month_entries(ym("2024-01")).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 3, 1]);
}

#[test]
fn test_settings_update_and_reload() {
    let mut store = MemoryStore::new();
    let mut tracker = Tracker::default();

    SettingsLogic::apply(&mut tracker, &mut store, Some("32.5"), None).unwrap();
    SettingsLogic::apply(&mut tracker, &mut store, None, Some("not a number")).unwrap();

    let reloaded = Tracker::load(&store).unwrap();
    assert_eq!(reloaded.settings, Settings::new(32.5, 0.0));
}

#[test]
fn test_sqlite_store_round_trip() {
    let mut store = SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap();
    let mut tracker = Tracker::default();

    AddLogic::apply(&mut tracker, &mut store, &input("2024-01-05", "22:00", "06:00"), &defaults()).unwrap();
    SettingsLogic::apply(&mut tracker, &mut store, Some("30"), Some("100")).unwrap();

    let raw = store.get(KEY_ENTRIES).unwrap().unwrap();
    assert!(raw.contains("\"start\":\"22:00\""));
    assert!(raw.contains("\"hours\":8.0"));

    store.set("selectedMonth", "2024-01").unwrap();
    store.set("selectedMonth", "2024-01").unwrap();

    let reloaded = Tracker::load(&store).unwrap();
    assert_eq!(reloaded.entries, tracker.entries);
    assert_eq!(reloaded.settings, Settings::new(30.0, 100.0));
    assert_eq!(reloaded.selected_month, Some(ym("2024-01")));
}

#[test]
fn test_stored_hours_are_ignored_on_load() {
    let mut store = MemoryStore::new();
    store
        .set(
            KEY_ENTRIES,
            r#"[{"id":1700000000123,"date":"2024-01-05","start":"07:00","end":"15:00","note":"old","bonus":0,"hours":99}]"#,
        )
        .unwrap();
    store.set("hourlyRate", "").unwrap();

    let tracker = Tracker::load(&store).unwrap();
    assert_eq!(tracker.entries[0].hours(), 8.0);
    assert_eq!(tracker.settings.hourly_rate, 0.0);
    assert_eq!(tracker.month_summary(ym("2024-01")).total_hours, 8.0);
}

#[test]
fn test_corrupted_entries_are_reported() {
    let mut store = MemoryStore::new();
    store.set(KEY_ENTRIES, "{not json").unwrap();

    let err = Tracker::load(&store).unwrap_err();
    assert!(matches!(err, AppError::Storage { .. }));
}

#[test]
fn test_year_month_parsing() {
    assert_eq!(ym("2024-01").to_string(), "2024-01");
    assert_eq!(ym("2024-12").month0(), 11);
    assert!("2024-13".parse::<YearMonth>().is_err());
    assert!("2024-1".parse::<YearMonth>().is_err());
    assert!("January".parse::<YearMonth>().is_err());
    assert!(ym("2023-12") < ym("2024-01"));
}

#[test]
fn test_parse_amount_defaults_to_zero() {
    assert_eq!(parse_amount(None), 0.0);
    assert_eq!(parse_amount(Some("")), 0.0);
    assert_eq!(parse_amount(Some("x")), 0.0);
    assert_eq!(parse_amount(Some(" 27.5 ")), 27.5);
}

#[test]
fn test_next_half_hour_rounding() {
    assert_eq!(next_half_hour(t("08:10")), t("08:30"));
    assert_eq!(next_half_hour(t("08:00")), t("08:30"));
    assert_eq!(next_half_hour(t("08:30")), t("09:00"));
    assert_eq!(next_half_hour(t("08:59")), t("09:00"));
    assert_eq!(next_half_hour(t("23:45")), t("23:30"));
}

#[test]
fn test_configured_start_only_needed_without_start_flag() {
    let cfg = Config {
        default_start: "7 o'clock".to_string(),
        ..Config::default()
    };

    let given = input("2024-01-05", "08:00", "16:00");
    let defaults = EntryDefaults::for_input(&cfg, &given).expect("start was given");

    let mut tracker = Tracker::default();
    let mut store = MemoryStore::new();
    let entry = AddLogic::apply(&mut tracker, &mut store, &given, &defaults).unwrap();
    assert_eq!(entry.start, t("08:00"));
    assert_eq!(entry.hours(), 8.0);

    let without_start = EntryInput {
        start: None,
        ..given
    };
    let err = EntryDefaults::for_input(&cfg, &without_start).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_month_label_uses_nominative_polish_names() {
    let pl = resolve_locale("pl_PL");
    assert_eq!(month_label(ym("2024-01"), pl), "styczeń 2024");
    assert_eq!(month_label(ym("2025-06"), pl), "czerwiec 2025");
    assert_eq!(month_label(ym("2024-12"), pl), "grudzień 2024");

    assert_eq!(month_label(ym("2024-01"), resolve_locale("en_US")), "January 2024");
}
