use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::{collections::HashMap, path::PathBuf};
use stocker_core::{
    rank_last, rank_next, Cell, CsvSnapshot, Error, Extractor, Grid, GridSource, Program,
    ProgramTable, RowError, StockKind, ARIZONA,
};

fn snapshot_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures/snapshots")
}

fn snapshot_extractor(base_year: i32) -> Extractor<CsvSnapshot> {
    let table = ProgramTable::builtin().unwrap();
    Extractor::with_table(CsvSnapshot::new(snapshot_dir(), table.clone()), table)
        .base_year(base_year)
}

fn noon(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    ARIZONA.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn names(ranked: &[stocker_core::RankedEntry]) -> Vec<&str> {
    ranked.iter().map(|r| r.water_name.as_str()).collect()
}

#[tokio::test]
async fn test_winter_snapshot_spans_new_year() {
    let set = snapshot_extractor(2024)
        .extract(Program::Winter, &[])
        .await
        .unwrap();

    assert_eq!(
        set.water_names,
        vec![
            "Lynx Lake",
            "Dead Horse Ranch Lagoon",
            "Fool Hollow Lake",
            "Goldwater Lake"
        ]
    );
    assert_eq!(set.len(), 3);
    assert_eq!(set.dropped.len(), 1);
    assert_eq!(set.dropped[0].water_name, "Goldwater Lake");
    assert_eq!(
        set.dropped[0].error,
        RowError::LengthMismatch {
            expected: 17,
            found: 18
        }
    );

    let lynx = set.find("lynx lake").unwrap();
    assert_eq!(lynx.entries.len(), 17);
    assert_eq!(lynx.entries[0].ymd(), (2024, 11, 4));
    assert_eq!(lynx.entries[8].ymd(), (2024, 12, 30));
    assert_eq!(lynx.entries[9].ymd(), (2025, 1, 6));
    assert_eq!(lynx.entries[16].ymd(), (2025, 2, 24));
    let stocked: Vec<(i32, u32, u32)> = lynx
        .entries
        .iter()
        .filter(|e| e.stock.is_stocked())
        .map(|e| e.ymd())
        .collect();
    assert_eq!(
        stocked,
        vec![(2024, 11, 4), (2024, 12, 2), (2024, 12, 16), (2025, 1, 20)]
    );

    let fool_hollow = set.find("Fool Hollow Lake").unwrap();
    assert_eq!(fool_hollow.entries[2].stock, StockKind::Unknown);
    assert_eq!(fool_hollow.entries[8].stock, StockKind::Trout);
}

#[tokio::test]
async fn test_winter_rankings() {
    let set = snapshot_extractor(2024)
        .extract(Program::Winter, &[])
        .await
        .unwrap();
    let now = noon(2025, 1, 1);

    let next = rank_next(&set, &now);
    assert_eq!(names(&next), vec!["Lynx Lake", "Dead Horse Ranch Lagoon"]);
    assert_eq!(next[0].entry.ymd(), (2025, 1, 20));
    assert_eq!(next[1].entry.ymd(), (2025, 2, 17));

    let last = rank_last(&set, &now);
    assert_eq!(
        names(&last),
        vec!["Fool Hollow Lake", "Lynx Lake", "Dead Horse Ranch Lagoon"]
    );
    assert_eq!(last[0].entry.ymd(), (2024, 12, 30));
}

#[tokio::test]
async fn test_cfp_snapshot_with_filter() {
    let waters = vec!["KIWANIS LAKE".to_string(), "riverview lake".to_string()];
    let set = snapshot_extractor(2025)
        .extract(Program::Cfp, &waters)
        .await
        .unwrap();

    assert_eq!(set.water_names.len(), 3);
    assert_eq!(
        set.calendars.keys().collect::<Vec<_>>(),
        vec!["Kiwanis Lake", "Riverview Lake"]
    );

    let kiwanis = set.find("Kiwanis Lake").unwrap();
    let days: Vec<(u32, u32)> = kiwanis
        .entries
        .iter()
        .map(|e| (e.month.number_from_month(), e.day))
        .collect();
    assert_eq!(
        days,
        vec![(3, 3), (3, 10), (3, 17), (3, 24), (3, 31), (4, 7), (4, 14)]
    );

    let riverview = set.find("riverview lake").unwrap();
    assert_eq!(riverview.entries[3].stock, StockKind::Catfish);
    assert_eq!(riverview.entries[5].stock, StockKind::Unknown);
    assert_eq!(
        riverview.next(&noon(2025, 3, 25)).map(|e| e.ymd()),
        Some((2025, 4, 7))
    );
}

/// Serves grids from memory, keyed by range.
struct MemoryGrids(HashMap<String, Grid>);

#[async_trait]
impl GridSource for MemoryGrids {
    async fn fetch(&self, _spreadsheet_id: &str, sheet_name: &str, range: &str) -> stocker_core::Result<Grid> {
        self.0.get(range).cloned().ok_or_else(|| Error::Transport {
            sheet: sheet_name.to_string(),
            range: range.to_string(),
            source: "connection reset".into(),
        })
    }
}

fn text_row(tokens: &[&str]) -> Vec<Cell> {
    tokens.iter().map(|t| Cell::from(*t)).collect()
}

#[tokio::test]
async fn test_transport_errors_surface() {
    let source = MemoryGrids(HashMap::new());
    let extractor = Extractor::new(source).unwrap().base_year(2024);
    let err = extractor.extract(Program::Cfp, &[]).await.unwrap_err();
    match err {
        Error::Transport { range, source, .. } => {
            assert_eq!(range, "B8:9");
            assert_eq!(source.to_string(), "connection reset");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_month_overflow_is_fatal() {
    let mut grids = HashMap::new();
    grids.insert(
        "B4:5".to_string(),
        vec![text_row(&["June"]), text_row(&["24", "1"])],
    );
    grids.insert("A9:AD".to_string(), vec![text_row(&["Lake", "x"])]);
    let extractor = Extractor::new(MemoryGrids(grids)).unwrap().base_year(2024);
    assert!(matches!(
        extractor.extract(Program::SpringSummer, &[]).await,
        Err(Error::MonthOverflow { index: 1, months: 1 })
    ));
}

#[tokio::test]
async fn test_numeric_cells_read_as_empty() {
    let mut grids = HashMap::new();
    grids.insert(
        "B8:9".to_string(),
        vec![
            vec![Cell::from("May")],
            vec![Cell::from("5"), Cell::Number(12.0), Cell::from("19")],
        ],
    );
    grids.insert(
        "A11:Z".to_string(),
        vec![vec![Cell::from("Cortez Lake"), Cell::Number(1.0), Cell::from("x")]],
    );
    let extractor = Extractor::new(MemoryGrids(grids)).unwrap().base_year(2024);
    let set = extractor.extract(Program::Cfp, &[]).await.unwrap();
    let cortez = set.find("Cortez Lake").unwrap();
    assert_eq!(cortez.entries.len(), 2);
    assert_eq!(cortez.entries[0].stock, StockKind::None);
    assert_eq!(cortez.entries[1].stock, StockKind::Trout);
    assert_eq!(cortez.entries[1].day, 19);
}
