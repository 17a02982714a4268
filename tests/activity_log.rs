#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use walt::db::activity_log::ActivityLog;
    use walt::db::db::Db;
    use walt::db::titles::title_id;

    struct LogTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for LogTestContext {
        fn setup() -> Self {
            LogTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl LogTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("walt.db")
        }
    }

    fn ts(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_at_most_one_open_interval(ctx: &mut LogTestContext) {
        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();

        log.log_transition("Editor", ts(9, 0, 0)).unwrap();
        log.log_transition("Browser", ts(9, 10, 0)).unwrap();
        log.log_transition("Terminal", ts(9, 20, 0)).unwrap();

        let intervals = log.intervals().unwrap();
        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals.iter().filter(|i| i.end.is_none()).count(), 1);

        // Intervals 1..N-1 closed, interval N open, stitched end-to-start.
        assert_eq!(intervals[0].end, Some(ts(9, 10, 0)));
        assert_eq!(intervals[1].end, Some(ts(9, 20, 0)));
        assert!(intervals[2].end.is_none());
        assert_eq!(intervals[2].start, ts(9, 20, 0));
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_summary_round_trip(ctx: &mut LogTestContext) {
        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();

        log.log_transition("A", ts(10, 0, 0)).unwrap();
        log.log_transition("B", ts(10, 5, 30)).unwrap();

        let summary = log.title_summary(ts(10, 0, 0), ts(10, 5, 30)).unwrap();
        assert_eq!(summary.len(), 2);
        // A ran for the whole window; B is still open and clips to the
        // window end, contributing zero.
        assert_eq!(summary[0], ("A".to_string(), 330));
        assert_eq!(summary[1], ("B".to_string(), 0));
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_summary_clips_to_window(ctx: &mut LogTestContext) {
        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();

        log.log_transition("A", ts(8, 0, 0)).unwrap();
        log.log_transition("B", ts(12, 0, 0)).unwrap();

        // Window covers only the second hour of A's four-hour interval.
        let summary = log.title_summary(ts(9, 0, 0), ts(10, 0, 0)).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0], ("A".to_string(), 3600));
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_open_interval_runs_through_window_end(ctx: &mut LogTestContext) {
        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();

        log.log_transition("A", ts(9, 0, 0)).unwrap();

        // Still open: effective end for the summary is the window end.
        let summary = log.title_summary(ts(9, 0, 0), ts(9, 30, 0)).unwrap();
        assert_eq!(summary, vec![("A".to_string(), 1800)]);
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_project_summary_drops_zero_durations(ctx: &mut LogTestContext) {
        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();

        log.log_transition("A", ts(9, 0, 0)).unwrap();
        log.log_transition("B", ts(9, 30, 0)).unwrap();

        // Everything defaults to project 1, so there is exactly one group;
        // B's zero-duration open interval does not add a second one.
        let summary = log.project_summary(ts(9, 0, 0), ts(9, 30, 0)).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].0, 1);
        assert_eq!(summary[0].1, "Misc");
        assert_eq!(summary[0].2, 1800);
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_existing_title_keeps_project_assignment(ctx: &mut LogTestContext) {
        use walt::db::projects::Projects;
        use walt::db::titles::Titles;

        let path = ctx.db_path();
        let mut log = ActivityLog::new(&path).unwrap();
        log.log_transition("Editor", ts(9, 0, 0)).unwrap();

        let project = Projects::new(&path).unwrap().create("Work").unwrap();
        Titles::new(&path).unwrap().assign_project(title_id("Editor"), project).unwrap();

        // Logging the same title again must not reset it to Misc.
        log.log_transition("Browser", ts(9, 10, 0)).unwrap();
        log.log_transition("Editor", ts(9, 20, 0)).unwrap();

        let titles = Titles::new(&path).unwrap().list().unwrap();
        let editor = titles.iter().find(|t| t.title == "Editor").unwrap();
        assert_eq!(editor.project_id, project);
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_bootstrap_is_idempotent(ctx: &mut LogTestContext) {
        let path = ctx.db_path();

        let db = Db::init(&path, ts(9, 0, 0)).unwrap();
        drop(db);
        let db = Db::init(&path, ts(9, 1, 0)).unwrap();

        let misc_rows: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM projects WHERE id = 1 AND name = 'Misc'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(misc_rows, 1);
        assert!(Db::validate_schema(&db.conn).unwrap());
    }

    #[test_context(LogTestContext)]
    #[test]
    fn test_init_closes_dangling_interval(ctx: &mut LogTestContext) {
        let path = ctx.db_path();

        let mut log = ActivityLog::new(&path).unwrap();
        log.log_transition("Editor", ts(9, 0, 0)).unwrap();
        assert!(log.open_interval().unwrap().is_some());
        drop(log);

        // Simulated restart after an unclean shutdown.
        Db::init(&path, ts(11, 0, 0)).unwrap();

        let mut log = ActivityLog::new(&path).unwrap();
        assert!(log.open_interval().unwrap().is_none());
        let intervals = log.intervals().unwrap();
        assert_eq!(intervals[0].end, Some(ts(11, 0, 0)));
    }
}
