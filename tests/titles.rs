#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use walt::db::activity_log::ActivityLog;
    use walt::db::titles::{title_id, Titles};
    use walt::libs::error::StoreError;

    struct TitlesTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TitlesTestContext {
        fn setup() -> Self {
            TitlesTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TitlesTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("walt.db")
        }
    }

    fn ts(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_title_id_is_stable_crc32() {
        assert_eq!(title_id(""), 0);
        assert_eq!(title_id("Chrome"), title_id("Chrome"));
        assert_ne!(title_id("Chrome"), title_id("chrome"));
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_checksum_collision_merges_titles(ctx: &mut TitlesTestContext) {
        // "plumless" and "buckeroo" are a known CRC-32 collision pair: the
        // store treats them as one title entity. Documented contract, not a
        // bug to fix here.
        assert_eq!(title_id("plumless"), title_id("buckeroo"));

        let mut log = ActivityLog::new(&ctx.db_path()).unwrap();
        log.log_transition("plumless", ts(9, 0)).unwrap();
        log.log_transition("filler", ts(9, 5)).unwrap();
        log.log_transition("buckeroo", ts(9, 10)).unwrap();

        let titles = Titles::new(&ctx.db_path()).unwrap().list().unwrap();
        assert_eq!(titles.len(), 2);
        // First writer wins the text; both intervals share the row.
        assert!(titles.iter().any(|t| t.title == "plumless"));
        let owned = log
            .intervals()
            .unwrap()
            .iter()
            .filter(|i| i.title_id == title_id("plumless"))
            .count();
        assert_eq!(owned, 2);
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_delete_removes_title_and_intervals(ctx: &mut TitlesTestContext) {
        let path = ctx.db_path();
        let mut log = ActivityLog::new(&path).unwrap();
        log.log_transition("Editor", ts(9, 0)).unwrap();
        log.log_transition("Browser", ts(9, 10)).unwrap();
        log.log_transition("Editor", ts(9, 20)).unwrap();

        let mut titles = Titles::new(&path).unwrap();
        titles.delete(title_id("Editor")).unwrap();

        let remaining = titles.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Browser");

        let intervals = log.intervals().unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].title_id, title_id("Browser"));
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_delete_missing_title(ctx: &mut TitlesTestContext) {
        let mut titles = Titles::new(&ctx.db_path()).unwrap();
        assert!(matches!(titles.delete(12345).unwrap_err(), StoreError::NotFound(12345)));
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_merge_moves_intervals_to_target(ctx: &mut TitlesTestContext) {
        let path = ctx.db_path();
        let mut log = ActivityLog::new(&path).unwrap();

        // Alternate so "Chrome" owns 3 intervals and "chrome.exe" owns 2.
        log.log_transition("Chrome", ts(9, 0)).unwrap();
        log.log_transition("chrome.exe", ts(9, 10)).unwrap();
        log.log_transition("Chrome", ts(9, 20)).unwrap();
        log.log_transition("chrome.exe", ts(9, 30)).unwrap();
        log.log_transition("Chrome", ts(9, 40)).unwrap();

        let mut titles = Titles::new(&path).unwrap();
        let merged = titles.merge(&[title_id("Chrome"), title_id("chrome.exe")]).unwrap();
        assert_eq!(merged, 1);

        let remaining = titles.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Chrome");

        let intervals = log.intervals().unwrap();
        assert_eq!(intervals.len(), 5);
        assert!(intervals.iter().all(|i| i.title_id == title_id("Chrome")));
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_merge_requires_two_existing_titles(ctx: &mut TitlesTestContext) {
        let path = ctx.db_path();
        let mut log = ActivityLog::new(&path).unwrap();
        log.log_transition("Chrome", ts(9, 0)).unwrap();

        let mut titles = Titles::new(&path).unwrap();
        // Single id.
        assert!(matches!(titles.merge(&[title_id("Chrome")]).unwrap_err(), StoreError::NotFound(_)));
        // Missing target.
        assert!(matches!(titles.merge(&[9999, title_id("Chrome")]).unwrap_err(), StoreError::NotFound(_)));
        // No existing source.
        assert!(matches!(
            titles.merge(&[title_id("Chrome"), 9999]).unwrap_err(),
            StoreError::NotFound(_)
        ));

        // Nothing was merged away.
        assert_eq!(titles.list().unwrap().len(), 1);
    }

    #[test_context(TitlesTestContext)]
    #[test]
    fn test_assign_missing_title(ctx: &mut TitlesTestContext) {
        let mut titles = Titles::new(&ctx.db_path()).unwrap();
        assert!(matches!(titles.assign_project(777, 1).unwrap_err(), StoreError::NotFound(777)));
    }
}
