//! Integration tests for vt-output.

#[cfg(test)]
mod transcript_tests {
    use std::path::Path;

    use tempfile::TempDir;

    use vt_building::{BuildingBuilder, BuildingConfig, MemorySink, NotificationSink};
    use vt_core::Frame;
    use vt_event::{EventKind, EventPolicy};

    use crate::tee::TeeSink;
    use crate::transcript::CsvTranscript;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn file_created_with_header() {
        let dir = tmp();
        let path = dir.path().join("transcript.csv");
        let mut transcript = CsvTranscript::create(&path).unwrap();
        transcript.finish().unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["frame", "source", "line"]);
    }

    #[test]
    fn posted_lines_round_trip() {
        let dir = tmp();
        let path = dir.path().join("transcript.csv");
        let mut transcript = CsvTranscript::create(&path).unwrap();

        transcript.post(Frame(0), "building", format_args!("----- IDLE EVENT -----"));
        transcript.post(Frame(1), "car 0", format_args!("reached floor 3"));
        transcript.finish().unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["0", "building", "----- IDLE EVENT -----"]);
        assert_eq!(rows[1], ["1", "car 0", "reached floor 3"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut transcript = CsvTranscript::create(&dir.path().join("t.csv")).unwrap();
        transcript.finish().unwrap();
        transcript.finish().unwrap();
        assert!(transcript.take_error().is_none());
    }

    #[test]
    fn tee_posts_to_both_sinks() {
        let mut tee = TeeSink::new(MemorySink::new(), MemorySink::new());
        tee.post(Frame(4), "car 1", format_args!("closing doors"));

        assert!(tee.first.contains("closing doors"));
        assert!(tee.second.contains("closing doors"));
        assert_eq!(tee.first.lines, tee.second.lines);
    }

    #[test]
    fn same_seed_produces_identical_transcripts() {
        let dir = tmp();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");

        for path in [&a, &b] {
            let mut building = BuildingBuilder::new(BuildingConfig::default())
                .policy(EventPolicy::scripted_looping(vec![
                    EventKind::Arrival,
                    EventKind::Idle,
                    EventKind::Idle,
                ]))
                .seed(21)
                .build()
                .unwrap();
            let mut transcript = CsvTranscript::create(path).unwrap();
            for _ in 0..120 {
                building.operate(&mut transcript);
            }
            transcript.finish().unwrap();
        }

        let bytes_a = std::fs::read(&a).unwrap();
        let bytes_b = std::fs::read(&b).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }

    #[test]
    fn building_run_lands_in_the_file() {
        let dir = tmp();
        let path = dir.path().join("transcript.csv");

        let mut building = BuildingBuilder::new(BuildingConfig::default())
            .policy(EventPolicy::scripted(vec![EventKind::Arrival]))
            .seed(2)
            .build()
            .unwrap();
        let mut transcript = CsvTranscript::create(&path).unwrap();
        for _ in 0..10 {
            building.operate(&mut transcript);
        }
        transcript.finish().unwrap();
        assert!(transcript.take_error().is_none());

        let rows = read_rows(&path);
        assert!(!rows.is_empty());
        assert!(rows.iter().any(|r| r[2].contains("ARRIVAL EVENT")));
    }
}
