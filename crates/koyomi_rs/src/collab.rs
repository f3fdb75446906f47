//! Seams for downstream consumers of a snapshot.
//!
//! Text generation and publishing live outside this workspace; these traits
//! fix the shape of the hand-off so implementations can be swapped.

use crate::snapshot::CalendarSnapshot;

/// Turns a snapshot into prose.
pub trait ProseGenerator {
    type Error: std::error::Error;

    fn generate_prose(&self, snapshot: &CalendarSnapshot) -> Result<String, Self::Error>;
}

/// Posts rendered content somewhere.
pub trait Publisher {
    type Error: std::error::Error;

    fn publish(&self, title: &str, html: &str, labels: &[String]) -> Result<(), Self::Error>;
}

/// Post labels for a snapshot: solar term, micro-season and moon phase names.
pub fn snapshot_labels(snapshot: &CalendarSnapshot) -> Vec<String> {
    vec![
        snapshot.solar_term.sekki.name().to_string(),
        snapshot.micro_season.kou.name.to_string(),
        snapshot.lunar_date.phase.name().to_string(),
    ]
}

/// Default post title, e.g. `2025年12月22日 冬至・乃東生`.
pub fn snapshot_title(snapshot: &CalendarSnapshot) -> String {
    let t = &snapshot.timestamp;
    format!(
        "{}年{}月{}日 {}・{}",
        t.year(),
        t.month(),
        t.day(),
        snapshot.solar_term.sekki.name(),
        snapshot.micro_season.kou.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{SnapshotConfig, snapshot_at};
    use std::cell::RefCell;
    use std::convert::Infallible;

    struct Canned;

    impl ProseGenerator for Canned {
        type Error = Infallible;

        fn generate_prose(&self, s: &CalendarSnapshot) -> Result<String, Infallible> {
            Ok(format!("今日は{}です。", s.solar_term.sekki.name()))
        }
    }

    #[derive(Default)]
    struct Recorder {
        posts: RefCell<Vec<(String, String, Vec<String>)>>,
    }

    impl Publisher for Recorder {
        type Error = Infallible;

        fn publish(&self, title: &str, html: &str, labels: &[String]) -> Result<(), Infallible> {
            self.posts
                .borrow_mut()
                .push((title.to_string(), html.to_string(), labels.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn labels_in_order() {
        let s = snapshot_at("2025-12-21T12:00:00+09:00", &SnapshotConfig::default()).unwrap();
        assert_eq!(snapshot_labels(&s), ["大雪", "鱖魚群", "新月"]);
    }

    #[test]
    fn generate_then_publish() {
        let s = snapshot_at("2025-12-22T12:00:00+09:00", &SnapshotConfig::default()).unwrap();
        let prose = Canned.generate_prose(&s).unwrap();
        let publisher = Recorder::default();
        publisher
            .publish(&snapshot_title(&s), &format!("<p>{prose}</p>"), &snapshot_labels(&s))
            .unwrap();

        let posts = publisher.posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "2025年12月22日 冬至・乃東生");
        assert_eq!(posts[0].1, "<p>今日は冬至です。</p>");
        assert_eq!(posts[0].2[0], "冬至");
    }
}
