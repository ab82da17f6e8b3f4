pub mod a001_player;
pub mod a002_group;
pub mod a003_training_session;
pub mod a004_match;
pub mod a005_assessment;
pub mod a006_drill;
pub mod a007_fee;
pub mod a008_medical_record;
pub mod a009_trial;
pub mod a010_announcement;
pub mod a011_event;
pub mod common;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::{
        classify, filter_view, DisplayToken, FilterKey, Filterable, RecordStore, Tag,
    };

    /// Every tag value a store produces classifies to a non-neutral token,
    /// and filtering twice by any tab equals filtering once.
    fn check_collection<R>(records: Vec<R>)
    where
        R: Filterable + common::Record + PartialEq + std::fmt::Debug,
    {
        let store = RecordStore::new(records);
        for record in store.records() {
            let key = record.filter_key();
            assert_ne!(
                classify::<R::Key>(key.code()),
                DisplayToken::NEUTRAL,
                "{} {}",
                R::full_name(),
                record.id()
            );
        }
        for key in FilterKey::<R::Key>::tabs() {
            let once = store.filtered(key);
            let twice = filter_view(&once, key, |r: &R| r.filter_key());
            assert_eq!(once, twice);
        }
        assert_eq!(store.filtered(FilterKey::All), store.records());
    }

    #[test]
    fn test_every_store_classifies_and_filters_consistently() {
        check_collection(a001_player::seed::players());
        check_collection(a002_group::seed::groups());
        check_collection(a003_training_session::seed::sessions());
        check_collection(a004_match::seed::matches());
        check_collection(a006_drill::seed::drills());
        check_collection(a007_fee::seed::fees());
        check_collection(a008_medical_record::seed::records());
        check_collection(a009_trial::seed::trials());
        check_collection(a010_announcement::seed::announcements());
        check_collection(a011_event::seed::events());
    }

    #[test]
    fn test_collection_names_are_distinct() {
        use common::Record;
        let mut names = vec![
            a001_player::Player::full_name(),
            a002_group::Group::full_name(),
            a003_training_session::TrainingSession::full_name(),
            a004_match::Match::full_name(),
            a005_assessment::Assessment::full_name(),
            a006_drill::Drill::full_name(),
            a007_fee::Fee::full_name(),
            a008_medical_record::MedicalRecord::full_name(),
            a009_trial::Trial::full_name(),
            a010_announcement::Announcement::full_name(),
            a011_event::Event::full_name(),
        ];
        assert_eq!(names[6], "a007_fees");
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
