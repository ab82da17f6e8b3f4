use std::sync::Arc;

use contracts::domain::{
    a001_player::{self, Player},
    a002_group::{self, Group},
    a003_training_session::{self, TrainingSession},
    a004_match::{self, Match},
    a005_assessment::{self, Assessment},
    a006_drill::{self, Drill},
    a007_fee::{self, Fee},
    a008_medical_record::{self, MedicalRecord},
    a009_trial::{self, Trial},
    a010_announcement::{self, Announcement},
    a011_event::{self, Event},
};
use contracts::domain::common::Record;
use contracts::shared::record::RecordStore;
use contracts::system::auth::{CredentialVerifier, MockCredentialTable};
use tokio::sync::RwLock;

use crate::system::auth::jwt::JwtKeys;

/// One in-memory store per page. Contents reset on restart.
pub struct Stores {
    pub players: RwLock<RecordStore<Player>>,
    pub groups: RwLock<RecordStore<Group>>,
    pub training: RwLock<RecordStore<TrainingSession>>,
    pub matches: RwLock<RecordStore<Match>>,
    pub assessments: RwLock<RecordStore<Assessment>>,
    pub drills: RwLock<RecordStore<Drill>>,
    pub fees: RwLock<RecordStore<Fee>>,
    pub medical: RwLock<RecordStore<MedicalRecord>>,
    pub trials: RwLock<RecordStore<Trial>>,
    pub announcements: RwLock<RecordStore<Announcement>>,
    pub events: RwLock<RecordStore<Event>>,
}

impl Stores {
    /// Stores filled with the demo rows
    pub fn seeded() -> Self {
        Self {
            players: store(a001_player::seed::players()),
            groups: store(a002_group::seed::groups()),
            training: store(a003_training_session::seed::sessions()),
            matches: store(a004_match::seed::matches()),
            assessments: store(a005_assessment::seed::assessments()),
            drills: store(a006_drill::seed::drills()),
            fees: store(a007_fee::seed::fees()),
            medical: store(a008_medical_record::seed::records()),
            trials: store(a009_trial::seed::trials()),
            announcements: store(a010_announcement::seed::announcements()),
            events: store(a011_event::seed::events()),
        }
    }
}

fn store<R: Record>(seed: Vec<R>) -> RwLock<RecordStore<R>> {
    let store = RecordStore::new(seed);
    tracing::debug!("{}: {} seed records", R::full_name(), store.len());
    RwLock::new(store)
}

/// Record type that has a store in [`Stores`]
pub trait StoredRecord: Record + Send + Sync + 'static {
    fn store(stores: &Stores) -> &RwLock<RecordStore<Self>>;
}

macro_rules! stored_record {
    ($($record:ty => $field:ident),+ $(,)?) => {
        $(
            impl StoredRecord for $record {
                fn store(stores: &Stores) -> &RwLock<RecordStore<Self>> {
                    &stores.$field
                }
            }
        )+
    };
}

stored_record! {
    Player => players,
    Group => groups,
    TrainingSession => training,
    Match => matches,
    Assessment => assessments,
    Drill => drills,
    Fee => fees,
    MedicalRecord => medical,
    Trial => trials,
    Announcement => announcements,
    Event => events,
}

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub keys: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(stores: Stores, verifier: Arc<dyn CredentialVerifier>, keys: JwtKeys) -> Self {
        Self {
            stores: Arc::new(stores),
            verifier,
            keys: Arc::new(keys),
        }
    }

    /// Demo accounts and seed rows
    pub fn demo(keys: JwtKeys) -> Self {
        Self::new(
            Stores::seeded(),
            Arc::new(MockCredentialTable::demo()),
            keys,
        )
    }
}
