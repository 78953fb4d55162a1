//! Session engine: settings validation, candidate filtering, and question
//! sampling over a parsed vocabulary list.

pub mod filter;
pub mod question;
pub mod session;
pub mod settings;

pub use filter::{build_pool, Candidate};
pub use question::{
    MultipleChoicePayload, ParseWordCompToLatPayload, ParseWordLatToCompPayload,
    PrincipalPartsPayload, Question, TypeInPayload,
};
pub use session::{generate_session, NoQuestionsError};
pub use settings::{InvalidSettingsError, SettingKind, Settings, SETTINGS_SCHEMA};
