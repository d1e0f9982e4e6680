//! Data layer - Protocols and the remote use cases built on them.

pub mod protocols;
pub mod usecases;

pub use usecases::{
    RemoteAddAccount, RemoteAuthentication, RemoteLoadSurveyList, RemoteLoadSurveyResult,
    RemoteSaveSurveyResult,
};
