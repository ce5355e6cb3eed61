use thiserror::Error;

use crate::policy::Discipline;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("unknown scheduler type '{0}', expected one of FCFS, SPN, SRT, HRRN, RR, FB")]
    UnknownDiscipline(String),
    #[error("{0} scheduling requires a positive quantum")]
    MissingQuantum(Discipline),
    #[error("process '{0}' has a zero service time")]
    ZeroServiceTime(String),
    #[error("line {0}: invalid {1} value '{2}'")]
    InvalidField(usize, &'static str, String),
    #[error("invalid quantum '{0}'")]
    InvalidQuantum(String),
    #[error("missing value for option '{0}'")]
    MissingOptionValue(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
}
