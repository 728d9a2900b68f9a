//! Group Parameters Use Case

mod use_case;


pub use use_case::{GroupParametersUseCase, GroupReport, MergeGroupParameters};
