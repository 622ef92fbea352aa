pub mod bitrix;
pub mod dashboard;
pub mod lead_detail;
pub mod leads;
pub mod login;
pub mod settings;
pub mod sources;
