pub mod config_tests;
pub mod contract_tests;
