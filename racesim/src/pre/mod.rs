pub mod check_service_opts;
pub mod race_pars;
pub mod service_opts;
