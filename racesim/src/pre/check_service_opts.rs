use crate::pre::service_opts::ServiceOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_service_opts assures that the inserted options are usable and raises an error if not.
pub fn check_service_opts(service_opts: &ServiceOpts) -> anyhow::Result<()> {
    if service_opts.port == 0 {
        return Err(InputValueError).context("port must be within the range [1, 65535]!");
    }

    if service_opts.host.trim().is_empty() {
        return Err(InputValueError).context("host must not be empty!");
    }

    if service_opts.db_path.is_dir() {
        return Err(InputValueError).context(format!(
            "db_path {} is a directory, but must be a file!",
            service_opts.db_path.display()
        ));
    }

    Ok(())
}
