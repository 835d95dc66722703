use crate::dashboard::Dashboard;
use crate::interfaces::cli::{CliError, finish};

pub async fn show_logs(
    dashboard: &Dashboard,
    status: Option<String>,
    date: Option<String>,
) -> Result<(), CliError> {
    {
        let view = dashboard.logs.view();
        let mut view = view.write();
        view.status_filter = status.unwrap_or_default();
        view.date_filter = date.unwrap_or_default();
    }
    finish(dashboard.logs.refresh().await, "Log request")?;
    println!("{}", dashboard.logs.view().read().content());
    Ok(())
}
