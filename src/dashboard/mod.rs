//! Dashboard controllers
//!
//! Each controller owns one view model and keeps it in sync with the backend.
//! [`Dashboard`] wires them together: page hooks, startup loads and the two
//! polling loops. Front ends only read views and call controller operations.

pub mod archive;
pub mod biometric;
pub mod busy;
pub mod camera_grid;
pub mod dialogs;
pub mod generation;
pub mod logs;
pub mod masks;
pub mod messages;
pub mod preferences;
pub mod router;
pub mod session;
pub mod settings;
pub mod system_control;
pub mod theme;
pub mod view;

pub use archive::{ArchiveController, ArchiveOptions};
pub use biometric::BiometricController;
pub use camera_grid::{CameraFilter, CameraGrid};
pub use dialogs::{AssumeYes, Dialogs};
pub use logs::LogController;
pub use masks::MaskController;
pub use preferences::LocalStore;
pub use router::{Page, PageRouter};
pub use session::SessionController;
pub use settings::{LockedSetting, SettingType, SettingsController};
pub use system_control::{RunState, SystemController};
pub use theme::{Theme, ThemeStore};
pub use view::Outcome;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::client::DashboardApi;
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub cameras: Vec<u32>,
    pub locked_settings: Vec<LockedSetting>,
    pub status_poll: Duration,
    pub mask_poll: Duration,
    pub busy_interval: Duration,
    pub banner_hide: Duration,
    pub preferences_file: PathBuf,
    pub downloads_dir: PathBuf,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            cameras: vec![0, 1, 2, 3],
            locked_settings: Vec::new(),
            status_poll: Duration::from_secs(5),
            mask_poll: Duration::from_secs(10),
            busy_interval: busy::BUSY_FRAME_INTERVAL,
            banner_hide: Duration::from_secs(3),
            preferences_file: PathBuf::from("octo-preferences.toml"),
            downloads_dir: PathBuf::from("downloads"),
        }
    }
}

impl DashboardOptions {
    /// Malformed locked-setting entries are skipped with a warning
    pub fn from_config(config: &AppConfig) -> Self {
        let dashboard = &config.dashboard;
        let locked_settings = dashboard
            .locked_settings
            .iter()
            .filter_map(|entry| match entry.parse::<LockedSetting>() {
                Ok(lock) => Some(lock),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            })
            .collect();

        Self {
            cameras: dashboard.cameras.clone(),
            locked_settings,
            status_poll: Duration::from_secs(dashboard.status_poll_secs.max(1)),
            mask_poll: Duration::from_secs(dashboard.mask_poll_secs.max(1)),
            busy_interval: Duration::from_millis(dashboard.busy_frame_ms.max(1)),
            banner_hide: Duration::from_secs(dashboard.banner_hide_secs),
            preferences_file: PathBuf::from(&dashboard.preferences_file),
            downloads_dir: PathBuf::from(&dashboard.downloads_dir),
        }
    }
}

pub struct Dashboard {
    pub router: PageRouter,
    pub theme: ThemeStore,
    pub grid: CameraGrid,
    pub session: SessionController,
    pub system: Arc<SystemController>,
    pub settings: Arc<SettingsController>,
    pub masks: Arc<MaskController>,
    pub logs: Arc<LogController>,
    pub biometric: Arc<BiometricController>,
    pub archive: Arc<ArchiveController>,
    options: DashboardOptions,
}

impl Dashboard {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        dialogs: Arc<dyn Dialogs>,
        options: DashboardOptions,
    ) -> Arc<Self> {
        let preferences = Arc::new(LocalStore::open(&options.preferences_file));
        let archive_options = ArchiveOptions {
            busy_interval: options.busy_interval,
            banner_hide: options.banner_hide,
            downloads_dir: options.downloads_dir.clone(),
        };

        let dashboard = Self {
            router: PageRouter::new(),
            theme: ThemeStore::new(preferences),
            grid: CameraGrid::new(options.cameras.clone()),
            session: SessionController::new(api.clone()),
            system: Arc::new(SystemController::new(
                api.clone(),
                dialogs.clone(),
                options.busy_interval,
            )),
            settings: Arc::new(SettingsController::new(
                api.clone(),
                dialogs.clone(),
                &options.cameras,
                &options.locked_settings,
            )),
            masks: Arc::new(MaskController::new(api.clone(), dialogs.clone())),
            logs: Arc::new(LogController::new(api.clone())),
            biometric: Arc::new(BiometricController::new(api.clone())),
            archive: Arc::new(ArchiveController::new(api, dialogs, archive_options)),
            options,
        };
        dashboard.register_page_hooks();
        Arc::new(dashboard)
    }

    fn register_page_hooks(&self) {
        let logs = self.logs.clone();
        self.router.register_on_enter(Page::Logs, move || {
            let logs = logs.clone();
            async move {
                logs.refresh().await;
            }
            .boxed()
        });

        let archive = self.archive.clone();
        self.router.register_on_enter(Page::Archive, move || {
            let archive = archive.clone();
            async move {
                archive.load_settings().await;
            }
            .boxed()
        });
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Startup loads: run state, camera settings, masks
    pub async fn initialize(&self) {
        tokio::join!(
            self.system.refresh_status(),
            self.settings.load(),
            self.masks.refresh(),
        );
        info!("Dashboard initialized");
    }

    pub async fn show_page(&self, page: Page) {
        self.router.show_page(page).await;
    }

    /// Spawn the status and mask polling loops. They run until the returned
    /// handles are dropped; failures never stop them.
    pub fn start_polling(&self) -> PollingHandles {
        let system = self.system.clone();
        let status = spawn_poll("status", self.options.status_poll, move || {
            let system = system.clone();
            async move {
                system.refresh_status().await;
            }
        });

        let mask_list = self.masks.clone();
        let masks = spawn_poll("masks", self.options.mask_poll, move || {
            let masks = mask_list.clone();
            async move {
                masks.refresh().await;
            }
        });

        PollingHandles {
            tasks: vec![status, masks],
        }
    }
}

fn spawn_poll<F, Fut>(name: &'static str, period: Duration, tick: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // 首次加载由 initialize 完成
        interval.tick().await;
        loop {
            interval.tick().await;
            debug!("Polling {}", name);
            tick().await;
        }
    })
}

/// Owns the polling tasks; dropping it stops them
pub struct PollingHandles {
    tasks: Vec<JoinHandle<()>>,
}

impl PollingHandles {
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollingHandles {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
