//! Privacy mask list
//!
//! The list is replaced wholesale on every refresh; deletes are confirmed
//! first and followed by a full refetch, never removed optimistically.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::dialogs::Dialogs;
use super::generation::RequestGeneration;
use super::messages::masks as text;
use super::view::{Outcome, SharedView, shared};
use crate::client::{DashboardApi, MaskInventory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRow {
    pub camera_id: u32,
    pub filename: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskListView {
    pub rows: Vec<MaskRow>,
    /// Set once the first inventory has arrived
    pub loaded: bool,
}

impl MaskListView {
    fn replace(&mut self, inventory: MaskInventory) {
        self.rows = inventory
            .masks
            .into_iter()
            .flat_map(|(camera_id, masks)| {
                masks.into_iter().map(move |mask| MaskRow {
                    camera_id,
                    label: text::item_label(camera_id, &mask.filename),
                    filename: mask.filename,
                })
            })
            .collect();
        self.loaded = true;
    }
}

pub struct MaskController {
    api: Arc<dyn DashboardApi>,
    dialogs: Arc<dyn Dialogs>,
    view: SharedView<MaskListView>,
    generation: RequestGeneration,
}

impl MaskController {
    pub fn new(api: Arc<dyn DashboardApi>, dialogs: Arc<dyn Dialogs>) -> Self {
        Self {
            api,
            dialogs,
            view: shared(MaskListView::default()),
            generation: RequestGeneration::new(),
        }
    }

    pub fn view(&self) -> SharedView<MaskListView> {
        self.view.clone()
    }

    pub async fn refresh(&self) -> Outcome {
        let generation = self.generation.issue();
        match self.api.list_masks().await {
            Ok(inventory) => {
                if self.generation.is_current(generation) {
                    self.view.write().replace(inventory);
                } else {
                    debug!("Dropping stale mask inventory");
                }
                Outcome::Completed
            }
            Err(e) => {
                warn!("Error loading masks: {}", e);
                Outcome::Failed
            }
        }
    }

    pub async fn delete(&self, filename: &str) -> Outcome {
        if !self.dialogs.confirm(text::DELETE_CONFIRM).await {
            return Outcome::Cancelled;
        }

        match self.api.delete_mask(filename).await {
            Ok(_) => {
                info!("Mask {} deleted", filename);
                self.refresh().await;
                Outcome::Completed
            }
            Err(e) => {
                warn!("Failed to delete mask {}: {}", filename, e);
                self.dialogs.alert(&e.user_message()).await;
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MaskDescriptor;

    #[test]
    fn test_replace_flattens_by_camera() {
        let mut inventory = MaskInventory::default();
        inventory.masks.insert(
            2,
            vec![MaskDescriptor {
                filename: "mask_2.png".into(),
            }],
        );
        inventory.masks.insert(
            0,
            vec![
                MaskDescriptor {
                    filename: "a.png".into(),
                },
                MaskDescriptor {
                    filename: "b.png".into(),
                },
            ],
        );

        let mut view = MaskListView::default();
        view.rows.push(MaskRow {
            camera_id: 9,
            filename: "stale.png".into(),
            label: String::new(),
        });
        view.replace(inventory);

        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Камера 0: a.png", "Камера 0: b.png", "Камера 2: mask_2.png"]
        );
        assert!(view.loaded);
    }
}
