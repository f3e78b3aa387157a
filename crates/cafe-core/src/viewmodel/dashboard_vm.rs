//! Shop admin dashboard ViewModel

use cafe_shared::constants::{MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_SAVE_FAILED};

use crate::domain::{EntityId, MenuItem};
use crate::error::ClientError;
use crate::repositories::{CategoryRepository, MenuItemRepository, SettingsRepository};
use crate::services::{DashboardData, DashboardService};

use super::menu_item_form::MenuItemForm;
use super::state::{FormState, LoadState, PageLoader};

#[derive(Debug, Default)]
pub struct DashboardViewModel {
    loader: PageLoader<DashboardData>,
    pub form_state: FormState,
    pub form: MenuItemForm,
    /// Last save/delete failure, shown next to the form
    pub error: Option<String>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<M, C, S>(&mut self, service: &DashboardService<M, C, S>)
    where
        M: MenuItemRepository,
        C: CategoryRepository,
        S: SettingsRepository,
    {
        let ticket = self.loader.begin();
        let result = service.load().await;
        self.loader.finish(ticket, result, MSG_LOAD_FAILED);
    }

    pub fn state(&self) -> &LoadState<DashboardData> {
        self.loader.state()
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.loader.data()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.loader.error()
    }

    pub fn open_new(&mut self) -> Result<(), ClientError> {
        self.require_ready()?;
        self.form_state.open_new()?;
        self.form = MenuItemForm::default();
        self.error = None;
        Ok(())
    }

    pub fn open_edit(&mut self, id: &EntityId) -> Result<(), ClientError> {
        let item = self.find(id)?.clone();
        self.form_state.open_edit(id.clone())?;
        self.form = MenuItemForm::from_item(&item);
        self.error = None;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), ClientError> {
        self.form_state.cancel()?;
        self.form = MenuItemForm::default();
        Ok(())
    }

    /// Send the open form. On success the local list is patched with the
    /// server's record and the form closes; on failure it stays open.
    pub async fn submit<M, C, S>(&mut self, service: &DashboardService<M, C, S>) -> Result<MenuItem, ClientError>
    where
        M: MenuItemRepository,
        C: CategoryRepository,
        S: SettingsRepository,
    {
        self.require_ready()?;
        let target = self.form_state.submit()?;

        let editing = match &target {
            Some(id) => match self.find(id) {
                Ok(item) => Some(item.clone()),
                Err(e) => {
                    self.form_state.submit_failed();
                    return Err(e);
                }
            },
            None => None,
        };

        match service.save_item(editing.as_ref(), &self.form).await {
            Ok(saved) => {
                if let Some(data) = self.loader.data_mut() {
                    data.apply_saved(saved.clone());
                }
                self.form_state.submit_succeeded();
                self.form = MenuItemForm::default();
                self.error = None;
                Ok(saved)
            }
            Err(e) => {
                self.form_state.submit_failed();
                self.error = Some(e.user_message(MSG_SAVE_FAILED));
                Err(e)
            }
        }
    }

    pub async fn delete<M, C, S>(&mut self, service: &DashboardService<M, C, S>, id: &EntityId) -> Result<(), ClientError>
    where
        M: MenuItemRepository,
        C: CategoryRepository,
        S: SettingsRepository,
    {
        let item = self.find(id)?.clone();

        match service.delete_item(&item).await {
            Ok(()) => {
                if let Some(data) = self.loader.data_mut() {
                    data.apply_deleted(&item);
                }
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message(MSG_DELETE_FAILED));
                Err(e)
            }
        }
    }

    fn require_ready(&self) -> Result<(), ClientError> {
        if self.loader.is_ready() {
            Ok(())
        } else {
            Err(ClientError::Validation("Dashboard data is not loaded".into()))
        }
    }

    fn find(&self, id: &EntityId) -> Result<&MenuItem, ClientError> {
        self.require_ready()?;
        self.loader
            .data()
            .and_then(|data| data.items.iter().find(|i| i.id.as_ref() == Some(id)))
            .ok_or_else(|| ClientError::Validation(format!("Menu item {} is not in the list", id)))
    }
}
