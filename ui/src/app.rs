use std::sync::Arc;
use std::time::Duration;

use bizdesk_business::{
    ApiResult, BusinessConfig, EntityCache, HttpClient, Resource, ResourceClient, TtlCache,
};
use chrono::Utc;

use crate::screens::{
    EmployeeTable, EnterpriseTable, ListScreen, Screen, SubsidiaryTable, TableConfig,
    TransportRequestTable,
};
use crate::state::State;

pub struct BizdeskApp {
    state: State,
    screens: Vec<Box<dyn Screen>>,
    selected: usize,
}

impl BizdeskApp {
    /// Builds one list screen per collection, all sharing one HTTP client.
    pub fn new(state: State) -> ApiResult<Self> {
        let http = HttpClient::new(&state.config)?;
        let screens: Vec<Box<dyn Screen>> = vec![
            Box::new(list_screen::<EmployeeTable>(&state, &http)),
            Box::new(list_screen::<SubsidiaryTable>(&state, &http)),
            Box::new(list_screen::<TransportRequestTable>(&state, &http)),
            Box::new(list_screen::<EnterpriseTable>(&state, &http)),
        ];
        Ok(Self {
            state,
            screens,
            selected: 0,
        })
    }

    pub fn selected_title(&self) -> Option<&'static str> {
        self.screens.get(self.selected).map(|screen| screen.title())
    }
}

fn list_screen<C: TableConfig>(state: &State, http: &HttpClient) -> ListScreen<C> {
    ListScreen::new(
        resource_client(&state.config, http),
        state.runtime.clone(),
        state.config.page_size,
    )
}

fn resource_client<T: Resource>(config: &BusinessConfig, http: &HttpClient) -> ResourceClient<T> {
    let cache: Arc<dyn EntityCache<T::Id, T>> = Arc::new(TtlCache::new(config.cache_ttl));
    ResourceClient::new(config, http.clone(), cache)
}

impl eframe::App for BizdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();
        self.state.notifications.retain_active(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for (index, screen) in self.screens.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, index, screen.title());
                }
                ui.separator();
                ui.weak(self.state.config.api_url());
            });
        });

        if !self.state.notifications.is_empty() {
            egui::TopBottomPanel::bottom("notifications").show(ctx, |ui| {
                self.state.notifications.show(ui);
            });
            // Keep repainting so expired notices disappear.
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(screen) = self.screens.get_mut(self.selected) {
                screen.show(ui, &mut self.state.notifications, now);
            }
        });
    }
}
