//! Generic list screen: a pagination controller wired to the table widget.
//!
//! Network calls run as tokio tasks on the given runtime handle. Their results
//! come back over a flume channel and are applied at the start of the next
//! frame, so all state changes happen on the UI thread.

use std::future::Future;

use bizdesk_business::{
    ApiResult, ListQuery, Page, PageOutcome, PaginationController, Resource, ResourceClient,
};
use chrono::{DateTime, Utc};
use egui::{Button, Context, Key, TextEdit, Ui};
use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio::runtime::Handle;

use super::modals::{ModalOutcome, show_delete_modal, show_detail_modal, show_form_modal};
use super::{DraftForm, RowAction, Screen, TableConfig};
use crate::widgets::{Column, FilterOption, Notifications, TableState, TableWithPagination};

pub const REFRESH_LABEL: &str = "🔄 Actualiser";
pub const SEARCH_LABEL: &str = "🔍 Rechercher";
pub const CREATE_LABEL: &str = "➕ Créer";
pub const SERVER_SEARCH_HINT: &str = "Recherche serveur…";

enum ScreenMessage<T: Resource> {
    Page { seq: u64, result: ApiResult<Page<T>> },
    Detail(ApiResult<T>),
    Created(ApiResult<T>),
    Updated { id: T::Id, result: ApiResult<T> },
    StatusChanged(ApiResult<T>),
    Deleted { id: T::Id, result: ApiResult<()> },
}

enum FormMode<Id> {
    Create,
    Edit(Id),
}

pub struct ListScreen<C: TableConfig> {
    controller: PaginationController<C::Row>,
    table: TableState,
    columns: Vec<Column<C::Row>>,
    filter_options: Vec<FilterOption>,
    client: ResourceClient<C::Row>,
    runtime: Handle,
    sender: Sender<ScreenMessage<C::Row>>,
    receiver: Receiver<ScreenMessage<C::Row>>,
    server_search: String,
    detail: Option<C::Row>,
    pending_delete: Option<C::Row>,
    form: Option<Box<dyn DraftForm<C::Row>>>,
    form_mode: Option<FormMode<<C::Row as Resource>::Id>>,
    form_error: Option<String>,
    mutations_in_flight: usize,
    started: bool,
}

impl<C: TableConfig> ListScreen<C> {
    pub fn new(client: ResourceClient<C::Row>, runtime: Handle, page_size: u64) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            controller: PaginationController::new(page_size),
            table: TableState::new(),
            columns: C::columns(),
            filter_options: C::filter_options(),
            client,
            runtime,
            sender,
            receiver,
            server_search: String::new(),
            detail: None,
            pending_delete: None,
            form: C::form(),
            form_mode: None,
            form_error: None,
            mutations_in_flight: 0,
            started: false,
        }
    }

    pub fn controller(&self) -> &PaginationController<C::Row> {
        &self.controller
    }

    pub fn table_state(&self) -> &TableState {
        &self.table
    }

    pub fn detail(&self) -> Option<&C::Row> {
        self.detail.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_mode.is_some()
    }

    /// Error shown inside the open create/edit form.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.controller.is_loading() || self.mutations_in_flight > 0
    }

    pub fn show(&mut self, ui: &mut Ui, notices: &mut Notifications, now: DateTime<Utc>) {
        let ctx = ui.ctx().clone();
        self.poll(&ctx, notices, now);

        if !self.started {
            self.started = true;
            let query = self.controller.refresh();
            self.spawn_fetch(query, &ctx);
        }

        self.render_toolbar(ui, &ctx);
        ui.add_space(8.0);

        let output = TableWithPagination::<_, RowAction>::new(
            C::TITLE,
            self.controller.rows(),
            &self.columns,
            self.controller.window(),
        )
        .filter_options(&self.filter_options)
        .row_click(C::ROW_CLICK)
        .actions(&C::actions)
        .show(ui, &mut self.table);

        if let Some(change) = output.page_change() {
            let query = self.controller.on_page_change(change.skip, change.take);
            self.spawn_fetch(query, &ctx);
        }
        if let Some(filters) = output.filter_change() {
            let query = self.controller.on_filter_change(filters.clone());
            self.spawn_fetch(query, &ctx);
        }
        if let Some(index) = output.clicked_row() {
            self.handle_action(index, RowAction::Details, &ctx);
        }
        if let Some((index, action)) = output.action {
            self.handle_action(index, action, &ctx);
        }

        self.render_modals(ui, &ctx);
    }

    /// Applies every result that arrived since the last frame.
    pub fn poll(&mut self, ctx: &Context, notices: &mut Notifications, now: DateTime<Utc>) {
        while let Ok(message) = self.receiver.try_recv() {
            match message {
                ScreenMessage::Page { seq, result } => self.on_page(seq, result, ctx, notices, now),
                ScreenMessage::Detail(result) => match result {
                    Ok(record) => {
                        if self.detail.as_ref().is_some_and(|shown| shown.id() == record.id()) {
                            self.detail = Some(record);
                        }
                    }
                    Err(err) => {
                        warn!("Loading {} details failed: {err}", C::Row::PATH);
                        notices.error(format!("Détails indisponibles : {err}"), now);
                    }
                },
                ScreenMessage::Created(result) => {
                    self.mutations_in_flight = self.mutations_in_flight.saturating_sub(1);
                    match result {
                        Ok(record) => {
                            self.controller.insert_created(record);
                            self.close_form();
                            notices.info("Élément créé", now);
                        }
                        Err(err) => {
                            if matches!(self.form_mode, Some(FormMode::Create)) {
                                self.form_error = Some(err.to_string());
                            }
                            self.on_mutation_error("Création", &err, notices, now);
                        }
                    }
                }
                ScreenMessage::Updated { id, result } => {
                    self.mutations_in_flight = self.mutations_in_flight.saturating_sub(1);
                    let editing = matches!(&self.form_mode, Some(FormMode::Edit(open)) if *open == id);
                    match result {
                        Ok(record) => {
                            if editing {
                                self.close_form();
                            }
                            self.on_updated(record, notices, now);
                        }
                        Err(err) => {
                            if editing {
                                self.form_error = Some(err.to_string());
                            }
                            self.on_mutation_error("Mise à jour", &err, notices, now);
                        }
                    }
                }
                ScreenMessage::StatusChanged(result) => {
                    self.mutations_in_flight = self.mutations_in_flight.saturating_sub(1);
                    match result {
                        Ok(record) => self.on_updated(record, notices, now),
                        Err(err) => self.on_mutation_error("Changement de statut", &err, notices, now),
                    }
                }
                ScreenMessage::Deleted { id, result } => {
                    self.mutations_in_flight = self.mutations_in_flight.saturating_sub(1);
                    match result {
                        Ok(()) => {
                            self.controller.remove_deleted(&id);
                            if self.detail.as_ref().is_some_and(|shown| *shown.id() == id) {
                                self.detail = None;
                            }
                            notices.info("Élément supprimé", now);
                            if self.controller.rows().is_empty() && self.controller.window().total > 0 {
                                let query = self.controller.refresh();
                                self.spawn_fetch(query, ctx);
                            }
                        }
                        Err(err) => self.on_mutation_error("Suppression", &err, notices, now),
                    }
                }
            }
        }
    }

    fn on_page(
        &mut self,
        seq: u64,
        result: ApiResult<Page<C::Row>>,
        ctx: &Context,
        notices: &mut Notifications,
        now: DateTime<Utc>,
    ) {
        match result {
            Ok(page) => match self.controller.apply_page(seq, page) {
                PageOutcome::Clamped(query) => self.spawn_fetch(query, ctx),
                PageOutcome::Applied | PageOutcome::Stale => {}
            },
            Err(err) => {
                if self.controller.apply_failure(seq) {
                    warn!("Listing {} failed: {err}", C::Row::PATH);
                    notices.error(format!("Chargement impossible : {err}"), now);
                }
            }
        }
    }

    fn on_updated(&mut self, record: C::Row, notices: &mut Notifications, now: DateTime<Utc>) {
        if self.detail.as_ref().is_some_and(|shown| shown.id() == record.id()) {
            self.detail = Some(record.clone());
        }
        self.controller.replace_updated(record);
        notices.info("Élément mis à jour", now);
    }

    fn on_mutation_error(
        &self,
        what: &str,
        err: &bizdesk_business::ApiError,
        notices: &mut Notifications,
        now: DateTime<Utc>,
    ) {
        warn!("{what} on {} failed: {err}", C::Row::PATH);
        notices.error(format!("{what} impossible : {err}"), now);
    }

    fn render_toolbar(&mut self, ui: &mut Ui, ctx: &Context) {
        let mut refresh = false;
        let mut search = false;
        let mut create = false;
        let busy = self.is_busy();

        ui.horizontal(|ui| {
            ui.heading(C::TITLE);
            ui.separator();

            refresh = ui.button(REFRESH_LABEL).clicked();

            let response = ui.add(
                TextEdit::singleline(&mut self.server_search)
                    .hint_text(SERVER_SEARCH_HINT)
                    .desired_width(180.0),
            );
            let submitted = response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
            search = ui.button(SEARCH_LABEL).clicked() || submitted;

            if self.form.is_some() {
                create = ui
                    .add_enabled(self.form_mode.is_none(), Button::new(CREATE_LABEL))
                    .clicked();
            }

            if busy {
                ui.spinner();
            }
        });

        if refresh {
            let query = self.controller.refresh();
            self.spawn_fetch(query, ctx);
        }
        if search {
            let query = self.controller.on_search(&self.server_search);
            self.spawn_fetch(query, ctx);
        }
        if create && let Some(form) = self.form.as_mut() {
            form.reset();
            self.form_error = None;
            self.form_mode = Some(FormMode::Create);
        }
    }

    fn handle_action(&mut self, index: usize, action: RowAction, ctx: &Context) {
        let Some(record) = self.controller.rows().get(index).cloned() else {
            return;
        };
        debug!("{action:?} on {}/{}", C::Row::PATH, record.id());

        match action {
            RowAction::Details => {
                let id = record.id().clone();
                self.detail = Some(record);
                let client = self.client.clone();
                self.spawn(ctx, async move { ScreenMessage::Detail(client.get(&id).await) });
            }
            RowAction::Edit => {
                if let Some(form) = self.form.as_mut() {
                    form.load(&record);
                    self.form_error = None;
                    self.form_mode = Some(FormMode::Edit(record.id().clone()));
                }
            }
            RowAction::Delete => self.pending_delete = Some(record),
            RowAction::SetStatus(status) => {
                let id = record.id().clone();
                let client = self.client.clone();
                self.mutations_in_flight += 1;
                self.spawn(ctx, async move {
                    ScreenMessage::StatusChanged(client.set_status(&id, status).await)
                });
            }
        }
    }

    fn render_modals(&mut self, ui: &mut Ui, ctx: &Context) {
        if let Some(record) = &self.detail {
            let title = format!("{} #{}", C::TITLE, record.id());
            if !show_detail_modal(ui, &title, record) {
                self.detail = None;
            }
        }

        if let Some(record) = &self.pending_delete {
            let subject = format!("l'élément #{}", record.id());
            match show_delete_modal(ui, &subject) {
                ModalOutcome::Open => {}
                ModalOutcome::Closed => self.pending_delete = None,
                ModalOutcome::Confirmed(()) => {
                    let id = record.id().clone();
                    self.pending_delete = None;
                    let client = self.client.clone();
                    self.mutations_in_flight += 1;
                    self.spawn(ctx, async move {
                        let result = client.delete(&id).await;
                        ScreenMessage::Deleted { id, result }
                    });
                }
            }
        }

        let Some(mode) = &self.form_mode else {
            return;
        };
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let title = match mode {
            FormMode::Create => format!("{} : création", C::TITLE),
            FormMode::Edit(id) => format!("{} #{id} : modification", C::TITLE),
        };
        let submitting = self.mutations_in_flight > 0;
        match show_form_modal(ui, &title, &mut **form, self.form_error.as_deref(), submitting) {
            ModalOutcome::Open => {}
            ModalOutcome::Closed => self.close_form(),
            ModalOutcome::Confirmed(draft) => {
                self.form_error = None;
                self.mutations_in_flight += 1;
                let client = self.client.clone();
                match mode {
                    FormMode::Create => {
                        self.spawn(ctx, async move { ScreenMessage::Created(client.create(&draft).await) });
                    }
                    FormMode::Edit(id) => {
                        let id = id.clone();
                        self.spawn(ctx, async move {
                            let result = client.update(&id, &draft).await;
                            ScreenMessage::Updated { id, result }
                        });
                    }
                }
            }
        }
    }

    fn close_form(&mut self) {
        self.form_mode = None;
        self.form_error = None;
    }

    fn spawn_fetch(&self, query: ListQuery, ctx: &Context) {
        debug!(
            "Fetching {} (seq={}, skip={}, take={})",
            C::Row::PATH,
            query.seq,
            query.skip,
            query.take
        );
        let client = self.client.clone();
        self.spawn(ctx, async move {
            let result = client.list(&query).await;
            ScreenMessage::Page {
                seq: query.seq,
                result,
            }
        });
    }

    fn spawn<F>(&self, ctx: &Context, task: F)
    where
        F: Future<Output = ScreenMessage<C::Row>> + Send + 'static,
    {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let message = task.await;
            if sender.send(message).is_err() {
                debug!("{} screen is gone, dropping result", C::Row::PATH);
            }
            ctx.request_repaint();
        });
    }
}

impl<C: TableConfig> Screen for ListScreen<C> {
    fn title(&self) -> &'static str {
        C::TITLE
    }

    fn show(&mut self, ui: &mut Ui, notices: &mut Notifications, now: DateTime<Utc>) {
        ListScreen::show(self, ui, notices, now);
    }
}
