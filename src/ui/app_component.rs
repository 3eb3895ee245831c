use crate::backend::{BackendError, Clients};
use crate::config::Config;
use crate::constants::ERROR_TOPICS_LOAD_FAILED;
use crate::entities::{EntityDraft, Module, NewsItem, Operation, Resource, ResourceKind, Topic};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::notification::NotificationChannel;
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::components::dialogs::system_dialogs::render_logs_dialog;
use crate::ui::components::dialogs::ScrollPosition;
use crate::ui::components::notification_toast::render_notification;
use crate::ui::components::{
    CollectionComponent, CollectionWorkflow, FormComponent, FormWorkflow, HomeMenuComponent,
};
use crate::ui::core::{
    actions::{Action, SessionId, WorkflowKind},
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;
use tokio::sync::mpsc;

/// The single open workflow, if any
pub enum Workflow {
    Closed,
    CreateTopic(FormComponent<Topic>),
    CreateNews(FormComponent<NewsItem>),
    CreateModule(FormComponent<Module>),
    ManageTopics(CollectionComponent<Topic>),
    ManageNews(CollectionComponent<NewsItem>),
    ManageModules(CollectionComponent<Module>),
}

impl Workflow {
    pub fn open(kind: WorkflowKind, icons: &IconService) -> Self {
        match kind {
            WorkflowKind::CreateTopic => Workflow::CreateTopic(FormComponent::new(icons)),
            WorkflowKind::CreateNews => Workflow::CreateNews(FormComponent::new(icons)),
            WorkflowKind::CreateModule => Workflow::CreateModule(FormComponent::new(icons)),
            WorkflowKind::ManageTopics => Workflow::ManageTopics(CollectionComponent::new(icons)),
            WorkflowKind::ManageNews => Workflow::ManageNews(CollectionComponent::new(icons)),
            WorkflowKind::ManageModules => Workflow::ManageModules(CollectionComponent::new(icons)),
        }
    }

    pub fn kind(&self) -> Option<WorkflowKind> {
        match self {
            Workflow::Closed => None,
            Workflow::CreateTopic(_) => Some(WorkflowKind::CreateTopic),
            Workflow::CreateNews(_) => Some(WorkflowKind::CreateNews),
            Workflow::CreateModule(_) => Some(WorkflowKind::CreateModule),
            Workflow::ManageTopics(_) => Some(WorkflowKind::ManageTopics),
            Workflow::ManageNews(_) => Some(WorkflowKind::ManageNews),
            Workflow::ManageModules(_) => Some(WorkflowKind::ManageModules),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Workflow::Closed)
    }

    pub fn as_form(&self) -> Option<&dyn FormWorkflow> {
        match self {
            Workflow::CreateTopic(form) => Some(form),
            Workflow::CreateNews(form) => Some(form),
            Workflow::CreateModule(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn FormWorkflow> {
        match self {
            Workflow::CreateTopic(form) => Some(form),
            Workflow::CreateNews(form) => Some(form),
            Workflow::CreateModule(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&dyn CollectionWorkflow> {
        match self {
            Workflow::ManageTopics(list) => Some(list),
            Workflow::ManageNews(list) => Some(list),
            Workflow::ManageModules(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut dyn CollectionWorkflow> {
        match self {
            Workflow::ManageTopics(list) => Some(list),
            Workflow::ManageNews(list) => Some(list),
            Workflow::ManageModules(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_component_mut(&mut self) -> Option<&mut dyn Component> {
        match self {
            Workflow::Closed => None,
            Workflow::CreateTopic(c) => Some(c),
            Workflow::CreateNews(c) => Some(c),
            Workflow::CreateModule(c) => Some(c),
            Workflow::ManageTopics(c) => Some(c),
            Workflow::ManageNews(c) => Some(c),
            Workflow::ManageModules(c) => Some(c),
        }
    }

    fn needs_topics(&self) -> bool {
        self.as_form().is_some_and(|form| form.needs_topics())
            || self.as_collection().is_some_and(|list| list.needs_topics())
    }
}

pub struct AppComponent {
    // Component composition
    home: HomeMenuComponent,
    workflow: Workflow,
    session: SessionId,

    // Application state
    notifications: NotificationChannel,
    show_logs: bool,
    logs_scroll: ScrollPosition,
    api_base_url: String,

    // Services
    clients: Clients,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(clients: Clients, config: &Config, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            home: HomeMenuComponent::new(&icons),
            workflow: Workflow::Closed,
            session: 0,
            notifications: NotificationChannel::default(),
            show_logs: false,
            logs_scroll: ScrollPosition::default(),
            api_base_url: config.api.base_url.clone(),
            clients,
            task_manager,
            background_action_rx,
            logger,
            icons,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    /// Handle keys of the logs dialog while it is visible
    fn handle_logs_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Char('j') | KeyCode::Down => {
                self.logs_scroll.scroll_down();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.logs_scroll.scroll_up();
                Action::None
            }
            KeyCode::PageDown => {
                self.logs_scroll.page_down();
                Action::None
            }
            KeyCode::PageUp => {
                self.logs_scroll.page_up();
                Action::None
            }
            KeyCode::Home => {
                self.logs_scroll.scroll_to_top();
                Action::None
            }
            KeyCode::End => {
                self.logs_scroll.scroll_to_bottom();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts of the home screen
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('x') => Action::DismissNotification,
            _ => Action::None,
        }
    }

    /// Route a key press: control chords, then the logs dialog, then the
    /// open workflow, then the home menu and its global keys.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Action::Quit,
                KeyCode::Char('x') => return Action::DismissNotification,
                _ => {}
            }
        }

        if self.show_logs {
            return self.handle_logs_key(key);
        }

        if let Some(component) = self.workflow.as_component_mut() {
            return component.handle_key_events(key);
        }

        match self.home.handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    /// Process a key press through the component hierarchy and apply the result
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.route_key(key);
        self.dispatch(action);
    }

    /// Apply an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while next != Action::None {
            next = self.handle_app_action(next);
        }
    }

    /// Expire the notification and apply finished background work.
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.notifications.expire(now);
        for action in self.process_background_actions() {
            self.dispatch(action);
            changed = true;
        }
        changed
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        // Clean up finished tasks
        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Wait for the next background result
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::OpenWorkflow(kind) => {
                self.open_workflow(kind);
                Action::None
            }
            Action::CloseWorkflow => {
                if let Some(kind) = self.workflow.kind() {
                    log::info!("Workflow: closing {:?} (session {})", kind, self.session);
                }
                self.workflow = Workflow::Closed;
                Action::None
            }
            Action::ShowLogs(visible) => {
                self.show_logs = visible;
                if visible {
                    self.logs_scroll = ScrollPosition::default();
                }
                Action::None
            }
            Action::SubmitCreate(draft) => {
                match draft {
                    EntityDraft::Topic(draft) => self.spawn_create::<Topic>(draft),
                    EntityDraft::News(draft) => self.spawn_create::<NewsItem>(draft),
                    EntityDraft::Module(draft) => self.spawn_create::<Module>(draft),
                }
                Action::None
            }
            Action::SubmitUpdate { id, draft } => {
                match draft {
                    EntityDraft::Topic(draft) => self.spawn_update::<Topic>(id, draft),
                    EntityDraft::News(draft) => self.spawn_update::<NewsItem>(id, draft),
                    EntityDraft::Module(draft) => self.spawn_update::<Module>(id, draft),
                }
                Action::None
            }
            Action::SubmitDelete { kind, id } => {
                match kind {
                    ResourceKind::Topic => self.spawn_delete::<Topic>(id),
                    ResourceKind::News => self.spawn_delete::<NewsItem>(id),
                    ResourceKind::Module => self.spawn_delete::<Module>(id),
                }
                Action::None
            }
            Action::Notify { kind, message } => {
                self.notifications.raise(kind, message);
                Action::None
            }
            Action::DismissNotification => {
                self.notifications.dismiss();
                Action::None
            }
            Action::CollectionLoaded { session, kind, result } => {
                if session != self.session {
                    log::debug!("Dropping {} load from closed session {}", kind.plural(), session);
                    return Action::None;
                }
                match &result {
                    Ok(collection) => log::info!("Loaded {} {}", collection.len(), kind.plural()),
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", kind.plural(), e);
                        self.notifications.error(kind.error_message(Operation::Load));
                    }
                }
                if let Some(list) = self.workflow.as_collection_mut() {
                    list.on_loaded(result);
                }
                Action::None
            }
            Action::TopicsLoaded { session, result } => {
                if session != self.session {
                    log::debug!("Dropping topic lookup from closed session {}", session);
                    return Action::None;
                }
                if let Err(e) = &result {
                    log::warn!("Failed to load topics for lookup: {}", e);
                    self.notifications.error(ERROR_TOPICS_LOAD_FAILED);
                }
                if let Some(form) = self.workflow.as_form_mut() {
                    form.on_topics_loaded(result);
                } else if let Some(list) = self.workflow.as_collection_mut() {
                    list.on_topics_loaded(result);
                }
                Action::None
            }
            Action::Created { session, kind, result } => {
                let succeeded = self.report(kind, Operation::Create, result.as_ref().err());
                if session != self.session {
                    return Action::None;
                }
                if let Some(form) = self.workflow.as_form_mut() {
                    form.on_created(succeeded);
                }
                if succeeded {
                    Action::CloseWorkflow
                } else {
                    Action::None
                }
            }
            Action::Updated {
                session,
                id,
                draft,
                result,
            } => {
                self.report(draft.kind(), Operation::Update, result.as_ref().err());
                if session != self.session {
                    log::debug!("Not patching {} {} from closed session {}", draft.kind().singular(), id, session);
                    return Action::None;
                }
                if let Some(list) = self.workflow.as_collection_mut() {
                    list.on_updated(id, draft, result);
                }
                Action::None
            }
            Action::Deleted {
                session,
                kind,
                id,
                result,
            } => {
                self.report(kind, Operation::Delete, result.as_ref().err());
                if session != self.session {
                    log::debug!("Not removing {} {} from closed session {}", kind.singular(), id, session);
                    return Action::None;
                }
                if let Some(list) = self.workflow.as_collection_mut() {
                    list.on_deleted(id, result);
                }
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Log a finished mutation and raise its notification. Returns whether it succeeded.
    fn report(&mut self, kind: ResourceKind, operation: Operation, error: Option<&BackendError>) -> bool {
        match error {
            None => {
                log::info!("{:?} {} succeeded", operation, kind.singular());
                if let Some(message) = kind.success_message(operation) {
                    self.notifications.success(message);
                }
                true
            }
            Some(e) => {
                log::warn!("{:?} {} failed: {}", operation, kind.singular(), e);
                self.notifications.error(kind.error_message(operation));
                false
            }
        }
    }

    fn open_workflow(&mut self, kind: WorkflowKind) {
        self.session += 1;
        self.workflow = Workflow::open(kind, &self.icons);
        log::info!("Workflow: opened {:?} (session {})", kind, self.session);

        match kind {
            WorkflowKind::ManageTopics => self.spawn_load::<Topic>(),
            WorkflowKind::ManageNews => self.spawn_load::<NewsItem>(),
            WorkflowKind::ManageModules => self.spawn_load::<Module>(),
            _ => {}
        }
        if self.workflow.needs_topics() {
            self.spawn_topics_load();
        }
    }

    fn spawn_load<R: Resource>(&mut self) {
        let client = R::client(&self.clients);
        let session = self.session;
        self.task_manager
            .spawn_operation(format!("Load {}", R::KIND.plural()), async move {
                let result = client.list_all().await.map(R::wrap_collection);
                Action::CollectionLoaded {
                    session,
                    kind: R::KIND,
                    result,
                }
            });
    }

    fn spawn_topics_load(&mut self) {
        let client = self.clients.topics.clone();
        let session = self.session;
        self.task_manager
            .spawn_operation("Load topic lookup".to_string(), async move {
                let result = client.list_all().await;
                Action::TopicsLoaded { session, result }
            });
    }

    fn spawn_create<R: Resource>(&mut self, draft: R::Draft) {
        let client = R::client(&self.clients);
        let session = self.session;
        self.task_manager
            .spawn_operation(format!("Create {}", R::KIND.singular()), async move {
                let result = client.create(&draft).await.map(|record| record.map(R::into_entity));
                Action::Created {
                    session,
                    kind: R::KIND,
                    result,
                }
            });
    }

    fn spawn_update<R: Resource>(&mut self, id: i64, draft: R::Draft) {
        let client = R::client(&self.clients);
        let session = self.session;
        self.task_manager
            .spawn_operation(format!("Update {} {}", R::KIND.singular(), id), async move {
                let result = client
                    .update_by_id(id, &draft)
                    .await
                    .map(|record| record.map(R::into_entity));
                Action::Updated {
                    session,
                    id,
                    draft: R::wrap_draft(draft),
                    result,
                }
            });
    }

    fn spawn_delete<R: Resource>(&mut self, id: i64) {
        let client = R::client(&self.clients);
        let session = self.session;
        self.task_manager
            .spawn_operation(format!("Delete {} {}", R::KIND.singular(), id), async move {
                let result = client.delete_by_id(id).await;
                Action::Deleted {
                    session,
                    kind: R::KIND,
                    id,
                    result,
                }
            });
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        let running = self.task_manager.task_count();
        let activity = if running > 0 {
            format!("{} {} running", self.icons.pending(), running)
        } else {
            "idle".to_string()
        };
        let status = Paragraph::new(format!(" {} • {}", self.api_base_url, activity))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, chunks[0]);

        if self.notifications.visible().is_some() {
            f.render_widget(create_instructions_paragraph(&[shortcuts::CTRL_X_DISMISS]), chunks[1]);
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (content, status) = LayoutManager::main_layout(rect);

        self.home.render(f, content);
        if let Some(component) = self.workflow.as_component_mut() {
            component.render(f, content);
        }
        self.render_status_bar(f, status);

        if self.show_logs {
            render_logs_dialog(
                f,
                content,
                &self.logger,
                self.logs_scroll.offset,
                &mut self.logs_scroll.state,
            );
        }

        if let Some(notification) = self.notifications.visible() {
            render_notification(f, content, &self.icons, notification);
        }
    }
}
